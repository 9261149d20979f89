pub mod error;
pub mod quality;
pub mod schema;

pub use error::{DashError, Result};
pub use quality::{QualityCounter, QualityIssue, QualityReport};
pub use schema::{
    COL_ACTION_DATE, COL_CAMP_NAME, COL_NAME, COL_TOTAL_ORDER, COL_TOTAL_PAYOUT, ColumnKind,
    MEASURE_COLUMNS, REQUIRED_COLUMNS, RequiredColumn, required_column_names,
};
