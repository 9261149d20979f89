//! Required-column schema for uploaded campaign data.
//!
//! An upload is usable only when all five required columns are present by
//! exact, case-sensitive name match. Extra columns are carried through for
//! display but never participate in filtering or aggregation.

use serde::{Deserialize, Serialize};

/// The categorical column the filter widget operates on.
pub const COL_NAME: &str = "name";
/// The campaign grouping column.
pub const COL_CAMP_NAME: &str = "camp_name";
/// The date (or date-like string) grouping column.
pub const COL_ACTION_DATE: &str = "action_date";
/// Summed order measure.
pub const COL_TOTAL_ORDER: &str = "Total_Order";
/// Summed payout measure.
pub const COL_TOTAL_PAYOUT: &str = "Total_Payout";

/// Expected content kind of a required column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    /// String values grouped and filtered by identity.
    Categorical,
    /// Date or date-like string values.
    Date,
    /// Numeric values summed during aggregation.
    Measure,
}

impl ColumnKind {
    pub fn describe(self) -> &'static str {
        match self {
            ColumnKind::Categorical => "categorical string",
            ColumnKind::Date => "date or date-like string",
            ColumnKind::Measure => "numeric measure",
        }
    }
}

/// A column every upload must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RequiredColumn {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// The full required-column set, in display order.
pub const REQUIRED_COLUMNS: [RequiredColumn; 5] = [
    RequiredColumn {
        name: COL_NAME,
        kind: ColumnKind::Categorical,
    },
    RequiredColumn {
        name: COL_CAMP_NAME,
        kind: ColumnKind::Categorical,
    },
    RequiredColumn {
        name: COL_ACTION_DATE,
        kind: ColumnKind::Date,
    },
    RequiredColumn {
        name: COL_TOTAL_ORDER,
        kind: ColumnKind::Measure,
    },
    RequiredColumn {
        name: COL_TOTAL_PAYOUT,
        kind: ColumnKind::Measure,
    },
];

/// The measure columns summed per group, in output order.
pub const MEASURE_COLUMNS: [&str; 2] = [COL_TOTAL_ORDER, COL_TOTAL_PAYOUT];

/// Names of all required columns, in display order.
pub fn required_column_names() -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .map(|column| column.name.to_string())
        .collect()
}
