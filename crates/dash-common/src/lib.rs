pub mod dates;
pub mod polars;

pub use dates::normalize_date_key;
pub use polars::{
    any_to_f64, any_to_string, any_to_string_non_empty, format_numeric, is_missing_value,
    parse_f64,
};
