//! Required-column schema validation.
//!
//! An upload is either fully valid (all five required columns present by
//! exact, case-sensitive name) or rejected outright. There is no partial
//! acceptance, and nothing downstream runs on a rejected table.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use dash_ingest::RawTable;
use dash_model::{DashError, REQUIRED_COLUMNS};

/// A table that passed schema validation.
///
/// Constructible only through [`validate`], so downstream operations that
/// take `&ValidatedTable` can rely on the required columns being present.
#[derive(Debug, Clone)]
pub struct ValidatedTable {
    table: RawTable,
}

impl ValidatedTable {
    pub fn raw(&self) -> &RawTable {
        &self.table
    }

    pub fn frame(&self) -> &DataFrame {
        &self.table.data
    }

    pub fn source(&self) -> &str {
        &self.table.source
    }

    pub fn record_count(&self) -> usize {
        self.table.record_count()
    }

    pub fn into_raw(self) -> RawTable {
        self.table
    }
}

/// Check that the upload carries every required column.
///
/// On success the table passes through unchanged, tagged as validated. On
/// failure the error carries both the missing names and the full required
/// list for user display. Idempotent; the only side effect is a log event.
pub fn validate(table: RawTable) -> Result<ValidatedTable, DashError> {
    let columns = table.column_names();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|column| column == required.name))
        .map(|required| required.name.to_string())
        .collect();

    if !missing.is_empty() {
        warn!(
            source = %table.source,
            missing = missing.join(", "),
            "upload rejected: required columns absent"
        );
        return Err(DashError::missing_columns(missing));
    }

    debug!(
        source = %table.source,
        records = table.record_count(),
        "schema validated"
    );
    Ok(ValidatedTable { table })
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::df;

    fn raw(data: DataFrame) -> RawTable {
        RawTable::new("upload.csv", data)
    }

    fn full_frame() -> DataFrame {
        df! {
            "name" => ["alice"],
            "camp_name" => ["spring"],
            "action_date" => ["2024-01-01"],
            "Total_Order" => [10i64],
            "Total_Payout" => [5i64],
        }
        .unwrap()
    }

    #[test]
    fn full_schema_passes_through_unchanged() {
        let validated = validate(raw(full_frame())).expect("valid upload");
        assert_eq!(validated.record_count(), 1);
        assert_eq!(validated.source(), "upload.csv");
        assert_eq!(validated.frame().width(), 5);
    }

    #[test]
    fn missing_column_is_rejected_with_required_list() {
        let data = df! {
            "name" => ["alice"],
            "camp_name" => ["spring"],
            "action_date" => ["2024-01-01"],
            "Total_Order" => [10i64],
        }
        .unwrap();

        let error = validate(raw(data)).expect_err("missing Total_Payout");
        let DashError::MissingColumns { missing, required } = error else {
            panic!("expected MissingColumns");
        };
        assert_eq!(missing, vec!["Total_Payout".to_string()]);
        assert_eq!(required.len(), 5);
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let data = df! {
            "Name" => ["alice"],
            "camp_name" => ["spring"],
            "action_date" => ["2024-01-01"],
            "Total_Order" => [10i64],
            "total_payout" => [5i64],
        }
        .unwrap();

        let error = validate(raw(data)).expect_err("case mismatch must fail");
        let DashError::MissingColumns { missing, .. } = error else {
            panic!("expected MissingColumns");
        };
        assert_eq!(
            missing,
            vec!["name".to_string(), "Total_Payout".to_string()]
        );
    }

    #[test]
    fn extra_columns_are_tolerated() {
        let data = df! {
            "name" => ["alice"],
            "camp_name" => ["spring"],
            "action_date" => ["2024-01-01"],
            "Total_Order" => [10i64],
            "Total_Payout" => [5i64],
            "notes" => ["extra"],
        }
        .unwrap();

        let validated = validate(raw(data)).expect("extra columns are fine");
        assert_eq!(validated.frame().width(), 6);
    }

    #[test]
    fn validation_is_idempotent() {
        let first = validate(raw(full_frame())).expect("first pass");
        let second = validate(first.into_raw()).expect("second pass");
        assert_eq!(second.record_count(), 1);
    }

    #[test]
    fn headers_only_table_validates() {
        let empty = df! {
            "name" => Vec::<String>::new(),
            "camp_name" => Vec::<String>::new(),
            "action_date" => Vec::<String>::new(),
            "Total_Order" => Vec::<String>::new(),
            "Total_Payout" => Vec::<String>::new(),
        }
        .unwrap();
        let validated = validate(raw(empty)).expect("empty body validates");
        assert_eq!(validated.record_count(), 0);
    }
}
