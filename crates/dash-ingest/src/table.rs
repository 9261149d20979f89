//! The uploaded dataset before validation.

use std::collections::BTreeSet;

use polars::prelude::{AnyValue, DataFrame};

use dash_common::any_to_string;

/// An uploaded table: the parsed frame plus where it came from.
///
/// One `RawTable` lives per session and is replaced wholesale when the user
/// uploads a new file; everything downstream is derived from it.
#[derive(Debug, Clone)]
pub struct RawTable {
    /// Display name of the upload source (file name or widget-supplied name).
    pub source: String,
    /// The parsed contents.
    pub data: DataFrame,
}

impl RawTable {
    pub fn new(source: impl Into<String>, data: DataFrame) -> Self {
        Self {
            source: source.into(),
            data,
        }
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }

    /// Column names in upload order.
    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect()
    }

    /// Distinct non-empty values of a column, rendered as trimmed strings.
    ///
    /// Feeds the filter widget's option list; the column not existing yields
    /// an empty set (validation catches that before anything relies on it).
    pub fn distinct_strings(&self, column: &str) -> BTreeSet<String> {
        let mut values = BTreeSet::new();
        let Ok(series) = self.data.column(column) else {
            return values;
        };
        for idx in 0..self.data.height() {
            let value = any_to_string(series.get(idx).unwrap_or(AnyValue::Null));
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                values.insert(trimmed.to_string());
            }
        }
        values
    }
}
