//! Order-preserving row filtering by `name`.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use dash_common::any_to_string;
use dash_model::{COL_NAME, DashError, Result};
use dash_validate::ValidatedTable;

use crate::selection::FilterSelection;

/// The subsequence of the upload whose `name` is in the selection.
///
/// Row order matches the original table, which keeps downstream chart
/// rendering deterministic. Derived, never persisted, recomputed on every
/// filter change.
#[derive(Debug, Clone)]
pub struct FilteredTable {
    data: DataFrame,
}

impl FilteredTable {
    pub fn frame(&self) -> &DataFrame {
        &self.data
    }

    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Retain exactly the rows whose `name` value is in `selection`.
pub fn apply_filter(
    table: &ValidatedTable,
    selection: &FilterSelection,
) -> Result<FilteredTable> {
    let frame = table.frame();
    if selection.is_empty() {
        // Explicit valid edge case: nothing selected, nothing retained.
        return Ok(FilteredTable {
            data: frame.head(Some(0)),
        });
    }

    let names = frame
        .column(COL_NAME)
        .map_err(|error| DashError::Message(format!("read name column: {error}")))?;
    let mut keep = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        let value = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        keep.push(selection.contains(value.trim()));
    }

    let mask = BooleanChunked::from_slice("keep".into(), &keep);
    let data = frame
        .filter(&mask)
        .map_err(|error| DashError::Message(format!("filter rows: {error}")))?;
    debug!(
        selected = selection.len(),
        retained = data.height(),
        total = frame.height(),
        "filter applied"
    );
    Ok(FilteredTable { data })
}
