//! Per-session dashboard state.
//!
//! A session holds at most the current upload. Every interaction (a new
//! upload, a selection change) triggers a full recomputation of the derived
//! view from the current table; derived state is never mutated in place, so
//! a re-filter can never observe leftovers from a previous table.

use polars::prelude::DataFrame;
use tracing::info;

use dash_ingest::RawTable;
use dash_model::{QualityReport, Result};
use dash_validate::{ValidatedTable, validate};

use crate::aggregate::{AggregateRow, aggregate};
use crate::chart::{ChartSpec, chart_specs};
use crate::filter::FilteredTable;
use crate::pivot::pivot_frame;
use crate::selection::FilterSelection;

/// Everything the rendering collaborator needs for one interaction,
/// recomputed from scratch.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Where the upload came from, for display.
    pub source: String,
    /// Record count of the raw upload.
    pub record_count: usize,
    /// The selection the view was computed under.
    pub selection: FilterSelection,
    /// Rows retained by the filter, in original order.
    pub filtered: FilteredTable,
    /// Grouped sums, sorted by key.
    pub aggregates: Vec<AggregateRow>,
    /// The aggregate rows reshaped for table display.
    pub pivot: DataFrame,
    /// Grouped-bar-chart intents, one per measure.
    pub charts: Vec<ChartSpec>,
    /// Skip-and-warn accounting for unparsable measure cells.
    pub quality: QualityReport,
}

/// Holds one upload per session; no state is shared across sessions.
#[derive(Debug, Default)]
pub struct DashboardSession {
    table: Option<ValidatedTable>,
    selection: FilterSelection,
}

impl DashboardSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a table has been loaded and validated.
    pub fn has_table(&self) -> bool {
        self.table.is_some()
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Replace the session's table with a fresh upload.
    ///
    /// Validation failure is terminal for that upload: the session ends up
    /// with no table (a previously loaded one is discarded, since the user
    /// replaced it) and the error propagates for display. On success the
    /// selection resets to the full distinct `name` set of the new table.
    pub fn load(&mut self, upload: RawTable) -> Result<()> {
        self.table = None;
        self.selection = FilterSelection::empty();
        let validated = validate(upload)?;
        info!(
            source = %validated.source(),
            records = validated.record_count(),
            "upload loaded"
        );
        self.selection = FilterSelection::full_for(&validated);
        self.table = Some(validated);
        Ok(())
    }

    /// Replace the selection with the requested names, intersected with the
    /// distinct values of the current table. Without a table this is a
    /// no-op; the next upload resets the selection anyway.
    pub fn set_selection<I>(&mut self, requested: I)
    where
        I: IntoIterator<Item = String>,
    {
        if let Some(table) = &self.table {
            self.selection = FilterSelection::from_names(requested, table);
        }
    }

    /// Discard the current upload, returning the session to its initial
    /// nothing-uploaded state.
    pub fn clear(&mut self) {
        self.table = None;
        self.selection = FilterSelection::empty();
    }

    /// Recompute the full dashboard view for the current table.
    ///
    /// `None` while nothing is uploaded. An informational state, not an
    /// error; downstream rendering simply does not run.
    pub fn view(&self) -> Result<Option<DashboardView>> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        let (filtered, aggregates, quality) = aggregate(table, &self.selection)?;
        let pivot = pivot_frame(&aggregates)?;
        let charts = chart_specs(&aggregates);
        Ok(Some(DashboardView {
            source: table.source().to_string(),
            record_count: table.record_count(),
            selection: self.selection.clone(),
            filtered,
            aggregates,
            pivot,
            charts,
            quality,
        }))
    }
}
