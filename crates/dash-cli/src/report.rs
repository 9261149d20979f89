//! One-shot dashboard pipeline: ingest, validate, filter, aggregate.
//!
//! The CLI drives the same session type an interactive front end would,
//! replaying one upload and one selection change, then hands the recomputed
//! view to the summary renderer.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use polars::prelude::DataFrame;
use serde_json::json;
use tracing::info_span;

use dash_engine::{DashboardSession, DashboardView};
use dash_ingest::read_csv_table;

/// Everything a renderer needs for one report run.
#[derive(Debug)]
pub struct ReportResult {
    /// The raw upload as parsed, for the preview table.
    pub raw: DataFrame,
    /// The recomputed dashboard view.
    pub view: DashboardView,
}

/// Run the full pipeline over one CSV file.
///
/// `names` narrows the filter selection; `None` keeps the default full
/// distinct set. Validation failure surfaces as an error carrying the
/// required-column list.
pub fn run_report(csv_file: &Path, names: Option<&[String]>) -> Result<ReportResult> {
    let span = info_span!("report", file = %csv_file.display());
    let _guard = span.enter();

    let table = read_csv_table(csv_file)?;
    let raw = table.data.clone();

    let mut session = DashboardSession::new();
    session
        .load(table)
        .with_context(|| format!("validate {}", csv_file.display()))?;
    if let Some(names) = names {
        session.set_selection(names.iter().cloned());
    }

    let view = session
        .view()?
        .ok_or_else(|| anyhow!("no table loaded for {}", csv_file.display()))?;
    Ok(ReportResult { raw, view })
}

/// Machine-readable rendering of a report, stable enough to script against.
pub fn report_json(result: &ReportResult) -> serde_json::Value {
    let view = &result.view;
    json!({
        "source": view.source,
        "records": view.record_count,
        "filtered_records": view.filtered.record_count(),
        "selection": view.selection.names(),
        "aggregates": view.aggregates,
        "charts": view.charts,
        "quality": view.quality,
    })
}
