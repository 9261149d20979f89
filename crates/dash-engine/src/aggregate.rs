//! Group-by-sum aggregation over the filtered table.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{info, warn};

use dash_model::{QualityCounter, QualityReport, Result};
use dash_validate::ValidatedTable;

use crate::filter::{FilteredTable, apply_filter};
use crate::record::decode_records;
use crate::selection::FilterSelection;

/// One grouped-and-summed output record, keyed by
/// (`name`, `camp_name`, `action_date`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRow {
    pub name: String,
    pub camp_name: String,
    pub action_date: String,
    #[serde(rename = "sum_Total_Order")]
    pub sum_total_order: f64,
    #[serde(rename = "sum_Total_Payout")]
    pub sum_total_payout: f64,
}

#[derive(Debug, Default, Clone, Copy)]
struct GroupSums {
    total_order: f64,
    total_payout: f64,
}

/// Filter the table by `selection`, then group by the key triple and sum the
/// two measures.
///
/// Unparsable or missing measure cells are excluded from that column's sum
/// only and counted in the returned [`QualityReport`]; a row whose measures
/// are all unparsable still anchors its group. Output rows are sorted by key,
/// so the result is identical for any input row order. An empty selection
/// yields empty outputs, not an error.
pub fn aggregate(
    table: &ValidatedTable,
    selection: &FilterSelection,
) -> Result<(FilteredTable, Vec<AggregateRow>, QualityReport)> {
    let filtered = apply_filter(table, selection)?;
    let mut quality = QualityCounter::new();
    let records = decode_records(filtered.frame(), &mut quality)?;

    let mut groups: BTreeMap<(String, String, String), GroupSums> = BTreeMap::new();
    for record in records {
        let key = (record.name, record.camp_name, record.action_date);
        let sums = groups.entry(key).or_default();
        if let Some(value) = record.total_order {
            sums.total_order += value;
        }
        if let Some(value) = record.total_payout {
            sums.total_payout += value;
        }
    }

    let rows: Vec<AggregateRow> = groups
        .into_iter()
        .map(|((name, camp_name, action_date), sums)| AggregateRow {
            name,
            camp_name,
            action_date,
            sum_total_order: sums.total_order,
            sum_total_payout: sums.total_payout,
        })
        .collect();

    let report = quality.into_report();
    if !report.is_clean() {
        warn!(
            skipped = report.total_skipped(),
            "unparsable measure cells excluded from sums"
        );
    }
    info!(
        retained = filtered.record_count(),
        groups = rows.len(),
        "aggregation complete"
    );
    Ok((filtered, rows, report))
}
