//! Pivot-table reshaping for display.

use polars::prelude::{Column, DataFrame, NamedFrom, Series};

use dash_model::{DashError, Result};

use crate::aggregate::AggregateRow;

/// Reshape the aggregate sequence into a five-column display frame indexed
/// by `name`, `camp_name`, `action_date` with the two summed measures.
///
/// Row order follows the aggregate sequence (sorted by key).
pub fn pivot_frame(rows: &[AggregateRow]) -> Result<DataFrame> {
    let mut names: Vec<String> = Vec::with_capacity(rows.len());
    let mut camps: Vec<String> = Vec::with_capacity(rows.len());
    let mut dates: Vec<String> = Vec::with_capacity(rows.len());
    let mut orders: Vec<f64> = Vec::with_capacity(rows.len());
    let mut payouts: Vec<f64> = Vec::with_capacity(rows.len());
    for row in rows {
        names.push(row.name.clone());
        camps.push(row.camp_name.clone());
        dates.push(row.action_date.clone());
        orders.push(row.sum_total_order);
        payouts.push(row.sum_total_payout);
    }

    let columns: Vec<Column> = vec![
        Series::new("name".into(), names).into(),
        Series::new("camp_name".into(), camps).into(),
        Series::new("action_date".into(), dates).into(),
        Series::new("sum_Total_Order".into(), orders).into(),
        Series::new("sum_Total_Payout".into(), payouts).into(),
    ];
    DataFrame::new(columns).map_err(|error| DashError::Message(format!("build pivot: {error}")))
}
