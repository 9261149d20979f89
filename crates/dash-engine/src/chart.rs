//! Grouped-bar-chart encoding intents.
//!
//! The engine supplies data plus encoding intent only; pixel rendering
//! belongs to the external chart collaborator. Each view carries two
//! identically shaped charts, one per summed measure: bars along `name`,
//! colored by `camp_name`, faceted by `action_date`.

use serde::Serialize;

use dash_model::{COL_ACTION_DATE, COL_CAMP_NAME, COL_NAME};

use crate::aggregate::AggregateRow;

/// Which summed measure a chart plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    TotalOrder,
    TotalPayout,
}

impl Measure {
    /// Column name of the measure in the pivot frame.
    pub fn column(self) -> &'static str {
        match self {
            Measure::TotalOrder => "sum_Total_Order",
            Measure::TotalPayout => "sum_Total_Payout",
        }
    }

    /// Axis label shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Measure::TotalOrder => "Total Orders",
            Measure::TotalPayout => "Total Payouts",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Measure::TotalOrder => "Total Orders by Campaign and Date",
            Measure::TotalPayout => "Total Payouts by Campaign and Date",
        }
    }

    fn value(self, row: &AggregateRow) -> f64 {
        match self {
            Measure::TotalOrder => row.sum_total_order,
            Measure::TotalPayout => row.sum_total_payout,
        }
    }
}

/// One bar: position along x, series (color), facet, height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartBar {
    pub x: String,
    pub series: String,
    pub facet: String,
    pub value: f64,
}

/// A declarative grouped-bar-chart specification for the renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub measure: Measure,
    /// Column driving bar position.
    pub x_column: &'static str,
    /// Column driving bar color/grouping.
    pub series_column: &'static str,
    /// Column splitting the chart into facets.
    pub facet_column: &'static str,
    pub value_label: &'static str,
    pub bars: Vec<ChartBar>,
}

impl ChartSpec {
    /// Build the grouped bar chart of one measure over the aggregate rows.
    pub fn grouped_bar(measure: Measure, rows: &[AggregateRow]) -> Self {
        let bars = rows
            .iter()
            .map(|row| ChartBar {
                x: row.name.clone(),
                series: row.camp_name.clone(),
                facet: row.action_date.clone(),
                value: measure.value(row),
            })
            .collect();
        Self {
            title: measure.title().to_string(),
            measure,
            x_column: COL_NAME,
            series_column: COL_CAMP_NAME,
            facet_column: COL_ACTION_DATE,
            value_label: measure.label(),
            bars,
        }
    }

    /// Distinct facet values in bar order, for renderers that lay out one
    /// panel per `action_date`.
    pub fn facets(&self) -> Vec<&str> {
        let mut facets: Vec<&str> = Vec::new();
        for bar in &self.bars {
            if !facets.contains(&bar.facet.as_str()) {
                facets.push(&bar.facet);
            }
        }
        facets
    }
}

/// The two chart specifications of a dashboard view, in display order.
pub fn chart_specs(rows: &[AggregateRow]) -> Vec<ChartSpec> {
    vec![
        ChartSpec::grouped_bar(Measure::TotalOrder, rows),
        ChartSpec::grouped_bar(Measure::TotalPayout, rows),
    ]
}
