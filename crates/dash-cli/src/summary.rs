use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::{AnyValue, DataFrame};

use dash_common::any_to_string;
use dash_engine::ChartSpec;
use dash_cli::report::ReportResult;

pub fn print_report(result: &ReportResult, limit: usize, show_charts: bool) {
    let view = &result.view;
    println!("Source: {}", view.source);
    println!(
        "Records: {} uploaded, {} after filter ({} of {} names selected)",
        view.record_count,
        view.filtered.record_count(),
        view.selection.len(),
        distinct_total(result),
    );

    println!();
    println!("Uploaded data (first {limit} rows):");
    println!("{}", frame_table(&result.raw, Some(limit)));

    println!();
    println!("Pivot table:");
    println!("{}", frame_table(&view.pivot, None));

    if !view.quality.is_clean() {
        print_quality(result);
    }

    if show_charts {
        for chart in &view.charts {
            print_chart(chart);
        }
    }
}

/// Distinct names in the upload: the selection defaults to all of them, so
/// the count comes from the preview frame rather than the filtered one.
fn distinct_total(result: &ReportResult) -> usize {
    let Ok(names) = result.raw.column("name") else {
        return result.view.selection.len();
    };
    let mut seen = std::collections::BTreeSet::new();
    for idx in 0..result.raw.height() {
        let value = any_to_string(names.get(idx).unwrap_or(AnyValue::Null));
        let trimmed = value.trim().to_string();
        if !trimmed.is_empty() {
            seen.insert(trimmed);
        }
    }
    seen.len()
}

fn print_quality(result: &ReportResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Skipped cells"),
        header_cell("Examples"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for issue in &result.view.quality.issues {
        let examples = if issue.examples.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(issue.examples.join(", "))
        };
        table.add_row(vec![
            Cell::new(&issue.column),
            Cell::new(issue.skipped).fg(Color::Yellow),
            examples,
        ]);
    }
    println!();
    println!("Data quality warnings (cells excluded from sums):");
    println!("{table}");
}

fn print_chart(chart: &ChartSpec) {
    println!();
    println!("Chart: {}", chart.title);
    println!(
        "  grouped bars of {} - x: {}, color: {}, facet: {}",
        chart.value_label, chart.x_column, chart.series_column, chart.facet_column
    );
    let facets = chart.facets();
    println!("  {} bar(s) across {} facet(s)", chart.bars.len(), facets.len());
}

/// Render any DataFrame as a comfy-table, optionally truncated.
pub fn frame_table(frame: &DataFrame, limit: Option<usize>) -> Table {
    let mut table = Table::new();
    table.set_header(
        frame
            .get_column_names()
            .iter()
            .map(|name| header_cell(name.as_str()))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);

    let height = frame.height();
    let shown = limit.map_or(height, |limit| limit.min(height));
    let columns = frame.get_columns();
    for idx in 0..shown {
        let row: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let value = any_to_string(column.get(idx).unwrap_or(AnyValue::Null));
                if value.is_empty() {
                    dim_cell("-")
                } else {
                    Cell::new(value)
                }
            })
            .collect();
        table.add_row(row);
    }
    if shown < height {
        table.add_row(vec![dim_cell(format!("... {} more", height - shown))]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
