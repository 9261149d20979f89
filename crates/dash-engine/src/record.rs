//! Typed records decoded from the validated frame.
//!
//! Once the five required columns are confirmed present, rows leave the
//! schema-less frame representation and become [`CampaignRecord`]s with named
//! fields; extra upload columns stay behind in the frame for raw display.

use polars::prelude::{AnyValue, Column, DataFrame};

use dash_common::{any_to_f64, any_to_string, is_missing_value, normalize_date_key};
use dash_model::{
    COL_ACTION_DATE, COL_CAMP_NAME, COL_NAME, COL_TOTAL_ORDER, COL_TOTAL_PAYOUT, DashError,
    QualityCounter, Result,
};

/// One conversion row in typed form.
///
/// Measures are `None` when the cell was missing or unparsable; the decode
/// step records those against the quality counter so they surface as
/// warnings instead of aborting the run.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignRecord {
    pub name: String,
    pub camp_name: String,
    /// Grouping key form: recognizable dates normalized to ISO `YYYY-MM-DD`.
    pub action_date: String,
    pub total_order: Option<f64>,
    pub total_payout: Option<f64>,
}

/// Decode every row of a (filtered) frame into typed records, in row order.
pub fn decode_records(
    frame: &DataFrame,
    quality: &mut QualityCounter,
) -> Result<Vec<CampaignRecord>> {
    let names = frame_column(frame, COL_NAME)?;
    let camps = frame_column(frame, COL_CAMP_NAME)?;
    let dates = frame_column(frame, COL_ACTION_DATE)?;
    let orders = frame_column(frame, COL_TOTAL_ORDER)?;
    let payouts = frame_column(frame, COL_TOTAL_PAYOUT)?;

    let mut records = Vec::with_capacity(frame.height());
    for idx in 0..frame.height() {
        records.push(CampaignRecord {
            name: cell_text(names, idx),
            camp_name: cell_text(camps, idx),
            action_date: normalize_date_key(&cell_text(dates, idx)),
            total_order: measure_value(orders, idx, COL_TOTAL_ORDER, quality),
            total_payout: measure_value(payouts, idx, COL_TOTAL_PAYOUT, quality),
        });
    }
    Ok(records)
}

fn frame_column<'a>(frame: &'a DataFrame, name: &str) -> Result<&'a Column> {
    frame
        .column(name)
        .map_err(|error| DashError::Message(format!("read column {name}: {error}")))
}

fn cell_text(column: &Column, idx: usize) -> String {
    any_to_string(column.get(idx).unwrap_or(AnyValue::Null))
        .trim()
        .to_string()
}

/// Extract one measure cell, recording a quality skip when it cannot
/// contribute to a sum.
fn measure_value(
    column: &Column,
    idx: usize,
    column_name: &str,
    quality: &mut QualityCounter,
) -> Option<f64> {
    let value = column.get(idx).unwrap_or(AnyValue::Null);
    match any_to_f64(value.clone()) {
        Some(parsed) => Some(parsed),
        None => {
            // Missing cells count against the column without an example value.
            if is_missing_value(&value) {
                quality.record_skip(column_name, "");
            } else {
                quality.record_skip(column_name, &any_to_string(value));
            }
            None
        }
    }
}
