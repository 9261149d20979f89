//! Date-key normalization for grouping.
//!
//! `action_date` arrives as text (spreadsheet ingestion keeps date-like
//! columns as strings). Grouping keys on the ISO rendering of recognizable
//! dates so `2024/01/01` and `2024-01-01` land in the same group; values in
//! no recognizable format group by their trimmed text.

use chrono::NaiveDate;

/// Formats accepted for `action_date` cells, tried in order.
const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%b-%Y"];

/// Normalize a raw `action_date` cell into its grouping key.
///
/// Recognizable dates render as ISO `YYYY-MM-DD`; anything else is the
/// trimmed input. Datetime strings are keyed by their date part.
pub fn normalize_date_key(raw: &str) -> String {
    let trimmed = raw.trim();
    // Datetime cells key on the date part only.
    let date_part = trimmed
        .split_once('T')
        .or_else(|| trimmed.split_once(' '))
        .map_or(trimmed, |(head, _)| head);
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(date_part, format) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    trimmed.to_string()
}
