//! Header-row peeking.
//!
//! Reads only the first record of a CSV source to get exact column names,
//! stripping a UTF-8 BOM and collapsing internal whitespace. Used for debug
//! logging and for cheap inspection before a full parse.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

/// Read the header row from an in-memory CSV source.
pub fn read_headers<R: Read>(source: R) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let headers = reader.headers().context("read csv header row")?;
    Ok(headers.iter().map(normalize_header).collect())
}

/// Read the header row from a CSV file.
pub fn read_headers_from_path(path: &Path) -> Result<Vec<String>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("open csv: {}", path.display()))?;
    read_headers(file).with_context(|| format!("read csv header: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_bom_stripped() {
        let csv = "\u{feff}name, camp_name ,action_date\nalice,c1,2024-01-01\n";
        let headers = read_headers(csv.as_bytes()).unwrap();
        assert_eq!(headers, vec!["name", "camp_name", "action_date"]);
    }

    #[test]
    fn internal_whitespace_collapses() {
        let csv = "Total  Order,Total_Payout\n1,2\n";
        let headers = read_headers(csv.as_bytes()).unwrap();
        assert_eq!(headers[0], "Total Order");
    }
}
