//! CSV parsing into a [`RawTable`].
//!
//! The first line is the header row; records follow, comma-delimited with
//! double-quote escaping. Type inference runs over the whole file so a
//! column is numeric only when every non-empty cell parses; mixed columns
//! (`10`, `20`, `N/A`) stay textual, which is what lets aggregation skip
//! individual bad cells instead of losing them at parse time.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::{CsvReadOptions, SerReader};
use tracing::debug;

use crate::headers::read_headers;
use crate::table::RawTable;

/// Parse raw CSV bytes handed over by the upload widget.
pub fn read_upload(bytes: &[u8], source_name: &str) -> Result<RawTable> {
    let headers = read_headers(bytes)
        .with_context(|| format!("read upload header: {source_name}"))?;
    debug!(source = source_name, columns = headers.len(), "parsing upload");

    let data = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(bytes.to_vec()))
        .finish()
        .with_context(|| format!("parse upload: {source_name}"))?;

    debug!(
        source = source_name,
        records = data.height(),
        "upload parsed"
    );
    Ok(RawTable::new(source_name, data))
}

/// Parse a CSV file from disk with the same semantics as [`read_upload`].
pub fn read_csv_table(path: &Path) -> Result<RawTable> {
    let data = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("open csv: {}", path.display()))?
        .finish()
        .with_context(|| format!("parse csv: {}", path.display()))?;

    let source = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());
    debug!(source = %source, records = data.height(), "csv parsed");
    Ok(RawTable::new(source, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::DataType;

    const SAMPLE: &str = "name,camp_name,action_date,Total_Order,Total_Payout\n\
                          alice,spring,2024-01-01,10,5.5\n\
                          bob,spring,2024-01-01,20,15\n";

    #[test]
    fn upload_parses_header_and_records() {
        let table = read_upload(SAMPLE.as_bytes(), "upload.csv").unwrap();
        assert_eq!(table.record_count(), 2);
        assert_eq!(
            table.column_names(),
            vec![
                "name",
                "camp_name",
                "action_date",
                "Total_Order",
                "Total_Payout"
            ]
        );
    }

    #[test]
    fn numeric_looking_columns_become_numeric() {
        let table = read_upload(SAMPLE.as_bytes(), "upload.csv").unwrap();
        let dtype = table.data.column("Total_Order").unwrap().dtype().clone();
        assert!(
            matches!(dtype, DataType::Int64 | DataType::Float64),
            "got {dtype:?}"
        );
    }

    #[test]
    fn mixed_measure_column_stays_textual() {
        let csv = "name,camp_name,action_date,Total_Order,Total_Payout\n\
                   alice,spring,2024-01-01,10,5\n\
                   bob,spring,2024-01-01,N/A,15\n";
        let table = read_upload(csv.as_bytes(), "upload.csv").unwrap();
        let dtype = table.data.column("Total_Order").unwrap().dtype().clone();
        assert!(matches!(dtype, DataType::String), "got {dtype:?}");
    }

    #[test]
    fn headers_only_upload_has_zero_records() {
        let csv = "name,camp_name,action_date,Total_Order,Total_Payout\n";
        let table = read_upload(csv.as_bytes(), "upload.csv").unwrap();
        assert_eq!(table.record_count(), 0);
        assert_eq!(table.column_names().len(), 5);
    }

    #[test]
    fn quoted_cells_keep_embedded_commas() {
        let csv = "name,camp_name,action_date,Total_Order,Total_Payout\n\
                   \"doe, jane\",spring,2024-01-01,1,2\n";
        let table = read_upload(csv.as_bytes(), "upload.csv").unwrap();
        let distinct = table.distinct_strings("name");
        assert!(distinct.contains("doe, jane"));
    }
}
