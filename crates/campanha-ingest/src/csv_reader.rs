//! Comma-separated input.

use csv::ReaderBuilder;
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::frame::{frame_from_rows, normalize_cell, normalize_header};

/// Reads CSV bytes whose first record is the header row.
///
/// Records may be ragged and fully blank records are skipped.
pub(crate) fn read_csv_bytes(name: &str, bytes: &[u8]) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes);

    let mut records = reader.records();
    let headers: Vec<String> = match records.next() {
        Some(record) => {
            let record = record.map_err(|e| csv_error(name, &e))?;
            record.iter().map(normalize_header).collect()
        }
        None => Vec::new(),
    };

    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in records {
        let record = record.map_err(|e| csv_error(name, &e))?;
        let row: Vec<Option<String>> = record.iter().map(normalize_cell).collect();
        if row.iter().all(Option::is_none) {
            continue;
        }
        rows.push(row);
    }

    tracing::debug!(
        file = %name,
        columns = headers.len(),
        rows = rows.len(),
        "decoded csv"
    );
    frame_from_rows(&headers, &rows)
}

fn csv_error(name: &str, err: &csv::Error) -> IngestError {
    IngestError::CsvParse {
        name: name.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_header_and_rows() {
        let df = read_csv_bytes("kpi.csv", b"Contato,Whatsapp Principal\nana,(11) 9\nbia,22\n").unwrap();
        assert_eq!(df.shape(), (2, 2));
        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, vec!["Contato", "Whatsapp Principal"]);
    }

    #[test]
    fn empty_input_is_empty_frame() {
        let df = read_csv_bytes("kpi.csv", b"").unwrap();
        assert_eq!(df.shape(), (0, 0));
    }

    #[test]
    fn skips_blank_records() {
        let df = read_csv_bytes("kpi.csv", b"A,B\n1,2\n,\n3,4\n").unwrap();
        assert_eq!(df.height(), 2);
    }

    #[test]
    fn invalid_utf8_is_parse_error() {
        let err = read_csv_bytes("kpi.csv", b"A,B\n\xff\xfe,1\n").unwrap_err();
        assert!(matches!(err, IngestError::CsvParse { .. }));
    }
}
