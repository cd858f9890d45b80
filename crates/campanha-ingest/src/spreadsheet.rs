//! Spreadsheet input (xls, xlsx, xlsm, xlsb) through `calamine`.

use std::fmt::Display;
use std::io::Cursor;

use calamine::{Data, Reader, Xls, Xlsb, Xlsx};
use campanha_common::format_numeric;
use polars::prelude::DataFrame;

use crate::error::{IngestError, Result};
use crate::frame::{frame_from_rows, normalize_cell, normalize_header};
use crate::source::SourceFormat;

/// Reads the first worksheet of a spreadsheet; its first row is the header.
pub(crate) fn read_spreadsheet_bytes(
    name: &str,
    bytes: &[u8],
    format: SourceFormat,
) -> Result<DataFrame> {
    match format {
        SourceFormat::Xls => read_first_sheet::<Xls<_>>(name, bytes),
        SourceFormat::Xlsx | SourceFormat::Xlsm => read_first_sheet::<Xlsx<_>>(name, bytes),
        SourceFormat::Xlsb => read_first_sheet::<Xlsb<_>>(name, bytes),
        SourceFormat::Csv => Err(IngestError::Spreadsheet {
            name: name.to_string(),
            message: "csv is not a spreadsheet format".to_string(),
        }),
    }
}

fn read_first_sheet<'a, R>(name: &str, bytes: &'a [u8]) -> Result<DataFrame>
where
    R: Reader<Cursor<&'a [u8]>>,
    R::Error: Display,
{
    let mut workbook = R::new(Cursor::new(bytes)).map_err(|e| spreadsheet_error(name, &e))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoWorksheet {
            name: name.to_string(),
        })?;
    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| spreadsheet_error(name, &e))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| normalize_header(&cell_text(cell).unwrap_or_default()))
                .collect()
        })
        .unwrap_or_default();

    let mut data: Vec<Vec<Option<String>>> = Vec::new();
    for row in rows {
        let values: Vec<Option<String>> = row.iter().map(cell_text).collect();
        if values.iter().all(Option::is_none) {
            continue;
        }
        data.push(values);
    }

    tracing::debug!(
        file = %name,
        sheet = %sheet_name,
        columns = headers.len(),
        rows = data.len(),
        "decoded spreadsheet"
    );
    frame_from_rows(&headers, &data)
}

/// Text form of a spreadsheet cell; empty and error cells are `None`.
fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) => normalize_cell(s),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => normalize_cell(&format_numeric(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => normalize_cell(s),
        other => normalize_cell(&other.to_string()),
    }
}

fn spreadsheet_error(name: &str, err: &impl Display) -> IngestError {
    IngestError::Spreadsheet {
        name: name.to_string(),
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_text_formats_numbers_without_fraction() {
        assert_eq!(cell_text(&Data::Float(11988881234.0)), Some("11988881234".to_string()));
        assert_eq!(cell_text(&Data::Float(1.25)), Some("1.25".to_string()));
        assert_eq!(cell_text(&Data::Int(7)), Some("7".to_string()));
    }

    #[test]
    fn cell_text_blank_and_error_are_none() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::String("  ".to_string())), None);
        assert_eq!(cell_text(&Data::Error(calamine::CellErrorType::NA)), None);
    }

    #[test]
    fn garbage_bytes_are_spreadsheet_error() {
        let err = read_spreadsheet_bytes("kpi.xlsx", b"not a zip", SourceFormat::Xlsx).unwrap_err();
        assert!(matches!(err, IngestError::Spreadsheet { .. }));
    }
}
