//! Multi-sheet xlsx writer.

use std::path::Path;

use campanha_common::any_to_string;
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::{debug, info};

use crate::error::{OutputError, Result};

/// File name used when the caller does not choose one.
pub const DEFAULT_FILE_NAME: &str = "base_campanha_final.xlsx";

pub const SHEET_KPI: &str = "kpi";
pub const SHEET_NAME_LOOKUP: &str = "nome";
pub const SHEET_LOYAL: &str = "fidelizados";
pub const SHEET_PANEL: &str = "painel";

/// Worksheet limits of the xlsx format; the header takes one row.
const MAX_ROWS: usize = 1_048_576;
const MAX_COLUMNS: usize = 16_384;

/// Tables to write. Absent tables get no sheet.
#[derive(Debug, Clone, Default)]
pub struct WorkbookSheets<'a> {
    pub kpi: Option<&'a DataFrame>,
    pub name_lookup: Option<&'a DataFrame>,
    pub loyal: Option<&'a DataFrame>,
    pub panel: Option<&'a DataFrame>,
}

impl<'a> WorkbookSheets<'a> {
    /// Present tables with their sheet names, in workbook order.
    pub fn present(&self) -> Vec<(&'static str, &'a DataFrame)> {
        [
            (SHEET_KPI, self.kpi),
            (SHEET_NAME_LOOKUP, self.name_lookup),
            (SHEET_LOYAL, self.loyal),
            (SHEET_PANEL, self.panel),
        ]
        .into_iter()
        .filter_map(|(name, df)| df.map(|df| (name, df)))
        .collect()
    }
}

/// Builds the in-memory workbook.
///
/// Each sheet has a bold header row with the column names, followed by the
/// rows in table order. There is no index column.
///
/// # Errors
///
/// [`OutputError::EmptyWorkbook`] when no table is present, or a writer error.
pub fn build_workbook(sheets: &WorkbookSheets<'_>) -> Result<Workbook> {
    let present = sheets.present();
    if present.is_empty() {
        return Err(OutputError::EmptyWorkbook);
    }

    let header = Format::new().set_bold();
    let mut workbook = Workbook::new();
    for (name, df) in present {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(name)?;
        write_sheet(worksheet, name, df, &header)?;
        debug!(
            sheet = name,
            rows = df.height(),
            columns = df.width(),
            "sheet written"
        );
    }
    Ok(workbook)
}

/// Writes the workbook to `path`, creating parent directories as needed.
pub fn write_workbook(path: &Path, sheets: &WorkbookSheets<'_>) -> Result<()> {
    let mut workbook = build_workbook(sheets)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    workbook.save(path)?;
    info!(path = %path.display(), "workbook saved");
    Ok(())
}

/// Serializes the workbook to xlsx bytes.
pub fn workbook_to_bytes(sheets: &WorkbookSheets<'_>) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(sheets)?;
    Ok(workbook.save_to_buffer()?)
}

fn write_sheet(worksheet: &mut Worksheet, name: &str, df: &DataFrame, header: &Format) -> Result<()> {
    if df.height() >= MAX_ROWS || df.width() > MAX_COLUMNS {
        return Err(OutputError::SheetTooLarge {
            sheet: name.to_string(),
            rows: df.height(),
            columns: df.width(),
        });
    }

    for (col_idx, column) in (0u16..).zip(df.get_columns()) {
        worksheet.write_string_with_format(0, col_idx, column.name().as_str(), header)?;
        for (row, row_idx) in (1u32..).zip(0..df.height()) {
            let value = column.get(row_idx).unwrap_or(AnyValue::Null);
            write_cell(worksheet, row, col_idx, value)?;
        }
    }
    worksheet.autofit();
    Ok(())
}

/// Writes one cell; nulls stay empty and numbers stay numeric.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, value: AnyValue<'_>) -> Result<()> {
    match value {
        AnyValue::Null => {}
        AnyValue::Boolean(b) => {
            worksheet.write_boolean(row, col, b)?;
        }
        AnyValue::Int8(_)
        | AnyValue::Int16(_)
        | AnyValue::Int32(_)
        | AnyValue::Int64(_)
        | AnyValue::UInt8(_)
        | AnyValue::UInt16(_)
        | AnyValue::UInt32(_)
        | AnyValue::UInt64(_)
        | AnyValue::Float32(_)
        | AnyValue::Float64(_) => match value.extract::<f64>() {
            Some(number) if number.is_finite() => {
                worksheet.write_number(row, col, number)?;
            }
            _ => {}
        },
        other => {
            worksheet.write_string(row, col, any_to_string(other))?;
        }
    }
    Ok(())
}
