//! Error types for workbook output.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing the campaign workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    /// No table was present, so there is no sheet to write.
    #[error("workbook has no sheets to write")]
    EmptyWorkbook,

    /// A table does not fit in a worksheet.
    #[error("sheet '{sheet}' exceeds worksheet limits ({rows} rows, {columns} columns)")]
    SheetTooLarge {
        sheet: String,
        rows: usize,
        columns: usize,
    },

    /// Failed to create the output directory.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The xlsx writer rejected a cell or failed to save.
    #[error("workbook error: {message}")]
    Workbook { message: String },

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<rust_xlsxwriter::XlsxError> for OutputError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        Self::Workbook {
            message: err.to_string(),
        }
    }
}

impl From<polars::prelude::PolarsError> for OutputError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for output operations.
pub type Result<T> = std::result::Result<T, OutputError>;
