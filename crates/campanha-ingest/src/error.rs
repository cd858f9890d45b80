//! Error types for campaign base ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a source table.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the maximum accepted size.
    #[error("file too large: {path} ({size} bytes, max {max_size} bytes)")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Format Errors ===
    /// Extension is missing or not one of the supported formats.
    #[error("unsupported format for {name}: '{extension}'")]
    UnsupportedFormat { name: String, extension: String },

    /// Failed to decode CSV content.
    #[error("failed to parse CSV {name}: {message}")]
    CsvParse { name: String, message: String },

    /// Failed to decode spreadsheet content.
    #[error("failed to read spreadsheet {name}: {message}")]
    Spreadsheet { name: String, message: String },

    /// Workbook contains no worksheet to read.
    #[error("spreadsheet has no worksheets: {name}")]
    NoWorksheet { name: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::UnsupportedFormat {
            name: "kpi.ods".to_string(),
            extension: "ods".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported format for kpi.ods: 'ods'");
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("Contato".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
