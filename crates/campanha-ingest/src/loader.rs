//! Format dispatch for uploaded files.

use polars::prelude::DataFrame;
use tracing::{debug, warn};

use crate::csv_reader::read_csv_bytes;
use crate::error::{IngestError, Result};
use crate::source::{SourceFile, SourceFormat};
use crate::spreadsheet::read_spreadsheet_bytes;

/// Decodes an uploaded file with the decoder matching its extension.
///
/// # Errors
///
/// Returns [`IngestError::UnsupportedFormat`] for unknown extensions and a
/// parse error when the content cannot be decoded.
pub fn load_table(file: &SourceFile) -> Result<DataFrame> {
    let Some(format) = file.format() else {
        return Err(IngestError::UnsupportedFormat {
            name: file.name.clone(),
            extension: file.extension().to_string(),
        });
    };
    let df = match format {
        SourceFormat::Csv => read_csv_bytes(&file.name, &file.bytes)?,
        other => read_spreadsheet_bytes(&file.name, &file.bytes, other)?,
    };
    debug!(
        file = %file.name,
        format = %format,
        rows = df.height(),
        columns = df.width(),
        "loaded table"
    );
    Ok(df)
}

/// Loads an optional upload, treating every failure as "not provided".
///
/// Absent input, unsupported extensions and undecodable content all yield
/// `None`; the reason is logged at `warn`.
pub fn load(file: Option<&SourceFile>) -> Option<DataFrame> {
    let file = file?;
    match load_table(file) {
        Ok(df) => Some(df),
        Err(error) => {
            warn!(file = %file.name, %error, "ignoring unreadable file");
            None
        }
    }
}
