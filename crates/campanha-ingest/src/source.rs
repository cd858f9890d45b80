//! Uploaded files and their declared formats.

use std::fmt;
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum accepted source file size (100 MB).
pub const MAX_SOURCE_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Decoder selected from a file name extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Comma-separated values.
    Csv,
    /// Legacy binary spreadsheet (BIFF).
    Xls,
    /// XML spreadsheet.
    Xlsx,
    /// Macro-enabled XML spreadsheet, read with the same decoder as `Xlsx`.
    Xlsm,
    /// Binary spreadsheet.
    Xlsb,
}

impl SourceFormat {
    /// Every supported format, in display order.
    pub const ALL: [SourceFormat; 5] = [
        SourceFormat::Csv,
        SourceFormat::Xls,
        SourceFormat::Xlsx,
        SourceFormat::Xlsm,
        SourceFormat::Xlsb,
    ];

    /// Matches an extension (without the dot), ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xls" => Some(Self::Xls),
            "xlsx" => Some(Self::Xlsx),
            "xlsm" => Some(Self::Xlsm),
            "xlsb" => Some(Self::Xlsb),
            _ => None,
        }
    }

    /// Detects the format from the text after the last `.` of a file name.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        Self::from_extension(extension)
    }

    /// Lower-case extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Xls => "xls",
            Self::Xlsx => "xlsx",
            Self::Xlsm => "xlsm",
            Self::Xlsb => "xlsb",
        }
    }

    /// Human-readable decoder description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Csv => "comma-separated values",
            Self::Xls => "legacy binary spreadsheet",
            Self::Xlsx | Self::Xlsm => "XML spreadsheet",
            Self::Xlsb => "binary spreadsheet",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// A raw uploaded file: its declared name and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// Reads a file from disk, keeping only its file name as the declared name.
    pub fn from_path(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if metadata.len() > MAX_SOURCE_FILE_SIZE {
            return Err(IngestError::FileTooLarge {
                path: path.to_path_buf(),
                size: metadata.len(),
                max_size: MAX_SOURCE_FILE_SIZE,
            });
        }
        let bytes = std::fs::read(path).map_err(|source| IngestError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { name, bytes })
    }

    /// Declared format, if the extension is supported.
    pub fn format(&self) -> Option<SourceFormat> {
        SourceFormat::from_file_name(&self.name)
    }

    /// Text after the last `.` of the name, or empty when there is none.
    pub fn extension(&self) -> &str {
        self.name
            .rsplit_once('.')
            .map(|(_, extension)| extension)
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_formats_case_insensitively() {
        assert_eq!(SourceFormat::from_file_name("kpi.CSV"), Some(SourceFormat::Csv));
        assert_eq!(SourceFormat::from_file_name("a.b.Xlsx"), Some(SourceFormat::Xlsx));
        assert_eq!(SourceFormat::from_file_name("macro.xlsm"), Some(SourceFormat::Xlsm));
        assert_eq!(SourceFormat::from_file_name("old.xls"), Some(SourceFormat::Xls));
        assert_eq!(SourceFormat::from_file_name("bin.XLSB"), Some(SourceFormat::Xlsb));
    }

    #[test]
    fn rejects_unknown_or_missing_extensions() {
        assert_eq!(SourceFormat::from_file_name("notes.txt"), None);
        assert_eq!(SourceFormat::from_file_name("csv"), None);
        assert_eq!(SourceFormat::from_file_name("kpi."), None);
    }

    #[test]
    fn extension_is_text_after_last_dot() {
        let file = SourceFile::new("painel.2024.ods", Vec::new());
        assert_eq!(file.extension(), "ods");
        assert_eq!(file.format(), None);
        assert_eq!(SourceFile::new("semponto", Vec::new()).extension(), "");
    }
}
