//! Campaign base ingestion.
//!
//! Turns an uploaded file (name plus raw bytes) into a Polars `DataFrame`
//! with one nullable string column per header cell.
//!
//! # Formats
//!
//! | extension     | decoder                         |
//! |---------------|---------------------------------|
//! | `csv`         | comma-separated values          |
//! | `xls`         | legacy binary spreadsheet       |
//! | `xlsx`/`xlsm` | XML spreadsheet                 |
//! | `xlsb`        | binary spreadsheet              |
//!
//! # Example
//!
//! ```ignore
//! use campanha_ingest::{SourceFile, load};
//!
//! let kpi = SourceFile::from_path("exports/kpi.xlsx".as_ref())?;
//! // `None` when the file is unreadable or the format is unsupported.
//! let table = load(Some(&kpi));
//! ```

mod csv_reader;
mod error;
mod frame;
mod loader;
mod source;
mod spreadsheet;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sources ===
pub use source::{MAX_SOURCE_FILE_SIZE, SourceFile, SourceFormat};

// === Loading ===
pub use loader::{load, load_table};
