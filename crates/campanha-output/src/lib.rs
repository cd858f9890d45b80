//! Campaign workbook output.
//!
//! Writes the cleaned tables and the pass-through exclusion lists to a single
//! xlsx workbook, one sheet per present table:
//!
//! | sheet | content |
//! |---|---|
//! | `kpi` | cleaned KPI contacts |
//! | `nome` | name lookup |
//! | `fidelizados` | loyal customer list, unfiltered |
//! | `painel` | billing panel list, unfiltered |

mod error;
mod workbook;

pub use error::{OutputError, Result};
pub use workbook::{
    DEFAULT_FILE_NAME, SHEET_KPI, SHEET_LOYAL, SHEET_NAME_LOOKUP, SHEET_PANEL, WorkbookSheets,
    build_workbook, workbook_to_bytes, write_workbook,
};
