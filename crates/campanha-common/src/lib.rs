//! Shared utilities for the campaign base crates.
//!
//! Every crate in the workspace reads table cells as text before applying its
//! rules, so the conversion lives here.

pub mod polars;

pub use polars::{any_to_string, column_text, format_numeric, has_column};
