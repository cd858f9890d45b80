//! Campaign contact cleaning.
//!
//! This crate turns the KPI export, the loyal customer list and the billing
//! panel list into the two campaign tables:
//!
//! - **columns**: expected source and output column names
//! - **phone**: digit-only phone normalization and exclusion sets
//! - **names**: first-name extraction with the short-name placeholder
//! - **options**: configurable type filter keywords
//! - **pipeline**: the ordered cleaning steps

pub mod columns;
mod error;
mod frame_ops;
pub mod names;
pub mod options;
pub mod phone;
pub mod pipeline;

pub use error::{FilterStage, INVALID_KPI_MESSAGE, PipelineError, Result};
pub use names::first_name;
pub use options::PipelineOptions;
pub use phone::normalize_phone;
pub use pipeline::{CampaignTables, PipelineStats, clean_campaign, process};
