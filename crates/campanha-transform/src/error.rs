use std::fmt;

use thiserror::Error;

/// Message shown to users for every pipeline failure.
pub const INVALID_KPI_MESSAGE: &str = "KPI base invalid or not loaded";

/// Pipeline checkpoint at which the KPI table ran out of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterStage {
    /// After the type filter and the loyal/panel exclusions.
    Exclusion,
    /// After column projection and phone deduplication.
    Deduplication,
}

impl fmt::Display for FilterStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStage::Exclusion => f.write_str("exclusion"),
            FilterStage::Deduplication => f.write_str("deduplication"),
        }
    }
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("KPI table not provided")]
    MissingKpi,
    #[error("KPI table has no rows")]
    EmptyKpi,
    #[error("KPI table is missing column '{column}'")]
    MissingColumn { column: String },
    #[error("no KPI rows left after {stage}")]
    EmptyAfterFiltering { stage: FilterStage },
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl PipelineError {
    /// The single outward message; the variant is only for logs.
    pub fn user_message(&self) -> &'static str {
        INVALID_KPI_MESSAGE
    }
}

impl From<polars::prelude::PolarsError> for PipelineError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
