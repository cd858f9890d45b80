//! The `generate` workflow: load, clean, write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use campanha_ingest::{SourceFile, load};
use campanha_output::{WorkbookSheets, write_workbook};
use campanha_transform::columns::{NAME, NUMBER};
use campanha_transform::{PipelineOptions, PipelineStats, clean_campaign};
use polars::prelude::DataFrame;
use tracing::{info_span, trace, warn};

use crate::logging::{log_data_enabled, redact_value};

/// Rows shown in the row-level trace preview.
const PREVIEW_ROWS: usize = 5;

/// Inputs for one `generate` run.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub kpi: Option<PathBuf>,
    pub loyal: Option<PathBuf>,
    pub panel: Option<PathBuf>,
    pub output: PathBuf,
    pub options: PipelineOptions,
    pub dry_run: bool,
}

/// Shape of one written (or would-be written) sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetSummary {
    pub sheet: &'static str,
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// Path of the saved workbook; `None` for a dry run.
    pub output: Option<PathBuf>,
    pub sheets: Vec<SheetSummary>,
    pub stats: PipelineStats,
}

/// Loads the inputs, runs the pipeline and writes the workbook.
///
/// Unreadable or unsupported inputs are treated as absent. Any pipeline
/// failure is reported with the single generic KPI message; the detailed
/// reason goes to the log.
///
/// # Errors
///
/// Returns an error when the pipeline yields no tables or the workbook
/// cannot be written.
pub fn generate(request: &GenerateRequest) -> Result<GenerateResult> {
    let span = info_span!("generate", output = %request.output.display());
    let _guard = span.enter();

    let kpi = load_input(request.kpi.as_deref(), "kpi");
    let loyal = load_input(request.loyal.as_deref(), "fidelizados");
    let panel = load_input(request.panel.as_deref(), "painel");

    let tables = clean_campaign(kpi.as_ref(), loyal.as_ref(), panel.as_ref(), &request.options)
        .map_err(|error| {
            warn!(%error, "KPI table unusable");
            anyhow!(error.user_message())
        })?;

    trace_preview(&tables.clean_kpi);

    let sheets = WorkbookSheets {
        kpi: Some(&tables.clean_kpi),
        name_lookup: Some(&tables.name_lookup),
        loyal: loyal.as_ref(),
        panel: panel.as_ref(),
    };
    let summaries = sheets
        .present()
        .into_iter()
        .map(|(sheet, df)| SheetSummary {
            sheet,
            rows: df.height(),
            columns: df.width(),
        })
        .collect();

    let output = if request.dry_run {
        None
    } else {
        write_workbook(&request.output, &sheets)
            .with_context(|| format!("write workbook {}", request.output.display()))?;
        Some(request.output.clone())
    };

    Ok(GenerateResult {
        output,
        sheets: summaries,
        stats: tables.stats,
    })
}

fn load_input(path: Option<&Path>, label: &str) -> Option<DataFrame> {
    let path = path?;
    let file = match SourceFile::from_path(path) {
        Ok(file) => file,
        Err(error) => {
            warn!(input = label, %error, "input file not loaded");
            return None;
        }
    };
    let table = load(Some(&file))?;
    tracing::debug!(
        input = label,
        rows = table.height(),
        columns = table.width(),
        "input loaded"
    );
    Some(table)
}

/// Logs the first cleaned rows at `trace`, redacted unless `--log-data` is set.
fn trace_preview(clean_kpi: &DataFrame) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    let (Ok(names), Ok(numbers)) = (clean_kpi.column(NAME), clean_kpi.column(NUMBER)) else {
        return;
    };
    let (Ok(names), Ok(numbers)) = (names.str(), numbers.str()) else {
        return;
    };
    for (row, (name, number)) in names
        .into_iter()
        .zip(numbers)
        .take(PREVIEW_ROWS)
        .enumerate()
    {
        trace!(
            row,
            name = redact_value(name.unwrap_or_default()),
            number = redact_value(number.unwrap_or_default()),
            redacted = !log_data_enabled(),
            "clean row"
        );
    }
}
