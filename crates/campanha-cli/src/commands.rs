use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use comfy_table::Table;
use indicatif::{ProgressBar, ProgressStyle};

use campanha_cli::generate::{GenerateRequest, GenerateResult, generate};
use campanha_cli::settings::Settings;
use campanha_ingest::SourceFormat;
use campanha_transform::PipelineOptions;

use crate::cli::GenerateArgs;
use crate::summary::apply_table_style;

pub fn run_formats() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Extension", "Decoder"]);
    apply_table_style(&mut table);
    for format in SourceFormat::ALL {
        table.add_row(vec![format!(".{}", format.extension()), format.description().to_string()]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_generate(args: &GenerateArgs, settings: &Settings) -> Result<GenerateResult> {
    let request = build_request(args, settings);
    let spinner = processing_spinner();
    let result = generate(&request);
    spinner.finish_and_clear();
    result
}

/// CLI flags win over the settings file.
pub fn build_request(args: &GenerateArgs, settings: &Settings) -> GenerateRequest {
    let options = if args.no_type_filter {
        PipelineOptions::default().with_type_keywords(Vec::<String>::new())
    } else if args.type_keywords.is_empty() {
        settings.pipeline_options()
    } else {
        PipelineOptions::default().with_type_keywords(args.type_keywords.iter().cloned())
    };
    GenerateRequest {
        kpi: args.kpi.clone(),
        loyal: args.loyal.clone(),
        panel: args.panel.clone(),
        output: args
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(&settings.export.file_name)),
        options,
        dry_run: args.dry_run,
    }
}

/// Spinner on stderr while the pipeline runs; hidden when stderr is not a terminal.
fn processing_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Processing...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
