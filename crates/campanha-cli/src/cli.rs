//! CLI argument definitions for the campaign base generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "campanha",
    version,
    about = "Campaign base generator - clean a KPI export into a contact workbook",
    long_about = "Clean a KPI contact export for a messaging campaign.\n\n\
                  Rows are filtered by school level, checked against the loyal customer\n\
                  and billing panel lists, deduplicated by phone and written to a single\n\
                  xlsx workbook together with a first-name lookup."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names and phone numbers to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,

    /// Settings file (default: settings.toml in the platform config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the KPI export and write the campaign workbook.
    Generate(GenerateArgs),

    /// List the supported input file formats.
    Formats,
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// KPI contact export.
    #[arg(long = "kpi", value_name = "FILE")]
    pub kpi: Option<PathBuf>,

    /// Loyal customer list; its phones are excluded from the campaign.
    #[arg(long = "fidelizados", value_name = "FILE")]
    pub loyal: Option<PathBuf>,

    /// Billing panel list; its phones are excluded from the campaign.
    #[arg(long = "painel", value_name = "FILE")]
    pub panel: Option<PathBuf>,

    /// Output workbook path (default: configured file name in the current directory).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Keep KPI rows whose type contains this word (repeatable, replaces the configured list).
    #[arg(long = "type-keyword", value_name = "WORD")]
    pub type_keywords: Vec<String>,

    /// Keep every KPI row regardless of its type.
    #[arg(long = "no-type-filter", conflicts_with = "type_keywords")]
    pub no_type_filter: bool,

    /// Run the pipeline and report without writing the workbook.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
