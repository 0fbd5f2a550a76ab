//! CLI argument definitions for the regulatory review pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "regrev",
    version,
    about = "Regulatory review pipeline - export, load, and check policy metadata",
    long_about = "Batch pipeline for regulatory-policy metadata.\n\n\
                  Exports policy sources and taxonomy mappings from the source-of-record\n\
                  store to CSV artifacts, loads those artifacts into the distributable\n\
                  store, and health-checks the exported URLs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Export policy sources from the source store to a CSV artifact.
    ExportSources(ExportArgs),

    /// Export the taxonomy mapping from the source store to a CSV artifact.
    ExportTaxonomy(ExportArgs),

    /// Load exported CSV artifacts into the target store.
    Load(LoadArgs),

    /// Probe every exported URL and write a health report.
    CheckUrls(CheckUrlsArgs),
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the source-of-record SQLite database.
    #[arg(long = "db", value_name = "PATH")]
    pub db: PathBuf,

    /// Path to the URL overrides JSON file (absent file means no overrides).
    #[arg(long = "url-map", value_name = "PATH")]
    pub url_map: PathBuf,

    /// Output CSV path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct LoadArgs {
    /// Path to the target SQLite database (must already exist).
    #[arg(long = "db", value_name = "PATH")]
    pub db: PathBuf,

    /// Policy sources CSV artifact.
    #[arg(long = "policy-sources", value_name = "PATH")]
    pub policy_sources: PathBuf,

    /// Taxonomy mapping CSV artifact.
    #[arg(long = "taxonomy", value_name = "PATH")]
    pub taxonomy: PathBuf,

    /// Append taxonomy rows instead of truncating the table first.
    #[arg(long = "no-truncate-taxonomy")]
    pub no_truncate_taxonomy: bool,
}

#[derive(Parser)]
pub struct CheckUrlsArgs {
    /// Policy sources CSV artifact to read URLs from.
    #[arg(long = "input", value_name = "PATH")]
    pub input: PathBuf,

    /// Output CSV path for the check report.
    #[arg(long = "output", value_name = "PATH")]
    pub output: PathBuf,

    /// Per-request timeout in seconds.
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 15)]
    pub timeout_secs: u64,

    /// Pause between consecutive requests in milliseconds.
    #[arg(long = "sleep-ms", value_name = "MS", default_value_t = 100)]
    pub sleep_ms: u64,
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
