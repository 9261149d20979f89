//! CLI argument definitions for the dashboard.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dash",
    version,
    about = "Campaign payout dashboard - pivot and chart uploaded CSV data",
    long_about = "Validate an uploaded campaign CSV, filter it by name, and\n\
                  aggregate orders and payouts into a pivot table plus grouped\n\
                  bar chart specifications.\n\n\
                  Required columns: name, camp_name, action_date, Total_Order,\n\
                  Total_Payout."
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
    /// Process one CSV file and print the pivot table and chart summaries.
    Report(ReportArgs),

    /// List the columns every upload must contain.
    Schema,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Path to the uploaded CSV file.
    #[arg(value_name = "CSV_FILE")]
    pub csv_file: PathBuf,

    /// Keep only these name values (comma-separated; default: all).
    #[arg(long = "names", value_name = "NAMES", value_delimiter = ',')]
    pub names: Option<Vec<String>>,

    /// Maximum raw rows shown in the preview table.
    #[arg(long = "limit", value_name = "N", default_value_t = 10)]
    pub limit: usize,

    /// Skip the chart summaries.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Emit the computed view as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
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
