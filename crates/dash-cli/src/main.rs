//! Campaign payout dashboard CLI.

use clap::{ColorChoice, Parser};
use comfy_table::Table;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

use dash_cli::logging::{LogConfig, LogFormat, init_logging};
use dash_cli::report::{report_json, run_report};
use dash_model::REQUIRED_COLUMNS;

mod cli;
mod summary;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};
use crate::summary::{apply_table_style, print_report};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match cli.command {
        Command::Report(args) => match run_report(&args.csv_file, args.names.as_deref()) {
            Ok(result) => {
                if args.json {
                    match serde_json::to_string_pretty(&report_json(&result)) {
                        Ok(json) => println!("{json}"),
                        Err(error) => {
                            eprintln!("error: {error}");
                            std::process::exit(1);
                        }
                    }
                } else {
                    print_report(&result, args.limit, !args.no_charts);
                }
                0
            }
            Err(error) => {
                eprintln!("error: {error:#}");
                1
            }
        },
        Command::Schema => {
            print_schema();
            0
        }
    };
    std::process::exit(exit_code);
}

fn print_schema() {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Kind"]);
    apply_table_style(&mut table);
    for column in REQUIRED_COLUMNS {
        table.add_row(vec![column.name, column.kind.describe()]);
    }
    println!("{table}");
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
