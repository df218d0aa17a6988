//! `delim` command-line tool.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use delim_cli::commands::{run_convert, run_export_csv, run_import_csv, run_inspect};
use delim_cli::config::build_codec;
use delim_cli::logging::{LogConfig, LogFormat, init_logging};
use delim_cli::summary::{print_inspection, print_shape};
use delim_codec::Codec;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let codec = build_codec(cli.config.as_deref(), cli.separator)?;
    match &cli.command {
        Command::Inspect(args) => {
            let table = run_inspect(&args.file, codec)?;
            print_inspection(&args.file, &table, args.limit);
        }
        Command::Convert(args) => {
            let target = Codec::with_separator(args.to_separator)?;
            let shape = run_convert(&args.input, &args.output, codec, target)?;
            print_shape("Wrote", &args.output, shape);
        }
        Command::ImportCsv(args) => {
            let shape = run_import_csv(&args.input, &args.output, codec)?;
            print_shape("Imported", &args.output, shape);
        }
        Command::ExportCsv(args) => {
            let shape = run_export_csv(&args.input, &args.output, codec)?;
            print_shape("Exported", &args.output, shape);
        }
    }
    Ok(())
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
