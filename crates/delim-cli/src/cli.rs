//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "delim",
    version,
    about = "Convert between delimited documents, RFC 4180 CSV and previews",
    long_about = "Read and write single-separator delimited documents.\n\n\
                  Every line, the header included, ends with one trailing separator.\n\
                  Values are never quoted: line breaks are stripped and separators\n\
                  inside values are replaced by a space on write."
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

    /// Log output format.
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

    /// Field separator of the delimited document (default: ';').
    #[arg(short = 's', long = "separator", value_name = "CHAR", global = true)]
    pub separator: Option<char>,

    /// JSON file with codec options, e.g. {"separator": "|"}.
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the columns and the first rows of a document.
    Inspect(InspectArgs),

    /// Rewrite a document with a different separator.
    Convert(ConvertArgs),

    /// Convert an RFC 4180 CSV file into a delimited document.
    ImportCsv(TransferArgs),

    /// Convert a delimited document into an RFC 4180 CSV file.
    ExportCsv(TransferArgs),
}

#[derive(Parser)]
pub struct InspectArgs {
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of rows to preview.
    #[arg(long = "limit", default_value_t = 10)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Separator for the output document.
    #[arg(long = "to-separator", value_name = "CHAR")]
    pub to_separator: char,
}

#[derive(Parser)]
pub struct TransferArgs {
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
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
