//! CLI argument definitions for the intake tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Import delimited master-data files into an ERP backend",
    long_about = "Parse a delimited text file, map its columns onto target fields,\n\
                  validate every row, and hand the records to an import sink.\n\
                  Target fields are described by a JSON column-definition file."
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
    /// Run the full pipeline and write the transformed records as JSON.
    Run(RunArgs),

    /// Parse, map, and validate without importing anything.
    Check(PipelineArgs),
}

#[derive(Args)]
pub struct PipelineArgs {
    /// Delimited text file to import.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// JSON file describing the target columns.
    #[arg(long = "columns", value_name = "PATH")]
    pub columns: PathBuf,

    /// Maximum accepted file size in megabytes.
    #[arg(long = "max-size-mb", value_name = "MB")]
    pub max_size_mb: Option<u64>,

    /// Accepted file extension (repeatable, replaces the default set).
    #[arg(long = "extension", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Override a mapping as TARGET=SOURCE (repeatable).
    #[arg(long = "map", value_name = "TARGET=SOURCE")]
    pub map_overrides: Vec<String>,

    /// Remove the mapping for a target key (repeatable).
    #[arg(long = "unmap", value_name = "TARGET")]
    pub unmap: Vec<String>,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub pipeline: PipelineArgs,

    /// Write imported records to this file instead of stdout.
    #[arg(long = "out", value_name = "PATH")]
    pub out: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
