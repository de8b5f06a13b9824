//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "iamc",
    version,
    about = "Structure wide-format scenario data",
    long_about = "Map wide-format scenario data (one row per series, years as columns)\n\
                  into a structured dataset with explicit dimensions, a hierarchical\n\
                  variable code list, and per-series attributes."
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
    /// Normalize a wide scenario CSV and print the resulting dataset.
    Data(DataArgs),

    /// Print a structure definition: dimensions, attributes, code hierarchy.
    Structure(StructureArgs),
}

#[derive(Parser)]
pub struct DataArgs {
    /// Path to the wide-format CSV file.
    #[arg(value_name = "CSV")]
    pub data: PathBuf,

    /// Structure definition to validate against (default: built-in IAMC).
    #[arg(long = "definition", value_name = "PATH")]
    pub definition: Option<PathBuf>,

    /// Fold rows that share a series key into one series instead of
    /// rejecting the duplicate. Attribute values must still agree.
    #[arg(long = "merge")]
    pub merge: bool,

    /// Keep processing after a row fails and report all failures at the end.
    #[arg(long = "keep-going")]
    pub keep_going: bool,

    /// Only show series with this key dimension value.
    #[arg(long = "filter", value_name = "DIMENSION=VALUE")]
    pub filter: Option<String>,

    /// Emit long-form observation records as JSON instead of the pivoted
    /// table.
    #[arg(long = "records")]
    pub records: bool,
}

#[derive(Parser)]
pub struct StructureArgs {
    /// Structure definition to print (default: built-in IAMC).
    #[arg(long = "definition", value_name = "PATH")]
    pub definition: Option<PathBuf>,
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
