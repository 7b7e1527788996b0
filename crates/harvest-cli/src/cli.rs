//! CLI argument definitions.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use harvest_cli::logging::{LogConfig, LogFormat};
use harvest_map::DEFAULT_SAMPLE_SIZE;
use harvest_model::{ColumnMapping, ModelError, SemanticRole};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "harvest-calendar",
    version,
    about = "Classify harvest spreadsheet columns and normalize harvest periods to month masks",
    long_about = "Classify the columns of a harvest calendar spreadsheet and normalize its\n\
                  free-text harvest periods into 12-bit month masks.\n\n\
                  Rows whose period cannot be resolved are flagged for review."
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
}

impl Cli {
    /// Logging setup requested by the global flags.
    ///
    /// `--log-level` beats `-v`/`-q`; `RUST_LOG` only applies when neither
    /// was given.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.verbosity.is_present() || self.log_level.is_some();
        let level = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig {
            use_env_filter: !explicit,
            with_ansi,
            ..LogConfig::default()
        }
        .with_level(level)
        .with_format(self.log_format.into())
        .with_log_file(self.log_file.clone())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Propose a semantic role for every column of a CSV file.
    Classify(ClassifyArgs),

    /// Normalize the harvest period of every row of a CSV file.
    Normalize(NormalizeArgs),

    /// Normalize a single period expression.
    Period(PeriodArgs),

    /// List the semantic roles and their header keywords.
    Roles,
}

#[derive(Parser)]
pub struct ClassifyArgs {
    /// CSV file to classify.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Distinct sample values read per column.
    #[arg(long = "samples", value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub samples: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// CSV file to normalize.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Assign a role to a column, overriding the proposed one (repeatable).
    #[arg(long = "map", value_name = "COLUMN=ROLE", value_parser = parse_mapping_pair)]
    pub map: Vec<(String, SemanticRole)>,

    /// Distinct sample values read per column for classification.
    #[arg(long = "samples", value_name = "N", default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub samples: usize,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,

    /// Write the full JSON result to a file.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exit with status 1 when any row needs review.
    #[arg(long = "fail-on-review")]
    pub fail_on_review: bool,
}

#[derive(Parser)]
pub struct PeriodArgs {
    /// Free-text period, e.g. "Oct-Feb" or "Year-round".
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Start date hint.
    #[arg(long = "start", value_name = "DATE")]
    pub start: Option<String>,

    /// End date hint.
    #[arg(long = "end", value_name = "DATE")]
    pub end: Option<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => Self::ERROR,
            LogLevelArg::Warn => Self::WARN,
            LogLevelArg::Info => Self::INFO,
            LogLevelArg::Debug => Self::DEBUG,
            LogLevelArg::Trace => Self::TRACE,
        }
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => Self::Pretty,
            LogFormatArg::Compact => Self::Compact,
            LogFormatArg::Json => Self::Json,
        }
    }
}

fn parse_mapping_pair(raw: &str) -> Result<(String, SemanticRole), ModelError> {
    ColumnMapping::parse_pair(raw)
}
