//! CLI argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// IPC Parser - validate IPC control messages and simulate DSP dispatch
#[derive(Parser, Debug)]
#[command(
    name = "ipc-parser",
    author,
    version,
    about = "Validate IPC control messages and simulate their dispatch to the DSP",
    long_about = "Reads `<type> <command> <size>` records from DATAFILE, echoes them,\n\
                  validates each against the fixed IPC vocabularies and payload bound,\n\
                  dispatches the valid ones with a fixed 300us latency and prints a report."
)]
pub struct Cli {
    /// Input file of whitespace-separated `<type> <command> <size>` records
    #[arg(value_name = "DATAFILE")]
    pub input: PathBuf,

    /// Traverse records in reverse of file order, matching legacy reports
    #[arg(long)]
    pub legacy_order: bool,

    /// Print the report as JSON instead of the text listing
    #[arg(long)]
    pub json: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, env = "IPC_PARSER_VERBOSE")]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        env = "IPC_PARSER_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Metrics server port (0 = disabled)
    #[arg(long, default_value = "0", env = "IPC_PARSER_METRICS_PORT")]
    pub metrics_port: u16,
}

impl Cli {
    /// Default log level derived from `-q` / `-v`
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
