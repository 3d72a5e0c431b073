//! Default command: process one input file.

use std::fs::File;
use std::io::{self, BufReader};

use contracts::DspSink;
use dispatcher::{DspSimulator, LogSink, StdoutSink, ThreadSleep};
use ingestion::OrderPolicy;
use tracing::info;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::pipeline::{OutputFormat, Pipeline, PipelineConfig, RunReport};

/// Execute a full run for the parsed arguments
pub fn run_pipeline(args: &Cli) -> Result<RunReport> {
    info!(input = %args.input.display(), "Opening input");

    let file = File::open(&args.input).map_err(|e| CliError::input_open(&args.input, e))?;

    let config = PipelineConfig {
        order: if args.legacy_order {
            OrderPolicy::Reversed
        } else {
            OrderPolicy::FileOrder
        },
        output: if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
    };

    // In JSON mode stdout carries only the report.
    let sink: Box<dyn DspSink> = match config.output {
        OutputFormat::Text => Box::new(StdoutSink::new("stdout")),
        OutputFormat::Json => Box::new(LogSink::new("log")),
    };

    let simulator = DspSimulator::new(ThreadSleep, sink);
    let mut pipeline = Pipeline::new(config, simulator, io::stdout());
    let report = pipeline.run(BufReader::new(file))?;

    info!(
        valid = report.valid_messages,
        invalid = report.invalid_messages,
        total = report.total(),
        "Run complete"
    );
    Ok(report)
}
