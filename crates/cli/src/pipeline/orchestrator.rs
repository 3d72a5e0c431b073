//! Pipeline orchestrator - drives one run through its fixed stages.
//!
//! `Initial -> Loading -> Loaded -> Processed -> Reported -> Terminal`,
//! strictly forward. Each stage method checks the current state and
//! refuses to run out of order.

use std::fmt;
use std::io::{BufRead, Write};

use contracts::{validate, DspSink};
use dispatcher::{Delay, DspSimulator, MetricsSnapshot};
use ingestion::{load_store, MessageStore, OrderPolicy};
use observability::{record_message_dispatched, record_message_validated, record_messages_loaded};
use tracing::{debug, info, instrument, warn};

use super::RunReport;
use crate::error::{CliError, Result};

/// How results are written to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Record echo, dispatch notices and the text report block
    #[default]
    Text,
    /// Only the report, as pretty JSON
    Json,
}

/// Pipeline configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineConfig {
    /// Store traversal order
    pub order: OrderPolicy,

    /// Output rendering
    pub output: OutputFormat,
}

/// Stage of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Initial,
    Loading,
    Loaded,
    Processed,
    Reported,
    Terminal,
}

impl PipelineState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Processed => "processed",
            Self::Reported => "reported",
            Self::Terminal => "terminal",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main pipeline orchestrator
pub struct Pipeline<D, S, W> {
    config: PipelineConfig,
    state: PipelineState,
    store: Option<MessageStore>,
    simulator: DspSimulator<D, S>,
    out: W,
}

impl<D: Delay, S: DspSink, W: Write> Pipeline<D, S, W> {
    /// Create a new pipeline writing its listing and report to `out`
    pub fn new(config: PipelineConfig, simulator: DspSimulator<D, S>, out: W) -> Self {
        Self {
            config,
            state: PipelineState::Initial,
            store: None,
            simulator,
            out,
        }
    }

    pub fn state(&self) -> PipelineState {
        self.state
    }

    /// Records loaded so far (empty before `load`)
    pub fn store(&self) -> Option<&MessageStore> {
        self.store.as_ref()
    }

    /// Run every stage to completion
    pub fn run<R: BufRead>(&mut self, reader: R) -> Result<RunReport> {
        self.load(reader)?;
        self.print_records()?;
        let report = self.process()?;
        self.report(&report)?;
        self.finish()?;
        Ok(report)
    }

    /// Read all records into the store
    ///
    /// A framing error discards everything loaded and ends the run.
    #[instrument(name = "pipeline_load", skip(self, reader), fields(order = ?self.config.order))]
    pub fn load<R: BufRead>(&mut self, reader: R) -> Result<()> {
        self.transition(PipelineState::Initial, PipelineState::Loading)?;

        let store = load_store(reader, self.config.order).map_err(|e| {
            warn!(error = %e, "Loading aborted");
            self.state = PipelineState::Terminal;
            CliError::from(e)
        })?;

        record_messages_loaded(store.len());
        info!(records = store.len(), "Records loaded");
        self.store = Some(store);
        self.transition(PipelineState::Loading, PipelineState::Loaded)
    }

    /// Echo every stored record (text output only)
    pub fn print_records(&mut self) -> Result<()> {
        self.expect(PipelineState::Loaded)?;
        if self.config.output == OutputFormat::Json {
            return Ok(());
        }

        writeln!(self.out, "Printing the messages read from the file:")?;
        if let Some(store) = &self.store {
            for msg in store {
                writeln!(self.out, "{msg}")?;
            }
        }
        Ok(())
    }

    /// Validate every record and dispatch the valid ones
    #[instrument(name = "pipeline_process", skip(self))]
    pub fn process(&mut self) -> Result<RunReport> {
        self.expect(PipelineState::Loaded)?;
        let text = self.config.output == OutputFormat::Text;

        if text {
            writeln!(self.out, "\nSimulating Messages:")?;
            // Sink output may go to the same stream.
            self.out.flush()?;
        }

        let mut report = RunReport::new();
        let Some(store) = &self.store else {
            return Err(CliError::InvalidState {
                expected: PipelineState::Loaded.as_str(),
                actual: "loaded without a store",
            });
        };

        for msg in store {
            let validation = validate(msg);
            record_message_validated(validation.is_valid());

            if !validation.is_valid() {
                debug!(%msg, failed = ?validation.failed_fields(), "Message rejected");
                report.record_invalid();
                continue;
            }

            report.record_valid(msg.ipc_size());

            match self.simulator.dispatch(Some(msg)) {
                Ok(()) => record_message_dispatched(msg.ipc_cmd(), true, msg.ipc_size()),
                Err(e) => {
                    record_message_dispatched(msg.ipc_cmd(), false, msg.ipc_size());
                    warn!(%msg, error = %e, "Message sending failed");
                    report.record_dispatch_failure(msg);
                    if text {
                        writeln!(self.out, "Message sending failed for Message:")?;
                        writeln!(self.out, "{msg}")?;
                    }
                }
            }
        }

        info!(
            valid = report.valid_messages,
            invalid = report.invalid_messages,
            "Messages processed"
        );
        self.transition(PipelineState::Loaded, PipelineState::Processed)?;
        Ok(report)
    }

    /// Write the final report
    pub fn report(&mut self, report: &RunReport) -> Result<()> {
        self.expect(PipelineState::Processed)?;

        match self.config.output {
            OutputFormat::Text => write!(self.out, "{report}")?,
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(report).map_err(|e| {
                    CliError::Other(anyhow::anyhow!("Failed to serialize report: {e}"))
                })?;
                writeln!(self.out, "{json}")?;
            }
        }
        self.out.flush()?;

        self.transition(PipelineState::Processed, PipelineState::Reported)
    }

    /// Release the store
    pub fn finish(&mut self) -> Result<()> {
        self.expect(PipelineState::Reported)?;
        if let Some(store) = self.store.take() {
            store.destroy();
        }
        self.state = PipelineState::Terminal;
        debug!("Pipeline terminated");
        Ok(())
    }

    /// Dispatch counters of the underlying simulator
    pub fn dispatch_metrics(&self) -> MetricsSnapshot {
        self.simulator.metrics()
    }

    /// Tear down, returning the simulator and output
    pub fn into_parts(self) -> (DspSimulator<D, S>, W) {
        (self.simulator, self.out)
    }

    fn expect(&self, expected: PipelineState) -> Result<()> {
        if self.state == expected {
            Ok(())
        } else {
            Err(CliError::InvalidState {
                expected: expected.as_str(),
                actual: self.state.as_str(),
            })
        }
    }

    fn transition(&mut self, from: PipelineState, to: PipelineState) -> Result<()> {
        self.expect(from)?;
        debug!(from = %from, to = %to, "Pipeline state change");
        self.state = to;
        Ok(())
    }
}
