//! StdoutSink - prints each received command on its own line

use std::io::{self, Write};

use contracts::{ContractError, DspSink, IpcMessage};

/// Writes `IPC command received: <cmd>` to a writer (stdout by default)
pub struct StdoutSink<W = io::Stdout> {
    name: String,
    out: W,
}

impl StdoutSink {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_writer(name, io::stdout())
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(name: impl Into<String>, out: W) -> Self {
        Self {
            name: name.into(),
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DspSink for StdoutSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, msg: &IpcMessage) -> Result<(), ContractError> {
        writeln!(self.out, "IPC command received: {}", msg.ipc_cmd())
            .map_err(|e| ContractError::sink_write(&self.name, e.to_string()))
    }
}
