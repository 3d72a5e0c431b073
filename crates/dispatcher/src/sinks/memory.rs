//! MemorySink - keeps received commands in memory

use contracts::{ContractError, DspSink, IpcMessage};

/// Collects the command name of every received message
#[derive(Debug, Default)]
pub struct MemorySink {
    name: String,
    commands: Vec<String>,
}

impl MemorySink {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Commands received so far, in arrival order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

impl DspSink for MemorySink {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, msg: &IpcMessage) -> Result<(), ContractError> {
        self.commands.push(msg.ipc_cmd().to_string());
        Ok(())
    }
}
