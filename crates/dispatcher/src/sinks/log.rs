//! LogSink - logs received commands via tracing

use contracts::{ContractError, DspSink, IpcMessage};
use tracing::info;

/// Sink that reports received commands through the log instead of stdout
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl DspSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn receive(&mut self, msg: &IpcMessage) -> Result<(), ContractError> {
        info!(
            sink = %self.name,
            ipc_type = msg.ipc_type(),
            ipc_cmd = msg.ipc_cmd(),
            ipc_size = msg.ipc_size(),
            "IPC command received"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_receive() {
        let mut sink = LogSink::new("test_log");
        let msg = IpcMessage::new("SOF_IPC_COMP_GET_VALUE", "SOF_CTRL_CMD_VOLUME", 4);
        assert!(sink.receive(&msg).is_ok());
    }

    #[test]
    fn test_log_sink_name() {
        let sink = LogSink::new("my_logger");
        assert_eq!(sink.name(), "my_logger");
    }
}
