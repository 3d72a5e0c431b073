//! IpcMessage - Ingestion output
//!
//! One raw record as read from the input. Fields hold the tokens verbatim;
//! whether they belong to the vocabularies is decided later by validation.

use std::fmt;

use serde::Serialize;

/// IPC message record
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpcMessage {
    ipc_type: String,
    ipc_cmd: String,
    ipc_size: i64,
}

impl IpcMessage {
    pub fn new(ipc_type: impl Into<String>, ipc_cmd: impl Into<String>, ipc_size: i64) -> Self {
        Self {
            ipc_type: ipc_type.into(),
            ipc_cmd: ipc_cmd.into(),
            ipc_size,
        }
    }

    /// Type name token
    pub fn ipc_type(&self) -> &str {
        &self.ipc_type
    }

    /// Command name token
    pub fn ipc_cmd(&self) -> &str {
        &self.ipc_cmd
    }

    /// Payload size in bytes, possibly out of range
    pub fn ipc_size(&self) -> i64 {
        self.ipc_size
    }
}

/// Renders the record the way it appears in the input: `<type> <cmd> <size>`
impl fmt::Display for IpcMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.ipc_type, self.ipc_cmd, self.ipc_size)
    }
}
