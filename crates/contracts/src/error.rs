//! Layered error definitions
//!
//! Categorized by source: ingestion / sink

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Ingestion Errors =====
    /// Input framing is corrupt: a record could not be read as a full triple.
    ///
    /// Fatal for the whole run.
    #[error("record parse error at record #{record_index}: {message}")]
    RecordParse { record_index: usize, message: String },

    /// Resource exhaustion while growing the message store
    #[error("allocation error: {message}")]
    Allocation { message: String },

    // ===== Sink Errors =====
    /// Sink write error
    #[error("sink '{sink_name}' write error: {message}")]
    SinkWrite { sink_name: String, message: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create record parse error
    pub fn record_parse(record_index: usize, message: impl Into<String>) -> Self {
        Self::RecordParse {
            record_index,
            message: message.into(),
        }
    }

    /// Create allocation error
    pub fn allocation(message: impl Into<String>) -> Self {
        Self::Allocation {
            message: message.into(),
        }
    }

    /// Create sink write error
    pub fn sink_write(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkWrite {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Whether this error must abort the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RecordParse { .. } | Self::Allocation { .. } | Self::Io(_)
        )
    }
}
