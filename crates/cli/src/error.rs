//! Error types for CLI operations.

use std::path::PathBuf;

use contracts::ContractError;
use thiserror::Error;

/// CLI-specific error types
///
/// Only these halt a run early. Validation failures and dispatch errors
/// are absorbed into the report.
#[derive(Error, Debug)]
pub enum CliError {
    /// Wrong command-line arguments
    #[error("usage error: {message}")]
    Usage { message: String },

    /// Input file could not be opened
    #[error("{}: {source}", .path.display())]
    InputOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input framing is corrupt
    #[error("invalid message input: {0}")]
    RecordParse(#[source] ContractError),

    /// Resource exhaustion while loading
    #[error("out of memory: {0}")]
    Allocation(#[source] ContractError),

    /// A pipeline step was called out of order
    #[error("pipeline is {actual}, expected {expected}")]
    InvalidState {
        expected: &'static str,
        actual: &'static str,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

/// Fatal contract errors keep their class for the exit status;
/// anything else surfacing here is wrapped as-is.
impl From<ContractError> for CliError {
    fn from(err: ContractError) -> Self {
        if !err.is_fatal() {
            return Self::Other(anyhow::Error::new(err));
        }
        match err {
            ContractError::Allocation { .. } => Self::Allocation(err),
            ContractError::Io(e) => Self::Io(e),
            _ => Self::RecordParse(err),
        }
    }
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    pub fn input_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }

    /// Process exit status
    ///
    /// Mirrors the negative errno-style codes of the legacy tool as seen
    /// by the shell: -1 -> 255, -EINVAL -> 234, -ENOMEM -> 244.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage { .. } | Self::RecordParse(_) => 255,
            Self::InputOpen { .. } => 234,
            Self::Allocation(_) => 244,
            Self::InvalidState { .. } | Self::Io(_) | Self::Other(_) => 1,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
