//! Dispatcher error types

use thiserror::Error;

/// Dispatch failures
///
/// Never fatal to a run: the caller reports the message and moves on.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// No message was supplied
    #[error("null message")]
    NullMessage,

    /// The sink refused the message (from contract)
    #[error("sink error: {0}")]
    Sink(#[from] contracts::ContractError),
}
