//! DspSink trait - Dispatch simulator output interface
//!
//! Defines where a dispatched message "arrives" on the simulated DSP side.

use crate::{ContractError, IpcMessage};

/// Receiving end of a simulated DSP dispatch
///
/// All sink implementations must implement this trait.
pub trait DspSink {
    /// Sink name (used for logging/metrics)
    fn name(&self) -> &str;

    /// Accept one validated message
    ///
    /// # Errors
    /// Returns write error (should include context)
    fn receive(&mut self, msg: &IpcMessage) -> Result<(), ContractError>;
}

impl<S: DspSink + ?Sized> DspSink for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn receive(&mut self, msg: &IpcMessage) -> Result<(), ContractError> {
        (**self).receive(msg)
    }
}
