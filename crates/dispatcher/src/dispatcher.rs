//! DspSimulator - serial, fixed-latency dispatch to a sink

use contracts::{DspSink, IpcMessage, IPC_TIMEOUT};
use tracing::{debug, instrument, warn};

use crate::delay::Delay;
use crate::error::DispatchError;
use crate::metrics::{DispatchMetrics, MetricsSnapshot};

/// Simulated DSP endpoint
///
/// Callers are expected to pass only messages that already passed
/// validation; the simulator itself never rejects a well-formed message.
pub struct DspSimulator<D, S> {
    delay: D,
    sink: S,
    metrics: DispatchMetrics,
}

impl<D: Delay, S: DspSink> DspSimulator<D, S> {
    pub fn new(delay: D, sink: S) -> Self {
        Self {
            delay,
            sink,
            metrics: DispatchMetrics::new(),
        }
    }

    /// Send one message
    ///
    /// Always blocks for `IPC_TIMEOUT` first, then hands the message to
    /// the sink. `None` yields `DispatchError::NullMessage`.
    #[instrument(
        name = "dsp_simulator_dispatch",
        skip(self, msg),
        fields(sink = %self.sink.name())
    )]
    pub fn dispatch(&mut self, msg: Option<&IpcMessage>) -> Result<(), DispatchError> {
        self.delay.wait(IPC_TIMEOUT);

        let result = match msg {
            Some(msg) => self.sink.receive(msg).map_err(DispatchError::from),
            None => Err(DispatchError::NullMessage),
        };

        match &result {
            Ok(()) => {
                self.metrics.inc_dispatched_count();
                debug!("Message dispatched");
            }
            Err(e) => {
                self.metrics.inc_failure_count();
                warn!(error = %e, "Message dispatch failed");
            }
        }
        result
    }

    /// Get dispatch counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear down, returning the delay model and sink
    pub fn into_parts(self) -> (D, S) {
        (self.delay, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delay::RecordingDelay;
    use crate::sinks::MemorySink;
    use contracts::ContractError;
    use std::time::Duration;

    fn msg(cmd: &str) -> IpcMessage {
        IpcMessage::new("SOF_IPC_COMP_SET_DATA", cmd, 16)
    }

    #[test]
    fn test_dispatch_delivers_to_sink() {
        let mut sim = DspSimulator::new(RecordingDelay::new(), MemorySink::new("mem"));

        sim.dispatch(Some(&msg("SOF_CTRL_CMD_ENUM"))).unwrap();
        sim.dispatch(Some(&msg("SOF_CTRL_CMD_SWITCH"))).unwrap();

        assert_eq!(
            sim.sink().commands(),
            &["SOF_CTRL_CMD_ENUM", "SOF_CTRL_CMD_SWITCH"]
        );
        assert_eq!(sim.metrics().dispatched_count, 2);
        assert_eq!(sim.metrics().failure_count, 0);

        let (delay, _) = sim.into_parts();
        assert_eq!(delay.calls(), 2);
        assert_eq!(delay.total(), Duration::from_micros(600));
    }

    #[test]
    fn test_null_message_still_waits() {
        let mut delay = RecordingDelay::new();
        let mut sim = DspSimulator::new(&mut delay, MemorySink::new("mem"));

        let err = sim.dispatch(None).unwrap_err();
        assert!(matches!(err, DispatchError::NullMessage));
        assert_eq!(sim.metrics().failure_count, 1);
        assert!(sim.sink().commands().is_empty());
        drop(sim);

        assert_eq!(delay.total(), IPC_TIMEOUT);
    }

    struct FailingSink;

    impl DspSink for FailingSink {
        fn name(&self) -> &str {
            "failing"
        }

        fn receive(&mut self, _msg: &IpcMessage) -> Result<(), ContractError> {
            Err(ContractError::sink_write("failing", "link down"))
        }
    }

    #[test]
    fn test_sink_failure_is_reported() {
        let mut sim = DspSimulator::new(RecordingDelay::new(), FailingSink);
        let err = sim.dispatch(Some(&msg("SOF_CTRL_CMD_BINARY"))).unwrap_err();
        assert!(err.to_string().contains("link down"));
        assert_eq!(sim.metrics().failure_count, 1);
    }
}
