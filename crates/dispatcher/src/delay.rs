//! Latency model for a single dispatch.
//!
//! Every implementation must honour the same contract as a real IPC round
//! trip: the call returns only after the requested duration has been
//! accounted for, it cannot be cancelled, and calls never overlap.

use std::time::Duration;

/// Blocking delay
pub trait Delay {
    /// Block the calling flow for `duration`
    fn wait(&mut self, duration: Duration);
}

/// Wall-clock delay via `std::thread::sleep`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Returns immediately
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    fn wait(&mut self, _duration: Duration) {}
}

/// Returns immediately but remembers how much time was requested
#[derive(Debug, Clone, Default)]
pub struct RecordingDelay {
    calls: u64,
    total: Duration,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `wait` calls
    pub fn calls(&self) -> u64 {
        self.calls
    }

    /// Sum of all requested durations
    pub fn total(&self) -> Duration {
        self.total
    }
}

impl Delay for RecordingDelay {
    fn wait(&mut self, duration: Duration) {
        self.calls += 1;
        self.total += duration;
    }
}

impl<D: Delay + ?Sized> Delay for &mut D {
    fn wait(&mut self, duration: Duration) {
        (**self).wait(duration);
    }
}
