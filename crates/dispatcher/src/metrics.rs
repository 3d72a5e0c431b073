//! Dispatch counters for the run report

/// Counters for one simulator
#[derive(Debug, Default)]
pub struct DispatchMetrics {
    /// Total successful dispatches
    dispatched_count: u64,
    /// Total dispatch failures
    failure_count: u64,
}

impl DispatchMetrics {
    /// Create new metrics instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment dispatched count
    pub fn inc_dispatched_count(&mut self) {
        self.dispatched_count += 1;
    }

    /// Increment failure count
    pub fn inc_failure_count(&mut self) {
        self.failure_count += 1;
    }

    /// Get snapshot of all metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            dispatched_count: self.dispatched_count,
            failure_count: self.failure_count,
        }
    }
}

/// Snapshot of dispatch metrics (for reporting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub dispatched_count: u64,
    pub failure_count: u64,
}
