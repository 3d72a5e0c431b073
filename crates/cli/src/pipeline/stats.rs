//! Run report.

use std::fmt;

use contracts::IpcMessage;
use observability::PayloadStats;
use serde::Serialize;

/// Outcome of one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Messages that passed validation
    pub valid_messages: u64,

    /// Messages rejected by validation
    pub invalid_messages: u64,

    /// Smallest payload among valid messages
    pub min_payload: Option<i64>,

    /// Largest payload among valid messages
    pub max_payload: Option<i64>,

    /// Valid messages whose dispatch reported an error
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dispatch_failures: Vec<IpcMessage>,

    #[serde(skip)]
    payload: PayloadStats,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a message that passed validation
    pub fn record_valid(&mut self, payload_size: i64) {
        self.valid_messages += 1;
        self.payload.push(payload_size);
        self.min_payload = self.payload.min();
        self.max_payload = self.payload.max();
    }

    /// Count a message that failed validation
    pub fn record_invalid(&mut self) {
        self.invalid_messages += 1;
    }

    /// Remember a valid message whose dispatch failed
    pub fn record_dispatch_failure(&mut self, msg: &IpcMessage) {
        self.dispatch_failures.push(msg.clone());
    }

    /// Total messages seen
    pub fn total(&self) -> u64 {
        self.valid_messages + self.invalid_messages
    }
}

/// The text report block printed at the end of a run
impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report:")?;
        writeln!(
            f,
            "Valid Messages: {} Invalid Messages: {}",
            self.valid_messages, self.invalid_messages
        )?;
        match (self.max_payload, self.min_payload) {
            (Some(max), Some(min)) => writeln!(f, "Max payload: {max} Min payload: {min}"),
            _ => writeln!(f, "No valid messages to measure payload"),
        }
    }
}
