//! # Dispatcher
//!
//! 模拟 DSP 消息分发。
//!
//! 负责：
//! - 对每条已校验的消息施加固定的 IPC 延迟 (`IPC_TIMEOUT`)
//! - 将消息交付给 `DspSink`
//! - 统计成功 / 失败次数
//!
//! Dispatch is strictly serial: each call blocks the caller for the full
//! latency before the next message can be sent. The delay is injected
//! through the [`Delay`] trait so tests can run without wall-clock cost.

pub mod delay;
pub mod dispatcher;
pub mod error;
pub mod metrics;
pub mod sinks;

pub use contracts::{DspSink, IpcMessage};
pub use delay::{Delay, NoDelay, RecordingDelay, ThreadSleep};
pub use dispatcher::DspSimulator;
pub use error::DispatchError;
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use sinks::{LogSink, MemorySink, StdoutSink};
