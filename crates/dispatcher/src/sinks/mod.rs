//! Sink implementations
//!
//! Contains StdoutSink, LogSink, and MemorySink.

mod log;
mod memory;
mod stdout;

pub use self::log::LogSink;
pub use self::memory::MemorySink;
pub use self::stdout::StdoutSink;
