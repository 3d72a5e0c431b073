//! # Contracts
//!
//! Frozen interface contracts shared by every pipeline crate: the IPC
//! message record, the fixed type/command vocabularies, the validation
//! rules and the sink interface used by the dispatch simulator.
//! All business crates can only depend on this crate, reverse dependencies are prohibited.
//!
//! ## Wire format
//! One record is three whitespace-separated tokens:
//! `<type-name> <command-name> <payload-size>`.

mod error;
mod message;
mod sink;
mod vocabulary;

pub use error::*;
pub use message::IpcMessage;
pub use sink::DspSink;
pub use vocabulary::*;
