//! # Ingestion
//!
//! Record ingestion module.
//!
//! Responsibilities:
//! - Split the input into whitespace-delimited `<type> <cmd> <size>` triples
//! - Reject corrupt framing as a whole-run error
//! - Keep every loaded `IpcMessage` in an owned, ordered `MessageStore`
//!
//! ## Usage Example
//!
//! ```
//! use ingestion::{load_store, OrderPolicy};
//!
//! let input = "SOF_IPC_COMP_SET_VALUE SOF_CTRL_CMD_VOLUME 128\n";
//! let store = load_store(input.as_bytes(), OrderPolicy::FileOrder).unwrap();
//! assert_eq!(store.len(), 1);
//! ```

mod loader;
mod store;

// Re-exports
pub use contracts::IpcMessage;
pub use loader::{load_store, RecordLoader};
pub use store::{MessageStore, OrderPolicy};
