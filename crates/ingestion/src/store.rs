//! Owned, ordered collection of loaded messages.

use std::collections::VecDeque;

use contracts::{ContractError, IpcMessage};
use tracing::debug;

/// Where `append` places a new record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderPolicy {
    /// Store order equals read order
    #[default]
    FileOrder,
    /// Each record goes in front of the previous ones, so the store
    /// traverses in reverse of read order. Kept for byte-compatible
    /// output with reports produced by the legacy parser.
    Reversed,
}

/// Message store
///
/// Exclusively owns every record appended to it. Traversal never mutates it.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: VecDeque<IpcMessage>,
    policy: OrderPolicy,
}

impl MessageStore {
    /// Create an empty store with the given ordering
    pub fn new(policy: OrderPolicy) -> Self {
        Self {
            messages: VecDeque::new(),
            policy,
        }
    }

    /// Append a record
    ///
    /// # Errors
    /// `ContractError::Allocation` if the store cannot grow.
    pub fn append(&mut self, msg: IpcMessage) -> Result<(), ContractError> {
        self.messages.try_reserve(1).map_err(|e| {
            ContractError::allocation(format!(
                "cannot grow message store beyond {} records: {e}",
                self.messages.len()
            ))
        })?;

        match self.policy {
            OrderPolicy::FileOrder => self.messages.push_back(msg),
            OrderPolicy::Reversed => self.messages.push_front(msg),
        }
        Ok(())
    }

    /// Iterate records in store order
    pub fn iter(&self) -> impl Iterator<Item = &IpcMessage> + '_ {
        self.messages.iter()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Release every record, returning how many were released
    pub fn destroy(self) -> usize {
        let released = self.messages.len();
        debug!(released, "Message store released");
        released
    }
}

impl<'a> IntoIterator for &'a MessageStore {
    type Item = &'a IpcMessage;
    type IntoIter = std::collections::vec_deque::Iter<'a, IpcMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
