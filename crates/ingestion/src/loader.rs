//! Record loader
//!
//! Framing rules:
//! - Tokens are separated by any ASCII whitespace, line breaks included,
//!   so a record may span lines
//! - Clean end-of-input before the first token of a record ends loading
//! - End-of-input after one or two tokens, or a size token that is not an
//!   integer, is a fatal parse error for the whole run
//! - Names and sizes are kept verbatim (sizes saturate at the `i64`
//!   bounds); whether they are acceptable is decided by validation

use std::collections::VecDeque;
use std::io::BufRead;
use std::num::IntErrorKind;

use contracts::{ContractError, IpcMessage};
use tracing::{debug, instrument, trace};

use crate::{MessageStore, OrderPolicy};

/// Pull-based reader producing one `IpcMessage` per triple
pub struct RecordLoader<R> {
    reader: R,
    pending: VecDeque<String>,
    line_buf: Vec<u8>,
    records_read: usize,
    eof: bool,
}

impl<R: BufRead> RecordLoader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
            line_buf: Vec::new(),
            records_read: 0,
            eof: false,
        }
    }

    /// Number of complete records returned so far
    pub fn records_read(&self) -> usize {
        self.records_read
    }

    /// Read the next record
    ///
    /// Returns `Ok(None)` at clean end-of-input.
    pub fn next_record(&mut self) -> Result<Option<IpcMessage>, ContractError> {
        let record_index = self.records_read + 1;

        let Some(ipc_type) = self.next_token()? else {
            return Ok(None);
        };
        let ipc_cmd = self.next_token()?.ok_or_else(|| {
            ContractError::record_parse(record_index, "expected 3 tokens, found 1")
        })?;
        let size_token = self.next_token()?.ok_or_else(|| {
            ContractError::record_parse(record_index, "expected 3 tokens, found 2")
        })?;

        let ipc_size = parse_size(&size_token).ok_or_else(|| {
            ContractError::record_parse(
                record_index,
                format!("payload size '{size_token}' is not an integer"),
            )
        })?;

        self.records_read = record_index;
        let msg = IpcMessage::new(ipc_type, ipc_cmd, ipc_size);
        trace!(record = record_index, %msg, "Record read");
        Ok(Some(msg))
    }

    fn next_token(&mut self) -> Result<Option<String>, ContractError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.eof {
                return Ok(None);
            }
            self.fill_pending()?;
        }
    }

    fn fill_pending(&mut self) -> Result<(), ContractError> {
        self.line_buf.clear();
        let n = self.reader.read_until(b'\n', &mut self.line_buf)?;
        if n == 0 {
            self.eof = true;
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.line_buf);
        self.pending
            .extend(line.split_ascii_whitespace().map(str::to_string));
        Ok(())
    }
}

impl<R: BufRead> Iterator for RecordLoader<R> {
    type Item = Result<IpcMessage, ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Parse a size token
///
/// Integers beyond the `i64` range saturate, so they stay records that
/// validation rejects. `None` only for tokens that are not integers.
fn parse_size(token: &str) -> Option<i64> {
    match token.parse::<i64>() {
        Ok(size) => Some(size),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Load every record from `reader` into a new store
///
/// Any error discards the records loaded so far.
#[instrument(name = "ingestion_load_store", skip(reader))]
pub fn load_store<R: BufRead>(
    reader: R,
    policy: OrderPolicy,
) -> Result<MessageStore, ContractError> {
    let mut store = MessageStore::new(policy);
    for msg in RecordLoader::new(reader) {
        store.append(msg?)?;
    }
    debug!(records = store.len(), "Input loaded");
    Ok(store)
}
