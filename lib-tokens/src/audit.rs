//! Transfer Events and the Audit Log
//!
//! [`TransferEvent`] is the wire type emitted on the host event channel as
//! JSON `{"from": ..., "to": ..., "value": ...}`. The audit log keeps every
//! successful mint and transfer for the lifetime of one engine instance.
//!
//! # Scope
//!
//! The log is process-local: not persisted, not part of consensus state,
//! reset when the instance restarts. Replicas will disagree on its contents.
//! Never treat it as a ledger query.

use serde::{Deserialize, Serialize};
use std::sync::Mutex;

use crate::state::Amount;

/// Sentinel source address for tokens minted from nothing.
pub const MINT_SOURCE: &str = "0x0";

/// Name of the event emitted for every successful mint or transfer.
pub const TRANSFER_EVENT: &str = "Transfer";

/// A successful mint or transfer, as emitted on the `Transfer` event
///
/// Field names and order are wire format; external listeners parse this
/// JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub from: String,
    pub to: String,
    pub value: Amount,
}

/// Append-only, mutex-guarded audit log
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Mutex<Vec<TransferEvent>>,
}

impl AuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    ///
    /// Appends from concurrent invocations serialize on the internal lock.
    /// No ordering is guaranteed relative to ledger commit order.
    pub fn record(&self, event: TransferEvent) {
        self.entries
            .lock()
            .expect("audit log lock poisoned")
            .push(event);
    }

    /// Snapshot of all entries in insertion order.
    pub fn snapshot(&self) -> Vec<TransferEvent> {
        self.entries
            .lock()
            .expect("audit log lock poisoned")
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().expect("audit log lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
