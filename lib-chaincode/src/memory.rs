//! In-Memory Transaction Context
//!
//! Volatile context backed by a `HashMap`. Useful for tests and for
//! embedders that want a ledger without a platform behind it; nothing
//! written here survives the process.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::context::{ClientIdentity, EventSink, WorldState};
use crate::errors::{ContextError, ContextResult};

/// In-memory transaction context
///
/// World state lives behind a mutex so all trait methods take `&self`.
/// Emitted events are recorded in emission order for inspection. The caller
/// identity is settable, which stands in for the platform's verified MSP
/// lookup.
#[derive(Debug, Default)]
pub struct MemoryContext {
    state: Mutex<HashMap<String, Vec<u8>>>,
    caller: Mutex<Option<String>>,
    events: Mutex<Vec<(String, Vec<u8>)>>,
}

impl MemoryContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context pre-bound to the given caller MSP.
    pub fn with_caller(msp_id: &str) -> Self {
        let ctx = Self::new();
        ctx.set_caller(msp_id);
        ctx
    }

    /// Bind the MSP identity reported to the engine.
    pub fn set_caller(&self, msp_id: &str) {
        *self.caller.lock().expect("caller lock poisoned") = Some(msp_id.to_string());
    }

    /// All events emitted so far, in emission order.
    pub fn events(&self) -> Vec<(String, Vec<u8>)> {
        self.events.lock().expect("event lock poisoned").clone()
    }

    /// Raw bytes currently stored under `key`.
    pub fn raw_state(&self, key: &str) -> Option<Vec<u8>> {
        self.state.lock().expect("state lock poisoned").get(key).cloned()
    }

    /// Seed a raw state entry directly, e.g. legacy or corrupt values.
    pub fn seed_state(&self, key: &str, value: &[u8]) {
        self.state
            .lock()
            .expect("state lock poisoned")
            .insert(key.to_string(), value.to_vec());
    }
}

impl WorldState for MemoryContext {
    fn get_state(&self, key: &str) -> ContextResult<Option<Vec<u8>>> {
        Ok(self.state.lock().expect("state lock poisoned").get(key).cloned())
    }

    fn put_state_without_kyc(&self, key: &str, value: &[u8]) -> ContextResult<()> {
        self.state
            .lock()
            .expect("state lock poisoned")
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

impl ClientIdentity for MemoryContext {
    fn msp_id(&self) -> ContextResult<String> {
        self.caller
            .lock()
            .expect("caller lock poisoned")
            .clone()
            .ok_or_else(|| ContextError::Identity("no client identity bound".to_string()))
    }
}

impl EventSink for MemoryContext {
    fn set_event(&self, name: &str, payload: &[u8]) -> ContextResult<()> {
        self.events
            .lock()
            .expect("event lock poisoned")
            .push((name.to_string(), payload.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_put_roundtrip() {
        let ctx = MemoryContext::new();
        ctx.put_state_without_kyc("alice", b"100").unwrap();
        assert_eq!(ctx.get_state("alice").unwrap(), Some(b"100".to_vec()));
    }

    #[test]
    fn test_absent_key_reads_none() {
        let ctx = MemoryContext::new();
        assert_eq!(ctx.get_state("nobody").unwrap(), None);
    }

    #[test]
    fn test_overwrite_replaces_value() {
        let ctx = MemoryContext::new();
        ctx.put_state_without_kyc("k", b"1").unwrap();
        ctx.put_state_without_kyc("k", b"2").unwrap();
        assert_eq!(ctx.get_state("k").unwrap(), Some(b"2".to_vec()));
    }

    #[test]
    fn test_events_recorded_in_order() {
        let ctx = MemoryContext::new();
        ctx.set_event("Transfer", b"a").unwrap();
        ctx.set_event("Transfer", b"b").unwrap();
        let events = ctx.events();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].1, b"a");
        assert_eq!(events[1].1, b"b");
    }

    #[test]
    fn test_unbound_identity_is_an_error() {
        let ctx = MemoryContext::new();
        assert!(matches!(ctx.msp_id(), Err(ContextError::Identity(_))));
    }

    #[test]
    fn test_bound_identity_is_returned() {
        let ctx = MemoryContext::with_caller("Org1MSP");
        assert_eq!(ctx.msp_id().unwrap(), "Org1MSP");
    }
}
