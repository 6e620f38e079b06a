//! Transaction Context Traits
//!
//! The host platform owns the world state, the caller's identity, and the
//! event channel; each invocation hands the engine one context scoped to
//! that invocation. All methods take `&self` - hosts with mutable backends
//! use interior mutability, and writes become visible to other transactions
//! only when the host commits.

use crate::errors::ContextResult;

/// Read/write access to the shared world state
pub trait WorldState {
    /// Read a value by key. `Ok(None)` means the key is absent.
    fn get_state(&self, key: &str) -> ContextResult<Option<Vec<u8>>>;

    /// Write a value by key, bypassing any additional identity-verification
    /// workflow the host runs for regular writes.
    fn put_state_without_kyc(&self, key: &str, value: &[u8]) -> ContextResult<()>;
}

/// Identity of the invoking caller's organization
pub trait ClientIdentity {
    /// MSP identifier of the organization the caller belongs to.
    ///
    /// Cryptographic verification of the identity happens on the host side;
    /// engines treat the returned string as authoritative.
    fn msp_id(&self) -> ContextResult<String>;
}

/// Named-event channel visible to external listeners
pub trait EventSink {
    /// Emit a named, serialized event for the current transaction.
    fn set_event(&self, name: &str, payload: &[u8]) -> ContextResult<()>;
}

/// Full transaction context handed to an engine per invocation
///
/// Blanket-implemented for anything providing all three concerns, so hosts
/// implement the individual traits and engines take `&dyn TransactionContext`.
pub trait TransactionContext: WorldState + ClientIdentity + EventSink {}

impl<T: WorldState + ClientIdentity + EventSink> TransactionContext for T {}
