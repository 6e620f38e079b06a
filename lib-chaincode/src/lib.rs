//! Chaincode Host Seam
//!
//! Traits for the transaction context an external ledger platform injects
//! into every contract invocation: world-state access, caller identity, and
//! event emission. Engines consume these interfaces; they never implement
//! the platform side themselves.
//!
//! The platform owns persistence, ordering, and commit. An engine built on
//! this seam must stay deterministic: committed state may depend only on the
//! injected context, never on clocks, randomness, or process-local state.
//!
//! # Key Types
//!
//! - [`TransactionContext`]: the full per-invocation context
//! - [`WorldState`], [`ClientIdentity`], [`EventSink`]: its three concerns
//! - [`MemoryContext`]: volatile in-memory context for tests and embedders
//! - [`ContextError`]: failures surfaced by the host side

pub mod context;
pub mod errors;
pub mod memory;

pub use context::{ClientIdentity, EventSink, TransactionContext, WorldState};
pub use errors::{ContextError, ContextResult};
pub use memory::MemoryContext;
