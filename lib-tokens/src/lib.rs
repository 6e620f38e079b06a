//! Fungible-Token Chaincode Engine
//!
//! State-transition logic for a fungible-token ledger hosted on a shared,
//! externally-managed world state. The host platform injects a
//! [`TransactionContext`](lib_chaincode::TransactionContext) per invocation;
//! the engine validates, reads and writes scalar state through it, emits
//! `Transfer` events, and keeps a process-local audit log of successful
//! transfers.
//!
//! Consensus, transport, persistence, and identity verification are host
//! responsibilities and are not implemented here.
//!
//! # Key Types
//!
//! - [`TokenContract`]: the engine; one instance per running contract
//! - [`IssuerPolicy`]: injected initialize/mint authorization rule
//! - [`TransferEvent`]: the `Transfer` event wire type
//! - [`TokenError`]: error taxonomy for all operations
//!
//! # Determinism
//!
//! Committed ledger state depends only on the injected context: no clocks,
//! no randomness. The audit log is the single piece of process-local mutable
//! state and sits outside ledger consistency guarantees.

pub mod audit;
pub mod contract;
pub mod errors;
pub mod math;
pub mod policy;
pub mod state;

pub use audit::{TransferEvent, MINT_SOURCE, TRANSFER_EVENT};
pub use contract::{TokenContract, TokenMetadata};
pub use errors::{TokenError, TokenResult};
pub use policy::{ContractConfig, IssuerPolicy};
pub use state::Amount;
