//! Token Engine Errors

use lib_chaincode::ContextError;
use thiserror::Error;

use crate::state::Amount;

/// Error during token operations
///
/// Every error carries enough detail to be surfaced to the caller as-is.
/// The engine never retries and never rolls back; atomicity is whatever the
/// host transaction commit provides.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("contract is not initialized: call initialize() first")]
    NotInitialized,

    #[error("contract is already initialized")]
    AlreadyInitialized,

    #[error("client '{msp_id}' is not authorized for this operation")]
    Unauthorized { msp_id: String },

    #[error("amount must be a positive integer, got {amount}")]
    InvalidAmount { amount: Amount },

    #[error("cannot transfer from account '{account}' to itself")]
    SelfTransfer { account: String },

    #[error("insufficient funds in '{account}': have {have}, need {need}")]
    InsufficientFunds {
        account: String,
        have: Amount,
        need: Amount,
    },

    #[error("addition overflow: {a} + {b} exceeds the representable range")]
    Overflow { a: Amount, b: Amount },

    #[error("subtraction underflow: {a} is less than {b}")]
    Underflow { a: Amount, b: Amount },

    #[error("malformed amount under key '{key}': {raw:?}")]
    MalformedAmount { key: String, raw: String },

    #[error("host context failure: {0}")]
    Context(#[from] ContextError),

    #[error("failed to serialize event: {0}")]
    EventSerialization(#[from] serde_json::Error),
}

/// Result type for token operations
pub type TokenResult<T> = Result<T, TokenError>;
