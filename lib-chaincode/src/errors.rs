//! Host Context Errors

use thiserror::Error;

/// Error surfaced by the injected host context
///
/// These wrap platform-side failures (backend I/O, identity lookup, event
/// channel). Engines propagate them unchanged; retry and abort decisions
/// belong to the host transaction layer.
#[derive(Error, Debug, Clone)]
pub enum ContextError {
    #[error("world state access failed: {0}")]
    State(String),

    #[error("client identity unavailable: {0}")]
    Identity(String),

    #[error("event emission failed: {0}")]
    Event(String),
}

/// Result type for host context operations
pub type ContextResult<T> = Result<T, ContextError>;
