//! Error types for session operations.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by the session layer.
///
/// Deliberately small: malformed persisted values are *not* errors (they
/// parse to "absent"), and gateway failures are swallowed or fed back into
/// the state machine as actions rather than propagated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Durable storage could not be written or cleared.
    #[error("session storage error: {0}")]
    Storage(String),
}
