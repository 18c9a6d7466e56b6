//! Error types for snapkv core.
//!
//! The public [`Database`](crate::Database) surface is total and never
//! returns these errors. They describe internal precondition violations
//! that the facade is responsible for making unreachable.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in snapkv core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A snapshot was popped from an empty snapshot stack.
    #[error("snapshot stack is empty: no open transaction")]
    EmptySnapshotStack,

    /// Operation not permitted in current state.
    #[error("invalid operation: {message}")]
    InvalidOperation {
        /// Description of why operation is invalid.
        message: String,
    },
}

impl CoreError {
    /// Creates an invalid operation error.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }
}
