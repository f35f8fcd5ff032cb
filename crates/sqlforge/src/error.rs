//! Error types for sqlforge

use thiserror::Error;

/// Result type alias for statement building.
pub type SqlResult<T> = Result<T, SqlError>;

/// Error types for statement building.
///
/// Only precondition failures are reported; every documented happy path is
/// infallible and the infallible builders return plain `String`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SqlError {
    /// Input violates a builder precondition
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl SqlError {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if this is an invalid-argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
