//! Domain error model.

use thiserror::Error;

/// Result type used by every constructor and factory in the workspace.
pub type DomainResult<T> = Result<T, DomainError>;

/// Construction-time failure.
///
/// Both variants render as their bare message so the exact text can be
/// compared by callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied value is wrong (or missing where the type treats absence as
    /// an invalid argument).
    #[error("{0}")]
    InvalidArgument(String),

    /// A required reference was absent.
    #[error("{0}")]
    NullReference(String),
}

impl DomainError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    pub fn null_reference(msg: impl Into<String>) -> Self {
        Self::NullReference(msg.into())
    }

    /// The message carried by this error.
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidArgument(msg) | DomainError::NullReference(msg) => msg,
        }
    }
}
