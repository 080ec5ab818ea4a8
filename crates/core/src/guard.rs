//! Presence guards used at construction boundaries.
//!
//! Absence is modelled as `Option::None`. Each guard either unwraps the value or
//! fails with a fixed message, so a constructor can validate every input before
//! it builds anything.

use crate::error::{DomainError, DomainResult};

/// Unwrap a required reference, failing with [`DomainError::NullReference`].
pub fn require_present<T>(value: Option<T>, msg: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::null_reference(msg))
}

/// Unwrap a required argument, failing with [`DomainError::InvalidArgument`].
pub fn require_argument<T>(value: Option<T>, msg: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::invalid_argument(msg))
}
