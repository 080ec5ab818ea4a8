//! `cclkit-core` — building blocks shared by the value types.
//!
//! This crate contains the error model, the value object marker trait and the
//! presence guards used at construction boundaries. It performs no I/O.

pub mod error;
pub mod guard;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use guard::{require_argument, require_present};
pub use value_object::ValueObject;
