//! Value object trait: equality by value, not identity.
//!
//! Value objects are defined entirely by their attribute values. Two value
//! objects built from the same values are equal and hash the same, even though
//! they are distinct values in memory.

use core::any::Any;
use core::hash::Hash;

/// Marker trait for value objects.
///
/// Value objects are **immutable** once constructed and **compared by value**.
/// Constructors validate every field up front, so an instance that exists is
/// always complete.
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: values can be duplicated freely
/// - **Eq + Hash**: equality and hashing cover every field
/// - **Debug**: values show up readably in logs and test failures
/// - **Send + Sync + 'static**: values can be shared between threads without locks
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// struct Link {
///     anchor_text: String,
///     destination: String,
/// }
///
/// impl ValueObject for Link {}
///
/// let a = Link { anchor_text: "home".into(), destination: "index.html".into() };
/// let b = a.clone();
/// assert!(a.equals_any(&b));
/// assert!(!a.equals_any(&"home"));
/// ```
pub trait ValueObject: Clone + Eq + Hash + core::fmt::Debug + Send + Sync + 'static {
    /// Compare against a value of any type.
    ///
    /// Values of a different type are never equal; this never panics.
    fn equals_any(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }
}
