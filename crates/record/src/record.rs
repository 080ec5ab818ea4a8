use std::sync::Arc;

use cclkit_core::ValueObject;

use crate::field::Field;
use crate::structure::Structure;

/// A named record over a shared [`Structure`].
///
/// The structure is held by reference count and never copied; it is immutable,
/// so sharing it between records is safe.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: String,
    structure: Arc<Structure>,
}

impl Record {
    pub(crate) fn new(name: String, structure: Arc<Structure>) -> Self {
        Self { name, structure }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn structure(&self) -> &Arc<Structure> {
        &self.structure
    }

    /// Shorthand for `structure().fields()`.
    pub fn fields(&self) -> &[Field] {
        self.structure.fields()
    }
}

impl ValueObject for Record {}

impl core::fmt::Display for Record {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "record {} ({} fields)", self.name, self.structure.len())
    }
}
