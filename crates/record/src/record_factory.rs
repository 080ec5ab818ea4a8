//! Creation of [`Record`]s.

use std::sync::Arc;

use cclkit_core::{DomainResult, require_present};

use crate::record::Record;
use crate::structure::Structure;

const NAME_REQUIRED: &str = "Name must not be null";
const STRUCTURE_REQUIRED: &str = "Structure must not be null";

/// Create a record called `name` with the layout `structure`.
///
/// Only presence is checked here. Field-level rules belong to [`Structure`],
/// which already enforced them when it was built.
pub fn create(name: Option<String>, structure: Option<Arc<Structure>>) -> DomainResult<Record> {
    let name = require_present(name, NAME_REQUIRED)?;
    let structure = require_present(structure, STRUCTURE_REQUIRED)?;

    tracing::debug!(record = %name, fields = structure.len(), "record created");
    Ok(Record::new(name, structure))
}
