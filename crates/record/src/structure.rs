//! Ordered field layouts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use cclkit_core::{DomainError, DomainResult, ValueObject};

use crate::data_type::DataType;
use crate::field::Field;

/// Ordered, immutable collection of fields describing a record's shape.
///
/// Field names are unique, compared case-insensitively like CCL identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StructureFields")]
pub struct Structure {
    fields: Vec<Field>,
}

impl Structure {
    pub fn new(fields: Vec<Field>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(fields.len());
        for field in &fields {
            if !seen.insert(field.name().to_ascii_lowercase()) {
                return Err(DomainError::invalid_argument(format!(
                    "duplicate field name: {}",
                    field.name()
                )));
            }
        }
        Ok(Self { fields })
    }

    pub fn builder() -> StructureBuilder {
        StructureBuilder::default()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by name, ignoring ASCII case.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }
}

impl ValueObject for Structure {}

#[derive(Deserialize)]
struct StructureFields {
    fields: Vec<Field>,
}

impl TryFrom<StructureFields> for Structure {
    type Error = DomainError;

    fn try_from(value: StructureFields) -> Result<Self, Self::Error> {
        Structure::new(value.fields)
    }
}

/// Fluent construction of a [`Structure`].
///
/// Errors from individual fields are held until [`StructureBuilder::build`];
/// the first one wins.
#[derive(Debug, Default)]
pub struct StructureBuilder {
    fields: Vec<Field>,
    error: Option<DomainError>,
}

impl StructureBuilder {
    pub fn add(self, name: impl Into<String>, data_type: DataType) -> Self {
        match Field::new(name, data_type) {
            Ok(field) => self.add_field(field),
            Err(e) => self.fail(e),
        }
    }

    pub fn add_field(mut self, field: Field) -> Self {
        if self.error.is_none() {
            self.fields.push(field);
        }
        self
    }

    pub fn build(self) -> DomainResult<Structure> {
        match self.error {
            Some(e) => Err(e),
            None => Structure::new(self.fields),
        }
    }

    fn fail(mut self, error: DomainError) -> Self {
        self.error.get_or_insert(error);
        self
    }
}
