use serde::{Deserialize, Serialize};

use cclkit_core::{DomainError, DomainResult, ValueObject};

use crate::data_type::DataType;

/// One named, typed member of a [`crate::Structure`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "FieldFields")]
pub struct Field {
    name: String,
    data_type: DataType,
}

impl Field {
    pub fn new(name: impl Into<String>, data_type: DataType) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::invalid_argument("Field name must not be blank"));
        }
        Ok(Self { name, data_type })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }
}

impl ValueObject for Field {}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} = {}", self.name, self.data_type)
    }
}

#[derive(Deserialize)]
struct FieldFields {
    name: String,
    data_type: DataType,
}

impl TryFrom<FieldFields> for Field {
    type Error = DomainError;

    fn try_from(fields: FieldFields) -> Result<Self, Self::Error> {
        Field::new(fields.name, fields.data_type)
    }
}
