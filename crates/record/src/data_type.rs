use core::str::FromStr;

use serde::{Deserialize, Serialize};

use cclkit_core::DomainError;

/// CCL primitive type tag of a structure field.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    /// 1-byte integer.
    I1,
    /// 2-byte integer.
    I2,
    /// 4-byte integer.
    I4,
    /// 8-byte float.
    F8,
    /// Fixed-length character.
    Character,
    /// Variable-length character.
    Vc,
    /// Date/time.
    Dq8,
    /// Status block.
    Status,
}

impl DataType {
    pub const ALL: [DataType; 8] = [
        DataType::I1,
        DataType::I2,
        DataType::I4,
        DataType::F8,
        DataType::Character,
        DataType::Vc,
        DataType::Dq8,
        DataType::Status,
    ];

    /// Declaration code as written in CCL source.
    pub const fn code(self) -> &'static str {
        match self {
            DataType::I1 => "I1",
            DataType::I2 => "I2",
            DataType::I4 => "I4",
            DataType::F8 => "F8",
            DataType::Character => "C",
            DataType::Vc => "VC",
            DataType::Dq8 => "DQ8",
            DataType::Status => "STATUS",
        }
    }

    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            DataType::I1 | DataType::I2 | DataType::I4 | DataType::F8
        )
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DataType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::ALL
            .into_iter()
            .find(|t| t.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| DomainError::invalid_argument(format!("unknown data type: {s}")))
    }
}

impl TryFrom<String> for DataType {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        value.code().to_string()
    }
}
