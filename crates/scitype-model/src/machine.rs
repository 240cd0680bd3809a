//! Machine (storage) types of values and container elements.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The storage type of a value, as opposed to its scientific role.
///
/// Bulk containers are keyed by their element machine type when looking up
/// fast-path scitypes.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MachineType {
    /// Only missing values.
    Null,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    String,
    Categorical,
    Image,
    Tuple,
    Array,
    Table,
    /// Heterogeneous elements.
    Any,
    /// Anything else, by name.
    Other(String),
}

impl MachineType {
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::UInt8
                | Self::UInt16
                | Self::UInt32
                | Self::UInt64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Int8 => "Int8",
            Self::Int16 => "Int16",
            Self::Int32 => "Int32",
            Self::Int64 => "Int64",
            Self::UInt8 => "UInt8",
            Self::UInt16 => "UInt16",
            Self::UInt32 => "UInt32",
            Self::UInt64 => "UInt64",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
            Self::String => "String",
            Self::Categorical => "Categorical",
            Self::Image => "Image",
            Self::Tuple => "Tuple",
            Self::Array => "Array",
            Self::Table => "Table",
            Self::Any => "Any",
            Self::Other(name) => name,
        }
    }

    /// Every integer machine type.
    pub fn integers() -> [Self; 8] {
        [
            Self::Int8,
            Self::Int16,
            Self::Int32,
            Self::Int64,
            Self::UInt8,
            Self::UInt16,
            Self::UInt32,
            Self::UInt64,
        ]
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
