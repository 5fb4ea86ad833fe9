//! Entity Data Model property kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// The kind of a table property.
///
/// Table storage supports a closed set of primitive kinds. Each kind has a
/// wire name of the form `Edm.<Kind>`, which is what appears in
/// `@odata.type` annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdmType {
    /// UTF-8 text.
    String,
    /// Raw bytes.
    Binary,
    /// `true` or `false`.
    Boolean,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// 64-bit IEEE 754 floating point.
    Double,
    /// UTC date and time.
    DateTime,
    /// 128-bit GUID.
    Guid,
}

impl EdmType {
    /// Every kind, in declaration order.
    pub const ALL: [EdmType; 8] = [
        EdmType::String,
        EdmType::Binary,
        EdmType::Boolean,
        EdmType::Int32,
        EdmType::Int64,
        EdmType::Double,
        EdmType::DateTime,
        EdmType::Guid,
    ];

    /// Returns the wire name of this kind, e.g. `Edm.Int64`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EdmType::String => "Edm.String",
            EdmType::Binary => "Edm.Binary",
            EdmType::Boolean => "Edm.Boolean",
            EdmType::Int32 => "Edm.Int32",
            EdmType::Int64 => "Edm.Int64",
            EdmType::Double => "Edm.Double",
            EdmType::DateTime => "Edm.DateTime",
            EdmType::Guid => "Edm.Guid",
        }
    }

    /// Looks up a kind by its wire name.
    ///
    /// Names are matched exactly; `edm.int64` is not `Edm.Int64`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Returns `true` for the integer and floating point kinds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(self, EdmType::Int32 | EdmType::Int64 | EdmType::Double)
    }
}

impl fmt::Display for EdmType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EdmType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ModelError::unknown_type(s))
    }
}
