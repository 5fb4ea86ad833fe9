//! Native property values.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::edm::EdmType;

/// A non-null property value in its native representation.
///
/// Every variant corresponds to exactly one [`EdmType`], returned by
/// [`EdmValue::edm_type`]. Null is modelled as the absence of a value on
/// [`crate::Property`], not as a variant here.
#[derive(Debug, Clone, PartialEq)]
pub enum EdmValue {
    /// Text value.
    String(String),
    /// Byte string.
    Binary(Vec<u8>),
    /// Boolean value.
    Boolean(bool),
    /// 32-bit integer.
    Int32(i32),
    /// 64-bit integer.
    Int64(i64),
    /// Double precision float.
    Double(f64),
    /// UTC timestamp.
    DateTime(DateTime<Utc>),
    /// GUID.
    Guid(Uuid),
}

impl EdmValue {
    /// Returns the kind this value naturally belongs to.
    #[must_use]
    pub const fn edm_type(&self) -> EdmType {
        match self {
            EdmValue::String(_) => EdmType::String,
            EdmValue::Binary(_) => EdmType::Binary,
            EdmValue::Boolean(_) => EdmType::Boolean,
            EdmValue::Int32(_) => EdmType::Int32,
            EdmValue::Int64(_) => EdmType::Int64,
            EdmValue::Double(_) => EdmType::Double,
            EdmValue::DateTime(_) => EdmType::DateTime,
            EdmValue::Guid(_) => EdmType::Guid,
        }
    }

    /// Get this value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EdmValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get this value as bytes, if it is binary.
    pub fn as_binary(&self) -> Option<&[u8]> {
        match self {
            EdmValue::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Get this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            EdmValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get this value as an `i32`, if it is a 32-bit integer.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            EdmValue::Int32(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as an `i64`, widening 32-bit integers.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            EdmValue::Int32(n) => Some(i64::from(*n)),
            EdmValue::Int64(n) => Some(*n),
            _ => None,
        }
    }

    /// Get this value as an `f64`, if it is a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            EdmValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Get this value as a timestamp, if it is one.
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            EdmValue::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }

    /// Get this value as a GUID, if it is one.
    pub fn as_guid(&self) -> Option<Uuid> {
        match self {
            EdmValue::Guid(g) => Some(*g),
            _ => None,
        }
    }
}

impl From<String> for EdmValue {
    fn from(s: String) -> Self {
        EdmValue::String(s)
    }
}

impl From<&str> for EdmValue {
    fn from(s: &str) -> Self {
        EdmValue::String(s.to_string())
    }
}

impl From<Vec<u8>> for EdmValue {
    fn from(b: Vec<u8>) -> Self {
        EdmValue::Binary(b)
    }
}

impl From<&[u8]> for EdmValue {
    fn from(b: &[u8]) -> Self {
        EdmValue::Binary(b.to_vec())
    }
}

impl From<bool> for EdmValue {
    fn from(b: bool) -> Self {
        EdmValue::Boolean(b)
    }
}

impl From<i32> for EdmValue {
    fn from(n: i32) -> Self {
        EdmValue::Int32(n)
    }
}

impl From<i64> for EdmValue {
    fn from(n: i64) -> Self {
        EdmValue::Int64(n)
    }
}

impl From<f64> for EdmValue {
    fn from(f: f64) -> Self {
        EdmValue::Double(f)
    }
}

impl From<DateTime<Utc>> for EdmValue {
    fn from(dt: DateTime<Utc>) -> Self {
        EdmValue::DateTime(dt)
    }
}

impl From<Uuid> for EdmValue {
    fn from(g: Uuid) -> Self {
        EdmValue::Guid(g)
    }
}
