//! JSON scalar values as they appear on the wire.

use serde_json::{Number, Value};

use crate::error::{CodecError, CodecResult};

/// A JSON scalar.
///
/// Property values in an entity payload are always scalars. Keeping
/// integers and floats apart lets kind inference tell `42` from `42.0`.
#[derive(Debug, Clone, PartialEq)]
pub enum WireValue {
    /// JSON `null`.
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// A JSON number without fraction or exponent that fits in `i64`.
    Integer(i64),
    /// Any other JSON number.
    Number(f64),
    /// A JSON string.
    Text(String),
}

impl WireValue {
    /// Converts a parsed JSON value. Arrays and objects yield `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(WireValue::Null),
            Value::Bool(b) => Some(WireValue::Bool(*b)),
            Value::Number(n) => Some(match n.as_i64() {
                Some(i) => WireValue::Integer(i),
                None => WireValue::Number(n.as_f64()?),
            }),
            Value::String(s) => Some(WireValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }

    /// Converts into a JSON value.
    ///
    /// # Errors
    ///
    /// Fails for non-finite numbers, which JSON cannot represent.
    pub fn into_json(self) -> CodecResult<Value> {
        Ok(match self {
            WireValue::Null => Value::Null,
            WireValue::Bool(b) => Value::Bool(b),
            WireValue::Integer(i) => Value::Number(i.into()),
            WireValue::Number(f) => Number::from_f64(f)
                .map(Value::Number)
                .ok_or_else(|| CodecError::malformed(format!("{f} is not a JSON number")))?,
            WireValue::Text(s) => Value::String(s),
        })
    }

    /// Short name of the JSON shape, for diagnostics.
    #[must_use]
    pub fn shape(&self) -> &'static str {
        match self {
            WireValue::Null => "null",
            WireValue::Bool(_) => "boolean",
            WireValue::Integer(_) => "integer",
            WireValue::Number(_) => "number",
            WireValue::Text(_) => "string",
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, WireValue::Null)
    }

    /// Get this value as a string slice, if it is text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            WireValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for WireValue {
    fn from(s: &str) -> Self {
        WireValue::Text(s.to_string())
    }
}

impl From<String> for WireValue {
    fn from(s: String) -> Self {
        WireValue::Text(s)
    }
}

impl From<bool> for WireValue {
    fn from(b: bool) -> Self {
        WireValue::Bool(b)
    }
}

impl From<i64> for WireValue {
    fn from(i: i64) -> Self {
        WireValue::Integer(i)
    }
}

impl From<f64> for WireValue {
    fn from(f: f64) -> Self {
        WireValue::Number(f)
    }
}
