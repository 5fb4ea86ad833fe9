//! Envelope helpers shared by the table and entity codecs.

use serde_json::{Map, Value};

use crate::error::{CodecError, CodecResult};

/// A parsed JSON object.
pub type JsonObject = Map<String, Value>;

/// Parses a body that must be a single JSON object.
pub(crate) fn parse_object(body: &[u8]) -> CodecResult<JsonObject> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(CodecError::malformed(format!(
            "expected a JSON object, found {}",
            json_shape(&other)
        ))),
    }
}

/// Returns the records of a list envelope.
pub(crate) fn list_field<'a>(object: &'a JsonObject, field: &str) -> CodecResult<&'a [Value]> {
    match object.get(field) {
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(CodecError::malformed(format!(
            "list field `{field}` is {}, not an array",
            json_shape(other)
        ))),
        None => Err(CodecError::malformed(format!("missing list field `{field}`"))),
    }
}

/// Returns a required string field.
pub(crate) fn string_field<'a>(object: &'a JsonObject, field: &str) -> CodecResult<&'a str> {
    match object.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(CodecError::malformed(format!(
            "field `{field}` is {}, not a string",
            json_shape(other)
        ))),
        None => Err(CodecError::malformed(format!("missing field `{field}`"))),
    }
}

pub(crate) fn json_shape(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_object_rejects_non_objects() {
        assert!(parse_object(br#"{"a":1}"#).is_ok());
        assert_eq!(
            parse_object(b"[1]").unwrap_err(),
            CodecError::malformed("expected a JSON object, found an array")
        );
        assert!(matches!(
            parse_object(b"{not json").unwrap_err(),
            CodecError::MalformedPayload { .. }
        ));
    }

    #[test]
    fn list_field_lookup() {
        let object = json!({"value": [1, 2], "other": 3});
        let object = object.as_object().unwrap();
        assert_eq!(list_field(object, "value").unwrap().len(), 2);
        assert!(list_field(object, "other").is_err());
        assert_eq!(
            list_field(object, "missing").unwrap_err(),
            CodecError::malformed("missing list field `missing`")
        );
    }

    #[test]
    fn string_field_lookup() {
        let object = json!({"name": "t", "n": 1});
        let object = object.as_object().unwrap();
        assert_eq!(string_field(object, "name").unwrap(), "t");
        assert!(string_field(object, "n").is_err());
        assert!(string_field(object, "x").is_err());
    }
}
