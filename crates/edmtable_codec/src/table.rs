//! Table name payloads.

use serde_json::Value;

use crate::config::CodecConfig;
use crate::error::{CodecError, CodecResult};
use crate::json::{list_field, parse_object, string_field, JsonObject};

/// Encodes and decodes table name payloads and table listings.
///
/// ```
/// use edmtable_codec::TableCodec;
///
/// let codec = TableCodec::new();
/// let bytes = codec.encode_table_name("mytable").unwrap();
/// assert_eq!(bytes, br#"{"TableName":"mytable"}"#);
/// assert_eq!(codec.decode_table_name(&bytes).unwrap(), "mytable");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableCodec {
    config: CodecConfig,
}

impl TableCodec {
    /// Creates a table codec with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table codec with the given configuration.
    #[must_use]
    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encodes the payload that creates a table.
    ///
    /// Names are not validated; an empty name is encoded as is.
    pub fn encode_table_name(&self, name: &str) -> CodecResult<Vec<u8>> {
        let mut object = JsonObject::new();
        object.insert(
            self.config.table_name_field.clone(),
            Value::String(name.to_string()),
        );
        Ok(serde_json::to_vec(&Value::Object(object))?)
    }

    /// Extracts the table name from a single table payload.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedPayload`] if the body is not an
    /// object or carries no table name.
    pub fn decode_table_name(&self, body: &[u8]) -> CodecResult<String> {
        let object = parse_object(body)?;
        string_field(&object, &self.config.table_name_field).map(str::to_string)
    }

    /// Extracts table names from a list envelope, in wire order.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::MalformedPayload`] if the list field is
    /// missing or any record lacks a table name.
    pub fn decode_table_list(&self, body: &[u8]) -> CodecResult<Vec<String>> {
        let object = parse_object(body)?;
        list_field(&object, &self.config.list_field)?
            .iter()
            .map(|record| match record {
                Value::Object(record) => {
                    string_field(record, &self.config.table_name_field).map(str::to_string)
                }
                _ => Err(CodecError::malformed("table record is not an object")),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_name_roundtrip() {
        let codec = TableCodec::new();
        let bytes = codec.encode_table_name("mytable").unwrap();
        assert_eq!(codec.decode_table_name(&bytes).unwrap(), "mytable");
    }

    #[test]
    fn empty_table_name_is_allowed() {
        let codec = TableCodec::new();
        let bytes = codec.encode_table_name("").unwrap();
        assert_eq!(bytes, br#"{"TableName":""}"#);
        assert_eq!(codec.decode_table_name(&bytes).unwrap(), "");
    }

    #[test]
    fn missing_table_name_is_malformed() {
        let codec = TableCodec::new();
        let err = codec.decode_table_name(br#"{"Name":"x"}"#).unwrap_err();
        assert_eq!(err, CodecError::malformed("missing field `TableName`"));
    }

    #[test]
    fn table_list_preserves_order() {
        let codec = TableCodec::new();
        let names = codec
            .decode_table_list(br#"{"value":[{"TableName":"b"},{"TableName":"a"}]}"#)
            .unwrap();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn empty_table_list() {
        let codec = TableCodec::new();
        assert!(codec.decode_table_list(br#"{"value":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn table_list_errors() {
        let codec = TableCodec::new();
        assert_eq!(
            codec.decode_table_list(br#"{"tables":[]}"#).unwrap_err(),
            CodecError::malformed("missing list field `value`")
        );
        assert!(codec
            .decode_table_list(br#"{"value":[{"TableName":"a"},{}]}"#)
            .is_err());
        assert!(codec.decode_table_list(br#"{"value":["a"]}"#).is_err());
        assert!(codec.decode_table_list(b"").is_err());
    }

    #[test]
    fn custom_fields() {
        let codec = TableCodec::with_config(
            CodecConfig::new().list_field("tables").table_name_field("name"),
        );
        let bytes = codec.encode_table_name("t1").unwrap();
        assert_eq!(bytes, br#"{"name":"t1"}"#);
        assert_eq!(
            codec
                .decode_table_list(br#"{"tables":[{"name":"t1"}]}"#)
                .unwrap(),
            vec!["t1"]
        );
    }
}
