//! Entity decoding.

use chrono::{DateTime, Utc};
use edmtable_model::{EdmType, Entity, Property, TIMESTAMP};
use serde_json::Value;
use tracing::{debug, trace};

use super::{is_reserved_key, type_annotation_key, EntityCodec, ETAG_KEY};
use crate::error::{CodecError, CodecResult};
use crate::json::{json_shape, list_field, parse_object, JsonObject};
use crate::type_codec::TypeCodec;
use crate::wire::WireValue;

/// Builds the weak ETag the service implies for a timestamp.
///
/// The Unix time in seconds is rendered as lowercase hexadecimal:
/// `W/"datetime'5e0be100'"`.
#[must_use]
pub fn timestamp_etag(timestamp: &DateTime<Utc>) -> String {
    format!("W/\"datetime'{:x}'\"", timestamp.timestamp())
}

impl<C: TypeCodec> EntityCodec<C> {
    /// Decodes a single entity payload.
    ///
    /// # Errors
    ///
    /// - [`CodecError::MalformedPayload`] if the body is not a JSON object
    ///   or a property value is not a scalar
    /// - [`CodecError::UnsupportedKind`] for an unknown annotation
    /// - [`CodecError::ValueConversion`] if a value does not fit its kind
    pub fn decode_entity(&self, body: &[u8]) -> CodecResult<Entity> {
        let object = parse_object(body)?;
        self.decode_object(&object)
    }

    /// Decodes every entity of a list envelope, in wire order.
    ///
    /// # Errors
    ///
    /// Fails if the list field is missing, a record is not an object, or
    /// any record fails to decode.
    pub fn decode_entities(&self, body: &[u8]) -> CodecResult<Vec<Entity>> {
        let object = parse_object(body)?;
        let records = list_field(&object, &self.config.list_field)?;
        debug!(count = records.len(), "decoding entity list");

        records
            .iter()
            .map(|record| match record {
                Value::Object(record) => self.decode_object(record),
                other => Err(CodecError::malformed(format!(
                    "entity record is {}, not an object",
                    json_shape(other)
                ))),
            })
            .collect()
    }

    /// Decodes an already parsed entity object.
    pub fn decode_object(&self, object: &JsonObject) -> CodecResult<Entity> {
        let mut entity = Entity::new();

        let timestamp = match object.get(TIMESTAMP) {
            Some(raw) => {
                let value = self
                    .types
                    .deserialize(EdmType::DateTime, &scalar(TIMESTAMP, raw)?)
                    .map_err(|e| e.with_property(TIMESTAMP))?;
                let timestamp = value.as_ref().and_then(|v| v.as_datetime());
                entity.add_property(TIMESTAMP, Property::new(Some(EdmType::DateTime), value));
                timestamp
            }
            None => None,
        };

        entity.set_etag(self.resolve_etag(object, timestamp.as_ref()));

        for (key, raw) in object {
            if is_reserved_key(key) {
                trace!(key = key.as_str(), "skipping reserved key");
                continue;
            }

            let wire = scalar(key, raw)?;
            let edm_type = match object.get(&type_annotation_key(key)) {
                Some(Value::String(type_name)) => self
                    .types
                    .parse_type(type_name)
                    .map_err(|e| e.with_property(key))?,
                Some(other) => {
                    return Err(CodecError::unsupported_kind(other.to_string()).with_property(key))
                }
                None => self.types.infer_type(&wire),
            };

            let value = self
                .types
                .deserialize(edm_type, &wire)
                .map_err(|e| e.with_property(key))?;
            entity.add_property(key.as_str(), Property::new(Some(edm_type), value));
        }

        Ok(entity)
    }

    fn resolve_etag(&self, object: &JsonObject, timestamp: Option<&DateTime<Utc>>) -> String {
        match object.get(ETAG_KEY) {
            Some(Value::String(etag)) => etag.clone(),
            Some(Value::Null) => String::new(),
            Some(other) => other.to_string(),
            None => match timestamp {
                Some(timestamp) if self.config.derive_etag => {
                    let etag = timestamp_etag(timestamp);
                    trace!(etag = etag.as_str(), "derived ETag from timestamp");
                    etag
                }
                _ => String::new(),
            },
        }
    }
}

fn scalar(key: &str, raw: &Value) -> CodecResult<WireValue> {
    WireValue::from_json(raw).ok_or_else(|| {
        CodecError::malformed(format!(
            "property `{key}` is {}, not a scalar",
            json_shape(raw)
        ))
    })
}
