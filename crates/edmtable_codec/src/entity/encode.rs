//! Entity encoding.

use edmtable_model::Entity;
use serde_json::Value;

use super::{type_annotation_key, EntityCodec};
use crate::error::CodecResult;
use crate::json::JsonObject;
use crate::type_codec::TypeCodec;

impl<C: TypeCodec> EntityCodec<C> {
    /// Encodes an entity to a JSON payload.
    ///
    /// Keys follow the entity's property order; annotations directly
    /// follow the property they describe. The ETag is not part of the
    /// payload.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CodecError::ValueConversion`] if a property's value
    /// cannot be written as its declared kind.
    pub fn encode_entity(&self, entity: &Entity) -> CodecResult<Vec<u8>> {
        let object = self.encode_object(entity)?;
        Ok(serde_json::to_vec(&Value::Object(object))?)
    }

    /// Encodes an entity to a JSON object without serializing it.
    pub fn encode_object(&self, entity: &Entity) -> CodecResult<JsonObject> {
        let mut object = JsonObject::with_capacity(entity.len());

        for (name, property) in entity.properties() {
            // Nulls never carry an annotation, whatever their declared kind.
            let Some(value) = property.value() else {
                object.insert(name.to_string(), Value::Null);
                continue;
            };

            let edm_type = property.edm_type().unwrap_or_else(|| value.edm_type());
            let wire = self
                .types
                .serialize(edm_type, value)
                .map_err(|e| e.with_property(name))?;
            let annotate = self.types.requires_annotation(edm_type, &wire);

            object.insert(
                name.to_string(),
                wire.into_json().map_err(|e| e.with_property(name))?,
            );
            if annotate {
                object.insert(
                    type_annotation_key(name),
                    Value::String(edm_type.as_str().to_string()),
                );
            }
        }

        Ok(object)
    }
}
