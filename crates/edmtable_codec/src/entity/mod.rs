//! Entity payloads.
//!
//! An entity is written as a flat JSON object. Properties whose kind
//! cannot be recovered from the JSON value alone are followed by a
//! `<name>@odata.type` annotation naming the kind. The service adds
//! `Timestamp` and `odata.*` metadata keys, which decoding treats
//! specially.

mod decode;
mod encode;

use crate::config::CodecConfig;
use crate::type_codec::{EdmTypeCodec, TypeCodec};

pub use decode::timestamp_etag;

/// Suffix of the key that annotates a property with its kind.
pub const TYPE_ANNOTATION_SUFFIX: &str = "@odata.type";

/// Prefix of service metadata keys.
pub const METADATA_PREFIX: &str = "odata.";

/// Key carrying the entity's ETag.
pub const ETAG_KEY: &str = "odata.etag";

/// Returns the annotation key for a property.
#[must_use]
pub fn type_annotation_key(name: &str) -> String {
    format!("{name}{TYPE_ANNOTATION_SUFFIX}")
}

/// Encodes entities to and decodes entities from JSON payloads.
///
/// The codec holds only configuration and a stateless [`TypeCodec`], so
/// one instance can be shared freely between threads.
///
/// ```
/// use edmtable_codec::EntityCodec;
/// use edmtable_model::{EdmType, Entity, Property};
///
/// let codec = EntityCodec::new();
///
/// let mut entity = Entity::with_keys("pk", "rk");
/// entity.add_property("Count", Property::typed(EdmType::Int64, 5i64));
///
/// let bytes = codec.encode_entity(&entity).unwrap();
/// assert_eq!(
///     bytes,
///     br#"{"PartitionKey":"pk","RowKey":"rk","Count":"5","Count@odata.type":"Edm.Int64"}"#
/// );
///
/// let decoded = codec.decode_entity(&bytes).unwrap();
/// assert_eq!(decoded.property("Count"), entity.property("Count"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityCodec<C = EdmTypeCodec> {
    types: C,
    config: CodecConfig,
}

impl EntityCodec {
    /// Creates an entity codec with the standard conversions and the
    /// default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: TypeCodec> EntityCodec<C> {
    /// Creates an entity codec with custom conversions.
    #[must_use]
    pub fn with_type_codec(types: C) -> Self {
        Self {
            types,
            config: CodecConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Returns the type conversions in use.
    pub fn type_codec(&self) -> &C {
        &self.types
    }
}

/// Returns `true` for keys that never become properties on decode.
pub(crate) fn is_reserved_key(key: &str) -> bool {
    key == edmtable_model::TIMESTAMP
        || key.ends_with(TYPE_ANNOTATION_SUFFIX)
        || key.starts_with(METADATA_PREFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys() {
        assert!(is_reserved_key("Timestamp"));
        assert!(is_reserved_key("odata.etag"));
        assert!(is_reserved_key("odata.metadata"));
        assert!(is_reserved_key("Age@odata.type"));
        assert!(is_reserved_key("@odata.type"));

        assert!(!is_reserved_key("timestamp"));
        assert!(!is_reserved_key("Age"));
        assert!(!is_reserved_key("xodata.etag"));
        assert!(!is_reserved_key("odata"));
    }

    #[test]
    fn annotation_key() {
        assert_eq!(type_annotation_key("Age"), "Age@odata.type");
    }

    #[test]
    fn codec_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EntityCodec>();
    }
}
