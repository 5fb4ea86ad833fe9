//! # edmtable codec
//!
//! JSON OData payload encoding/decoding for table storage.
//!
//! This crate provides:
//! - [`TableCodec`] for table name payloads and table listings
//! - [`EntityCodec`] for entity payloads and entity listings
//! - [`TypeCodec`], the per-kind value conversions, with the standard
//!   [`EdmTypeCodec`] implementation
//!
//! ## Wire format
//!
//! An entity is a flat JSON object. Strings, booleans, 32-bit integers
//! and finite doubles are written as plain JSON values; every other kind
//! is written as a string followed by a `<name>@odata.type` annotation:
//!
//! ```json
//! {"Name":"Alice","Age":30,"Visits":"7","Visits@odata.type":"Edm.Int64"}
//! ```
//!
//! On decode, `Timestamp` is always read as `Edm.DateTime`, `odata.*`
//! keys and annotations are skipped, and unannotated values have their
//! kind inferred from the JSON value.
//!
//! ## Usage
//!
//! ```
//! use edmtable_codec::{Decode, Encode};
//! use edmtable_model::{EdmValue, Entity};
//!
//! let mut entity = Entity::with_keys("pk", "rk");
//! entity.set_value("Visits", 7i64);
//!
//! let bytes = entity.encode().unwrap();
//! let decoded = Entity::decode(&bytes).unwrap();
//! assert_eq!(decoded.value("Visits"), Some(&EdmValue::Int64(7)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod entity;
mod error;
mod json;
mod table;
mod type_codec;
mod wire;

pub use config::{CodecConfig, DEFAULT_LIST_FIELD, DEFAULT_TABLE_NAME_FIELD};
pub use entity::{
    timestamp_etag, type_annotation_key, EntityCodec, ETAG_KEY, METADATA_PREFIX,
    TYPE_ANNOTATION_SUFFIX,
};
pub use error::{CodecError, CodecResult};
pub use json::JsonObject;
pub use table::TableCodec;
pub use type_codec::{format_datetime, EdmTypeCodec, TypeCodec};
pub use wire::WireValue;

use edmtable_model::Entity;

/// Trait for types that can be encoded to a JSON payload.
pub trait Encode {
    /// Encode this value to JSON bytes.
    fn encode(&self) -> CodecResult<Vec<u8>>;
}

/// Trait for types that can be decoded from a JSON payload.
pub trait Decode: Sized {
    /// Decode this value from JSON bytes.
    fn decode(bytes: &[u8]) -> CodecResult<Self>;
}

// Entities use the standard conversions and default configuration
impl Encode for Entity {
    fn encode(&self) -> CodecResult<Vec<u8>> {
        EntityCodec::new().encode_entity(self)
    }
}

impl Decode for Entity {
    fn decode(bytes: &[u8]) -> CodecResult<Self> {
        EntityCodec::new().decode_entity(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use edmtable_model::{EdmType, EdmValue, Property};
    use uuid::Uuid;

    fn roundtrip(property: Property) -> Option<Property> {
        let mut entity = Entity::new();
        entity.add_property("P", property);
        let decoded = Entity::decode(&entity.encode().unwrap()).unwrap();
        decoded.property("P").cloned()
    }

    #[test]
    fn roundtrip_string() {
        let p = Property::typed(EdmType::String, "hello world");
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_boolean() {
        let p = Property::typed(EdmType::Boolean, true);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_int32() {
        let p = Property::typed(EdmType::Int32, -100);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_int64() {
        let p = Property::typed(EdmType::Int64, i64::MIN);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_small_int64_keeps_kind() {
        let p = Property::typed(EdmType::Int64, 1i64);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_double() {
        let p = Property::typed(EdmType::Double, 3.0);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_datetime() {
        let dt = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 59).unwrap()
            + chrono::Duration::nanoseconds(123_456_700);
        let p = Property::typed(EdmType::DateTime, dt);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_guid() {
        let p = Property::typed(EdmType::Guid, Uuid::new_v4());
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_binary() {
        let p = Property::typed(EdmType::Binary, vec![0u8, 255, 7]);
        assert_eq!(roundtrip(p.clone()), Some(p));
    }

    #[test]
    fn roundtrip_untyped_value_gains_kind() {
        let decoded = roundtrip(Property::from_value(2.5)).unwrap();
        assert_eq!(decoded, Property::typed(EdmType::Double, 2.5));
    }

    #[test]
    fn roundtrip_null_decodes_as_string() {
        let decoded = roundtrip(Property::null(Some(EdmType::Int64))).unwrap();
        assert_eq!(decoded, Property::null(Some(EdmType::String)));
    }

    #[test]
    fn decoded_value_accessible() {
        let mut entity = Entity::new();
        entity.set_value("Flag", false);
        let decoded = Entity::decode(&entity.encode().unwrap()).unwrap();
        assert_eq!(decoded.value("Flag"), Some(&EdmValue::Boolean(false)));
    }
}
