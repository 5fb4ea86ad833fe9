//! Fuzz testing harnesses for the edmtable codecs.
//!
//! This module provides fuzz targets that can be used with cargo-fuzz
//! or other fuzzing frameworks.

use edmtable_codec::{EntityCodec, TableCodec};
use edmtable_model::{EdmValue, Entity};

/// Fuzz target for entity decoding.
///
/// Tests that arbitrary byte sequences either:
/// - Decode successfully to an entity, or
/// - Return a proper error (no panics)
pub fn fuzz_entity_decode(data: &[u8]) {
    let codec = EntityCodec::new();
    let _ = codec.decode_entity(data);
    let _ = codec.decode_entities(data);
}

/// Fuzz target for table payload decoding.
pub fn fuzz_table_decode(data: &[u8]) {
    let codec = TableCodec::new();
    let _ = codec.decode_table_name(data);
    let _ = codec.decode_table_list(data);
}

/// Fuzz target for entity roundtrip.
///
/// Anything that decodes must encode, and decode again to the same
/// values. Kinds of nulls are not compared: a null is written without
/// its annotation.
pub fn fuzz_entity_roundtrip(data: &[u8]) {
    let codec = EntityCodec::new();
    if let Ok(entity) = codec.decode_entity(data) {
        if let Ok(encoded) = codec.encode_entity(&entity) {
            if let Ok(decoded) = codec.decode_entity(&encoded) {
                assert_eq!(
                    format!("{:?}", values(&entity)),
                    format!("{:?}", values(&decoded)),
                    "Roundtrip mismatch"
                );
            }
        }
    }
}

fn values(entity: &Entity) -> Vec<(&str, Option<&EdmValue>)> {
    entity
        .properties()
        .map(|(name, property)| (name, property.value()))
        .collect()
}
