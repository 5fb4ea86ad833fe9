//! Sample entities and payloads.
//!
//! Provides ready-made entities covering every kind and helpers that
//! wrap encoded entities the way the service returns them.

use chrono::{DateTime, TimeZone, Utc};
use edmtable_codec::{
    format_datetime, EntityCodec, JsonObject, DEFAULT_LIST_FIELD, DEFAULT_TABLE_NAME_FIELD,
    ETAG_KEY,
};
use edmtable_model::{EdmType, Entity, Property, TIMESTAMP};
use serde_json::{json, Value};
use uuid::Uuid;

/// The timestamp used by service-shaped fixtures: 2020-01-01T00:00:00Z.
pub fn fixture_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// An entity holding one property of every kind plus a typed null.
pub fn sample_entity() -> Entity {
    let mut entity = Entity::with_keys("customers", "0001");
    entity.add_property("Name", Property::typed(EdmType::String, "Alice"));
    entity.add_property("Photo", Property::typed(EdmType::Binary, vec![0xde_u8, 0xad, 0xbe, 0xef]));
    entity.add_property("IsActive", Property::typed(EdmType::Boolean, true));
    entity.add_property("Age", Property::typed(EdmType::Int32, 34));
    entity.add_property("Orders", Property::typed(EdmType::Int64, 12_000_000_000i64));
    entity.add_property("Balance", Property::typed(EdmType::Double, 1024.5));
    entity.add_property("Since", Property::typed(EdmType::DateTime, fixture_timestamp()));
    entity.add_property(
        "CustomerId",
        Property::typed(
            EdmType::Guid,
            Uuid::from_u128(0xc9da_6455_213d_42c9_9a79_3e91_49a5_7833),
        ),
    );
    entity.add_property("Nickname", Property::null(Some(EdmType::String)));
    entity
}

/// A small customer entity; `index` makes the row key unique.
pub fn customer_entity(index: usize) -> Entity {
    let mut entity = Entity::with_keys("customers", format!("{index:04}"));
    entity.set_value("Name", format!("customer-{index}"));
    entity.set_value("Visits", i32::try_from(index).unwrap_or(i32::MAX));
    entity
}

/// Encodes an entity and adds the metadata keys the service would send.
///
/// `Timestamp` is always added; `odata.etag` only when given.
pub fn service_entity_object(entity: &Entity, etag: Option<&str>) -> JsonObject {
    let mut object = JsonObject::new();
    if let Some(etag) = etag {
        object.insert(ETAG_KEY.to_string(), Value::String(etag.to_string()));
    }
    object.insert(
        TIMESTAMP.to_string(),
        Value::String(format_datetime(&fixture_timestamp())),
    );
    let encoded = EntityCodec::new()
        .encode_object(entity)
        .expect("fixture entities encode");
    object.extend(encoded);
    object
}

/// A single entity response body.
pub fn service_entity_payload(entity: &Entity, etag: Option<&str>) -> Vec<u8> {
    serde_json::to_vec(&Value::Object(service_entity_object(entity, etag)))
        .expect("Failed to serialize payload")
}

/// An entity list response body.
pub fn entity_list_payload(entities: &[Entity]) -> Vec<u8> {
    let records: Vec<Value> = entities
        .iter()
        .map(|entity| Value::Object(service_entity_object(entity, None)))
        .collect();
    serde_json::to_vec(&json!({
        "odata.metadata": "https://account.table.example/$metadata#customers",
        DEFAULT_LIST_FIELD: records,
    }))
    .expect("Failed to serialize payload")
}

/// A table list response body.
pub fn table_list_payload(names: &[&str]) -> Vec<u8> {
    let records: Vec<Value> = names
        .iter()
        .map(|name| json!({ DEFAULT_TABLE_NAME_FIELD: name }))
        .collect();
    serde_json::to_vec(&json!({ DEFAULT_LIST_FIELD: records })).expect("Failed to serialize payload")
}
