//! Property-based test generators using proptest.
//!
//! Provides strategies for generating random values, properties and
//! entities that the codec must round-trip.

use chrono::{DateTime, Utc};
use edmtable_model::{EdmValue, Entity, Property, TIMESTAMP};
use proptest::prelude::*;
use uuid::Uuid;

/// Latest second representable with a four digit year.
const MAX_UNIX_SECONDS: i64 = 253_402_300_799;

/// Strategy for timestamps between 1970 and 9999 with nanosecond precision.
pub fn datetime_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0..=MAX_UNIX_SECONDS, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap_or_default())
}

/// Strategy for doubles that compare equal to themselves.
pub fn double_strategy() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("NaN never compares equal", |f| !f.is_nan())
}

/// Strategy for non-null values of every kind.
pub fn edm_value_strategy() -> impl Strategy<Value = EdmValue> {
    prop_oneof![
        any::<String>().prop_map(EdmValue::String),
        prop::collection::vec(any::<u8>(), 0..64).prop_map(EdmValue::Binary),
        any::<bool>().prop_map(EdmValue::Boolean),
        any::<i32>().prop_map(EdmValue::Int32),
        any::<i64>().prop_map(EdmValue::Int64),
        double_strategy().prop_map(EdmValue::Double),
        datetime_strategy().prop_map(EdmValue::DateTime),
        any::<u128>().prop_map(|n| EdmValue::Guid(Uuid::from_u128(n))),
    ]
}

/// Strategy for properties: declared or natural kinds, and some nulls.
pub fn property_strategy() -> impl Strategy<Value = Property> {
    prop_oneof![
        4 => edm_value_strategy().prop_map(|v| Property::typed(v.edm_type(), v)),
        2 => edm_value_strategy().prop_map(Property::from_value),
        1 => prop::option::of(edm_value_strategy().prop_map(|v| v.edm_type()))
            .prop_map(Property::null),
    ]
}

/// Strategy for user property names.
///
/// Never produces a reserved name.
pub fn property_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,31}")
        .expect("Invalid regex")
        .prop_filter("Timestamp is reserved", |s| s != TIMESTAMP)
}

/// Strategy for entities with up to `max_properties` properties.
pub fn entity_strategy_with(max_properties: usize) -> impl Strategy<Value = Entity> {
    prop::collection::vec(
        (property_name_strategy(), property_strategy()),
        0..=max_properties,
    )
    .prop_map(|pairs| pairs.into_iter().collect::<Entity>())
}

/// Strategy for entities with up to 12 properties.
pub fn entity_strategy() -> impl Strategy<Value = Entity> {
    entity_strategy_with(12)
}

/// Strategy for valid table names.
pub fn table_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z][A-Za-z0-9]{2,62}").expect("Invalid regex")
}

/// Strategy for JSON scalars as the service might send them.
pub fn json_scalar_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|n| serde_json::Value::Number(n.into())),
        double_strategy()
            .prop_filter_map("JSON numbers are finite", serde_json::Number::from_f64)
            .prop_map(serde_json::Value::Number),
        any::<String>().prop_map(serde_json::Value::String),
    ]
}

/// Case counts for the codec property tests.
///
/// The default suits the round-trip laws; `quick` is for strategy
/// self-checks that only need a handful of samples.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Generated cases per property.
    pub cases: u32,
    /// Shrink steps allowed when a case fails.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Few cases, for checking the strategies themselves.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Builds the proptest runner configuration.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
