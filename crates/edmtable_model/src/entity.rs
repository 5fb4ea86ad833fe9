//! The entity property bag.

use chrono::{DateTime, Utc};

use crate::property::Property;
use crate::value::EdmValue;

/// Name of the partition key system property.
pub const PARTITION_KEY: &str = "PartitionKey";

/// Name of the row key system property.
pub const ROW_KEY: &str = "RowKey";

/// Name of the service-maintained timestamp property.
pub const TIMESTAMP: &str = "Timestamp";

/// A table row: an ordered set of uniquely named properties plus an ETag.
///
/// Properties keep the order in which they were first added. Adding a
/// property under an existing name replaces it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Entity {
    properties: Vec<(String, Property)>,
    etag: String,
}

impl Entity {
    /// Creates an empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an entity with its partition and row keys set.
    #[must_use]
    pub fn with_keys(partition_key: impl Into<String>, row_key: impl Into<String>) -> Self {
        let mut entity = Self::new();
        entity.set_partition_key(partition_key);
        entity.set_row_key(row_key);
        entity
    }

    /// Adds a property, returning the one it replaced.
    pub fn add_property(&mut self, name: impl Into<String>, property: Property) -> Option<Property> {
        let name = name.into();
        match self.position(&name) {
            Some(index) => Some(std::mem::replace(&mut self.properties[index].1, property)),
            None => {
                self.properties.push((name, property));
                None
            }
        }
    }

    /// Sets a property from a native value, keeping its natural kind.
    pub fn set_value(&mut self, name: impl Into<String>, value: impl Into<EdmValue>) {
        self.add_property(name, Property::from_value(value));
    }

    /// Removes a property by name.
    pub fn remove_property(&mut self, name: &str) -> Option<Property> {
        self.position(name)
            .map(|index| self.properties.remove(index).1)
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p)
    }

    /// Looks up a property value by name. Null properties yield `None`.
    #[must_use]
    pub fn value(&self, name: &str) -> Option<&EdmValue> {
        self.property(name).and_then(Property::value)
    }

    /// Returns `true` if a property with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Iterates over the properties in insertion order.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Property)> {
        self.properties.iter().map(|(n, p)| (n.as_str(), p))
    }

    /// Returns the number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns `true` if the entity has no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Returns the ETag. Empty until one is set.
    #[must_use]
    pub fn etag(&self) -> &str {
        &self.etag
    }

    /// Sets the ETag.
    pub fn set_etag(&mut self, etag: impl Into<String>) {
        self.etag = etag.into();
    }

    /// Returns the partition key, if set to a string.
    #[must_use]
    pub fn partition_key(&self) -> Option<&str> {
        self.value(PARTITION_KEY).and_then(EdmValue::as_str)
    }

    /// Sets the partition key.
    pub fn set_partition_key(&mut self, key: impl Into<String>) {
        self.set_value(PARTITION_KEY, key.into());
    }

    /// Returns the row key, if set to a string.
    #[must_use]
    pub fn row_key(&self) -> Option<&str> {
        self.value(ROW_KEY).and_then(EdmValue::as_str)
    }

    /// Sets the row key.
    pub fn set_row_key(&mut self, key: impl Into<String>) {
        self.set_value(ROW_KEY, key.into());
    }

    /// Returns the service timestamp, if present.
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.value(TIMESTAMP).and_then(EdmValue::as_datetime)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|(n, _)| n == name)
    }
}

impl<N: Into<String>> FromIterator<(N, Property)> for Entity {
    fn from_iter<I: IntoIterator<Item = (N, Property)>>(iter: I) -> Self {
        let mut entity = Entity::new();
        for (name, property) in iter {
            entity.add_property(name, property);
        }
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edm::EdmType;
    use chrono::TimeZone;

    #[test]
    fn properties_keep_insertion_order() {
        let mut entity = Entity::new();
        entity.set_value("b", 1);
        entity.set_value("a", 2);
        entity.set_value("c", 3);

        let names: Vec<&str> = entity.properties().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn add_replaces_in_place() {
        let mut entity = Entity::new();
        entity.set_value("a", 1);
        entity.set_value("b", 2);

        let previous = entity.add_property("a", Property::typed(EdmType::Int64, 10i64));
        assert_eq!(previous, Some(Property::from_value(1)));
        assert_eq!(entity.len(), 2);

        let (first, property) = entity.properties().next().unwrap();
        assert_eq!(first, "a");
        assert_eq!(property.value(), Some(&EdmValue::Int64(10)));
    }

    #[test]
    fn remove_property() {
        let mut entity = Entity::new();
        entity.set_value("a", "x");
        assert!(entity.contains("a"));
        assert_eq!(entity.remove_property("a"), Some(Property::from_value("x")));
        assert!(!entity.contains("a"));
        assert!(entity.is_empty());
        assert_eq!(entity.remove_property("a"), None);
    }

    #[test]
    fn null_property_has_no_value() {
        let mut entity = Entity::new();
        entity.add_property("n", Property::null(Some(EdmType::Int32)));
        assert!(entity.contains("n"));
        assert_eq!(entity.value("n"), None);
    }

    #[test]
    fn system_properties() {
        let mut entity = Entity::with_keys("pk", "rk");
        assert_eq!(entity.partition_key(), Some("pk"));
        assert_eq!(entity.row_key(), Some("rk"));
        assert_eq!(entity.timestamp(), None);

        let ts = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
        entity.set_value(TIMESTAMP, ts);
        assert_eq!(entity.timestamp(), Some(ts));
    }

    #[test]
    fn etag_defaults_to_empty() {
        let mut entity = Entity::new();
        assert_eq!(entity.etag(), "");
        entity.set_etag("W/\"1\"");
        assert_eq!(entity.etag(), "W/\"1\"");
    }

    #[test]
    fn collect_from_pairs() {
        let entity: Entity = vec![
            ("a", Property::from_value(1)),
            ("b", Property::from_value(true)),
            ("a", Property::from_value(2)),
        ]
        .into_iter()
        .collect();

        assert_eq!(entity.len(), 2);
        assert_eq!(entity.value("a"), Some(&EdmValue::Int32(2)));
    }
}
