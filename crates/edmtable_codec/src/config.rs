//! Codec configuration.

/// Field holding the records of a list envelope.
pub const DEFAULT_LIST_FIELD: &str = "value";

/// Field holding a table's name.
pub const DEFAULT_TABLE_NAME_FIELD: &str = "TableName";

/// Configuration shared by the table and entity codecs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Envelope field that holds the records of a list response.
    pub list_field: String,

    /// Field that holds the table name in table payloads.
    pub table_name_field: String,

    /// Whether a missing `odata.etag` is derived from `Timestamp`.
    pub derive_etag: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            list_field: DEFAULT_LIST_FIELD.to_string(),
            table_name_field: DEFAULT_TABLE_NAME_FIELD.to_string(),
            derive_etag: true,
        }
    }
}

impl CodecConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the list envelope field.
    #[must_use]
    pub fn list_field(mut self, field: impl Into<String>) -> Self {
        self.list_field = field.into();
        self
    }

    /// Sets the table name field.
    #[must_use]
    pub fn table_name_field(mut self, field: impl Into<String>) -> Self {
        self.table_name_field = field.into();
        self
    }

    /// Sets whether ETags are derived from timestamps.
    #[must_use]
    pub const fn derive_etag(mut self, value: bool) -> Self {
        self.derive_etag = value;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = CodecConfig::default();
        assert_eq!(config.list_field, "value");
        assert_eq!(config.table_name_field, "TableName");
        assert!(config.derive_etag);
    }

    #[test]
    fn builder() {
        let config = CodecConfig::new()
            .list_field("items")
            .table_name_field("name")
            .derive_etag(false);
        assert_eq!(config.list_field, "items");
        assert_eq!(config.table_name_field, "name");
        assert!(!config.derive_etag);
    }
}
