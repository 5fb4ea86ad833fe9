//! Error types for the codec crate.

use edmtable_model::{EdmType, ModelError};
use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during encoding or decoding.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The payload is not valid JSON or lacks an expected field.
    #[error("malformed payload: {message}")]
    MalformedPayload {
        /// Description of what was wrong.
        message: String,
    },

    /// An `@odata.type` annotation names a kind the codec does not know.
    #[error("unsupported EDM type `{type_name}`{}", describe(.property))]
    UnsupportedKind {
        /// The offending type name.
        type_name: String,
        /// Property the annotation belongs to, when known.
        property: Option<String>,
    },

    /// A value cannot be represented as its declared or inferred kind.
    #[error("cannot convert value to {edm_type}{}: {message}", describe(.property))]
    ValueConversion {
        /// Property being converted, when known.
        property: Option<String>,
        /// Target kind.
        edm_type: EdmType,
        /// Description of the conversion failure.
        message: String,
    },
}

fn describe(property: &Option<String>) -> String {
    match property {
        Some(name) => format!(" for property `{name}`"),
        None => String::new(),
    }
}

impl CodecError {
    /// Create a malformed payload error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create an unsupported kind error.
    pub fn unsupported_kind(type_name: impl Into<String>) -> Self {
        Self::UnsupportedKind {
            type_name: type_name.into(),
            property: None,
        }
    }

    /// Create a value conversion error.
    pub fn value_conversion(edm_type: EdmType, message: impl Into<String>) -> Self {
        Self::ValueConversion {
            property: None,
            edm_type,
            message: message.into(),
        }
    }

    /// Attaches the property name, unless one is already recorded.
    #[must_use]
    pub fn with_property(mut self, name: &str) -> Self {
        match &mut self {
            Self::UnsupportedKind { property, .. } | Self::ValueConversion { property, .. } => {
                if property.is_none() {
                    *property = Some(name.to_string());
                }
            }
            Self::MalformedPayload { .. } => {}
        }
        self
    }

    /// Returns the property this error refers to, if any.
    pub fn property(&self) -> Option<&str> {
        match self {
            Self::UnsupportedKind { property, .. } | Self::ValueConversion { property, .. } => {
                property.as_deref()
            }
            Self::MalformedPayload { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(err.to_string())
    }
}

impl From<ModelError> for CodecError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownType { type_name } => Self::unsupported_kind(type_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_property_sets_context_once() {
        let err = CodecError::unsupported_kind("Edm.Decimal")
            .with_property("Price")
            .with_property("Other");
        assert_eq!(err.property(), Some("Price"));
        assert_eq!(
            err.to_string(),
            "unsupported EDM type `Edm.Decimal` for property `Price`"
        );
    }

    #[test]
    fn malformed_ignores_property() {
        let err = CodecError::malformed("missing field").with_property("X");
        assert_eq!(err.property(), None);
        assert_eq!(err.to_string(), "malformed payload: missing field");
    }

    #[test]
    fn conversion_message() {
        let err = CodecError::value_conversion(EdmType::Int32, "invalid digit").with_property("Age");
        assert_eq!(
            err.to_string(),
            "cannot convert value to Edm.Int32 for property `Age`: invalid digit"
        );
    }

    #[test]
    fn model_error_maps_to_unsupported_kind() {
        let err: CodecError = ModelError::unknown_type("Edm.Single").into();
        assert_eq!(err, CodecError::unsupported_kind("Edm.Single"));
    }
}
