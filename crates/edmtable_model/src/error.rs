//! Error types for the model crate.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors that can occur while building model values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// The type name is not one of the known `Edm.*` kinds.
    #[error("unknown EDM type: {type_name}")]
    UnknownType {
        /// The name that failed to parse.
        type_name: String,
    },
}

impl ModelError {
    /// Create an unknown type error.
    pub fn unknown_type(type_name: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
        }
    }
}
