//! Typed entity properties.

use crate::edm::EdmType;
use crate::value::EdmValue;

/// A single property value together with its declared kind.
///
/// The kind is optional: when it is `None` the value's natural kind is
/// used. A property without a value is null. Properties are immutable;
/// replace them on the owning [`crate::Entity`] to change a value.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    edm_type: Option<EdmType>,
    value: Option<EdmValue>,
}

impl Property {
    /// Creates a property from an optional kind and optional value.
    #[must_use]
    pub fn new(edm_type: Option<EdmType>, value: Option<EdmValue>) -> Self {
        Self { edm_type, value }
    }

    /// Creates a property with an explicit kind.
    #[must_use]
    pub fn typed(edm_type: EdmType, value: impl Into<EdmValue>) -> Self {
        Self::new(Some(edm_type), Some(value.into()))
    }

    /// Creates a property whose kind follows the value.
    #[must_use]
    pub fn from_value(value: impl Into<EdmValue>) -> Self {
        Self::new(None, Some(value.into()))
    }

    /// Creates a null property.
    #[must_use]
    pub fn null(edm_type: Option<EdmType>) -> Self {
        Self::new(edm_type, None)
    }

    /// Returns the declared kind, if any.
    #[must_use]
    pub fn edm_type(&self) -> Option<EdmType> {
        self.edm_type
    }

    /// Returns the value, or `None` when the property is null.
    #[must_use]
    pub fn value(&self) -> Option<&EdmValue> {
        self.value.as_ref()
    }

    /// Returns `true` if the property holds no value.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the declared kind, falling back to the value's natural kind.
    ///
    /// `None` only for an untyped null.
    #[must_use]
    pub fn resolved_type(&self) -> Option<EdmType> {
        self.edm_type
            .or_else(|| self.value.as_ref().map(EdmValue::edm_type))
    }

    /// Consumes the property, returning its value.
    #[must_use]
    pub fn into_value(self) -> Option<EdmValue> {
        self.value
    }
}

impl From<EdmValue> for Property {
    fn from(value: EdmValue) -> Self {
        Property::new(None, Some(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_type_prefers_declared() {
        let property = Property::typed(EdmType::Int64, 5i32);
        assert_eq!(property.edm_type(), Some(EdmType::Int64));
        assert_eq!(property.resolved_type(), Some(EdmType::Int64));
    }

    #[test]
    fn resolved_type_falls_back_to_value() {
        let property = Property::from_value(2.5f64);
        assert_eq!(property.edm_type(), None);
        assert_eq!(property.resolved_type(), Some(EdmType::Double));
    }

    #[test]
    fn null_properties() {
        let untyped = Property::null(None);
        assert!(untyped.is_null());
        assert_eq!(untyped.resolved_type(), None);

        let typed = Property::null(Some(EdmType::Guid));
        assert!(typed.is_null());
        assert_eq!(typed.resolved_type(), Some(EdmType::Guid));
    }

    #[test]
    fn from_native_value() {
        let property: Property = EdmValue::from("hello").into();
        assert_eq!(property.value(), Some(&EdmValue::String("hello".into())));
        assert_eq!(property.into_value(), Some(EdmValue::from("hello")));
    }
}
