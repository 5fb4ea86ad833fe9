//! # edmtable model
//!
//! In-memory model of a table storage row.
//!
//! This crate provides:
//! - `EdmType`, the closed set of Entity Data Model kinds a property may carry
//! - `EdmValue`, the native representation of a value of each kind
//! - `Property`, an immutable (kind, value) pair
//! - `Entity`, an ordered property bag with an ETag
//!
//! It performs no encoding; see `edmtable_codec` for the wire format.
//!
//! ## Usage
//!
//! ```
//! use edmtable_model::{EdmType, EdmValue, Entity, Property};
//!
//! let mut entity = Entity::with_keys("customers", "0001");
//! entity.add_property("Age", Property::from_value(42));
//! entity.add_property("Visits", Property::typed(EdmType::Int64, 7i64));
//!
//! assert_eq!(entity.partition_key(), Some("customers"));
//! assert_eq!(entity.value("Age"), Some(&EdmValue::Int32(42)));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod edm;
mod entity;
mod error;
mod property;
mod value;

pub use edm::EdmType;
pub use entity::{Entity, PARTITION_KEY, ROW_KEY, TIMESTAMP};
pub use error::{ModelError, ModelResult};
pub use property::Property;
pub use value::EdmValue;
