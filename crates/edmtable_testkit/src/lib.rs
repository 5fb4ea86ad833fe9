//! # edmtable testkit
//!
//! Test utilities for the edmtable crates.
//!
//! This crate provides:
//! - Sample entities and service-shaped payloads
//! - Property-based test generators using proptest
//! - Shared decode test vectors
//! - Fuzz testing harnesses
//! - Tracing setup for test binaries
//!
//! ## Usage
//!
//! ```rust,ignore
//! use edmtable_testkit::prelude::*;
//!
//! proptest! {
//!     #[test]
//!     fn encodes(entity in entity_strategy()) {
//!         init_tracing();
//!         EntityCodec::new().encode_entity(&entity).unwrap();
//!     }
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod fuzz;
pub mod generators;
pub mod logging;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::fuzz::*;
    pub use crate::generators::*;
    pub use crate::logging::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use fuzz::*;
pub use generators::*;
pub use logging::*;
pub use vectors::*;
