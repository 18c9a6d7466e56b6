//! # snapkv Testkit
//!
//! Test utilities for snapkv.
//!
//! This crate provides:
//! - Test fixtures and database helpers
//! - Serializable [`Op`] sequences for driving any [`snapkv_core::KeyValueStore`]
//! - Property-based test generators using proptest
//! - An undo-log reference model for differential testing
//! - Scenario vectors with expected reads
//!
//! ## Usage
//!
//! ```rust
//! use snapkv_testkit::prelude::*;
//!
//! for vector in transaction_vectors() {
//!     let mut db = snapkv_core::Database::<String>::new();
//!     vector.run(&mut db).unwrap();
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;
pub mod ops;
pub mod vectors;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::ops::*;
    pub use crate::vectors::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
pub use ops::*;
pub use vectors::*;
