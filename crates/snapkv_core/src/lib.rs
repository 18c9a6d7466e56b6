//! # snapkv Core
//!
//! In-memory key-value database with nested transactions.
//!
//! This crate provides:
//! - [`Database`], the facade over a live store and its snapshot stack
//! - [`SnapshotStack`], one baseline store per open transaction
//! - [`KeyValueStore`], the six-operation transactional interface
//! - [`Config`] and [`DatabaseStats`] for sizing and monitoring
//!
//! Everything is single-threaded and synchronous. A `Database` is an owned
//! value with no global state; wrap it in a mutex yourself if several
//! callers must share one.
//!
//! ## Example
//!
//! ```rust
//! use snapkv_core::Database;
//!
//! let mut db = Database::new();
//! db.set("k1", "v1".to_string());
//! db.start_transaction();
//! db.set("k1", "v2".to_string());
//! db.rollback();
//!
//! assert_eq!(db.get("k1").map(String::as_str), Some("v1"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod database;
mod error;
mod stats;
mod traits;
pub mod transaction;

pub use config::Config;
pub use database::Database;
pub use error::{CoreError, CoreResult};
pub use snapkv_store::{Key, Store};
pub use stats::{DatabaseStats, StatsSnapshot};
pub use traits::KeyValueStore;
pub use transaction::SnapshotStack;
