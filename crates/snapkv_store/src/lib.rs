//! # snapkv Store
//!
//! The live key-value mapping for snapkv.
//!
//! This crate provides the lowest-level state container. A [`Store`] maps
//! string keys to caller-supplied values and knows nothing about
//! transactions; snapshotting is just [`Clone`].
//!
//! ## Design Principles
//!
//! - Values are **opaque**: the store never inspects them
//! - All operations are total (a missing key is `None`, never an error)
//! - A clone is independent at the top-level mapping; each value is
//!   duplicated through its own `Clone` impl
//!
//! ## Example
//!
//! ```rust
//! use snapkv_store::Store;
//!
//! let mut store = Store::new();
//! store.set("hello", "world".to_string());
//!
//! let snapshot = store.clone();
//! store.delete("hello");
//!
//! assert_eq!(store.get("hello"), None);
//! assert_eq!(snapshot.get("hello").map(String::as_str), Some("world"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::{Key, Store};
