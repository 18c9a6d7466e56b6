//! Test fixtures and database helpers.

use snapkv_core::Database;
use std::collections::BTreeMap;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly tracing subscriber.
///
/// Honors `RUST_LOG` and writes through the test harness so output is only
/// shown for failing tests. Safe to call from every test; only the first
/// call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Creates a database pre-populated with `pairs` and no open transactions.
pub fn seeded_db<K, V, I>(pairs: I) -> Database<String>
where
    K: Into<String>,
    V: Into<String>,
    I: IntoIterator<Item = (K, V)>,
{
    let mut db: Database<String> = Database::new();
    for (key, value) in pairs {
        db.set(key, value.into());
    }
    db
}

/// Returns the live contents of `db`, ordered by key.
///
/// Ordered maps give readable assertion diffs.
pub fn contents(db: &Database<String>) -> BTreeMap<String, String> {
    db.store()
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Runs a test with a fresh, empty database.
///
/// # Example
///
/// ```rust
/// use snapkv_testkit::with_db;
///
/// with_db(|db| {
///     db.set("k", "v".to_string());
///     assert_eq!(db.len(), 1);
/// });
/// ```
pub fn with_db<F, R>(f: F) -> R
where
    F: FnOnce(&mut Database<String>) -> R,
{
    init_tracing();
    let mut db: Database<String> = Database::new();
    f(&mut db)
}

/// Test scenario helpers.
pub mod scenarios {
    use super::*;

    /// Creates a database with `count` keys `key0..key{count}`.
    pub fn populated_database(count: usize) -> Database<String> {
        seeded_db((0..count).map(|i| (format!("key{i}"), format!("value{i}"))))
    }

    /// Creates a populated database with `depth` nested transactions open,
    /// each having overwritten `key0` with its own level number.
    pub fn nested_database(depth: usize) -> Database<String> {
        let mut db = populated_database(4);
        for level in 1..=depth {
            db.start_transaction();
            db.set("key0", format!("level{level}"));
        }
        db
    }
}
