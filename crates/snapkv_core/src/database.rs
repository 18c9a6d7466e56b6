//! Database facade.

use crate::config::Config;
use crate::stats::{DatabaseStats, StatsSnapshot};
use crate::traits::KeyValueStore;
use crate::transaction::SnapshotStack;
use snapkv_store::{Key, Store};
use tracing::{debug, error, trace, warn};

/// The main database handle.
///
/// `Database` composes the live [`Store`] and the [`SnapshotStack`] into
/// the transactional API. Each instance owns its own state; any number of
/// independent databases can coexist.
///
/// # Transactions
///
/// Reads and writes always act on the live store. Starting a transaction
/// pushes a copy of the live store as that transaction's baseline.
/// Committing drops the baseline, so the live store (which already holds the
/// transaction's writes) becomes the accepted state of the enclosing scope.
/// Rolling back replaces the live store with the baseline.
///
/// ```rust
/// use snapkv_core::Database;
///
/// let mut db = Database::new();
/// db.set("k1", "v1");
///
/// db.start_transaction();
/// db.set("k1", "v2");
/// db.start_transaction();
/// db.delete("k1");
/// db.rollback();
///
/// assert_eq!(db.get("k1"), Some(&"v2"));
///
/// db.commit();
/// assert_eq!(db.get("k1"), Some(&"v2"));
/// assert_eq!(db.depth(), 0);
/// ```
///
/// # Value isolation
///
/// Baselines are taken with `V::clone`. For owned values this is a full
/// copy. For shared handles such as `Arc<T>` only the handle is copied, so
/// values behind a shared handle must not be mutated in place after `set`.
#[derive(Debug)]
pub struct Database<V> {
    /// Configuration.
    config: Config,
    /// Live state.
    store: Store<V>,
    /// One baseline per open transaction.
    transactions: SnapshotStack<V>,
    /// Operation counters.
    stats: DatabaseStats,
}

impl<V> Database<V> {
    /// Creates an empty database with no open transactions.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Creates an empty database with custom configuration.
    ///
    /// ```rust
    /// use snapkv_core::{Config, Database};
    ///
    /// let db: Database<Vec<u8>> =
    ///     Database::with_config(Config::new().store_capacity(1024).stack_capacity(8));
    /// assert!(db.is_empty());
    /// ```
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            store: Store::with_capacity(config.store_capacity),
            transactions: SnapshotStack::with_capacity(config.stack_capacity),
            stats: DatabaseStats::new(),
            config,
        }
    }

    /// Returns the value bound to `key`, or `None` if unbound.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        let value = self.store.get(key);
        if self.config.track_stats {
            self.stats.record_read(value.is_some());
        }
        value
    }

    /// Binds `key` to `value` in the live store.
    pub fn set(&mut self, key: impl Into<Key>, value: V) {
        let key = key.into();
        trace!(key = %key, depth = self.depth(), "set");
        self.store.set(key, value);
        if self.config.track_stats {
            self.stats.record_write();
        }
    }

    /// Removes the binding for `key`; deleting an unbound key does nothing.
    pub fn delete(&mut self, key: &str) {
        let removed = self.store.delete(key).is_some();
        trace!(key, removed, depth = self.depth(), "delete");
        if self.config.track_stats {
            self.stats.record_delete();
        }
    }

    /// Commits the innermost open transaction.
    ///
    /// The baseline is discarded without being applied. With no open
    /// transaction this is a no-op.
    pub fn commit(&mut self) {
        if self.transactions.is_empty() {
            debug!("commit with no open transaction");
            if self.config.track_stats {
                self.stats.record_empty_commit();
            }
            return;
        }

        match self.transactions.pop() {
            Ok(_baseline) => {
                debug!(depth = self.depth(), keys = self.store.len(), "committed transaction");
                if self.config.track_stats {
                    self.stats.record_transaction_commit();
                }
            }
            Err(err) => error!(%err, "commit lost its snapshot"),
        }
    }

    /// Rolls back the innermost open transaction.
    ///
    /// The live store is replaced with the baseline captured by the matching
    /// `start_transaction`. With no open transaction this is a no-op.
    pub fn rollback(&mut self) {
        if self.transactions.is_empty() {
            debug!("rollback with no open transaction");
            if self.config.track_stats {
                self.stats.record_empty_rollback();
            }
            return;
        }

        match self.transactions.pop() {
            Ok(baseline) => {
                self.store = baseline;
                debug!(depth = self.depth(), keys = self.store.len(), "rolled back transaction");
                if self.config.track_stats {
                    self.stats.record_transaction_rollback();
                }
            }
            Err(err) => error!(%err, "rollback lost its snapshot"),
        }
    }

    /// Returns `true` if `key` is bound in the live store.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.store.contains_key(key)
    }

    /// Returns the number of keys in the live store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the live store holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.transactions.depth()
    }

    /// Returns `true` if at least one transaction is open.
    #[must_use]
    pub fn in_transaction(&self) -> bool {
        !self.transactions.is_empty()
    }

    /// Returns a read-only view of the live store.
    #[must_use]
    pub fn store(&self) -> &Store<V> {
        &self.store
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns a point-in-time copy of the operation counters.
    #[must_use]
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Commits or rolls back until exactly `depth` transactions remain open.
    fn unwind_to(&mut self, depth: usize, commit: bool) {
        while self.depth() > depth {
            if commit {
                self.commit();
            } else {
                self.rollback();
            }
        }
    }
}

impl<V: Clone> Database<V> {
    /// Opens a new transaction, nested inside any already open.
    ///
    /// Pushes a copy of the live store as the new baseline. What `get`
    /// returns is unchanged.
    pub fn start_transaction(&mut self) {
        self.transactions.push(self.store.snapshot());
        debug!(depth = self.depth(), keys = self.store.len(), "started transaction");
        if self.config.track_stats {
            self.stats.record_transaction_start(self.depth());
        }
    }

    /// Runs `f` inside a new transaction.
    ///
    /// The transaction is committed if `f` returns `Ok` and rolled back if
    /// it returns `Err`. Transactions that `f` opened but left open are
    /// resolved the same way, so on return the depth is what it was before
    /// the call (or lower, if `f` closed enclosing transactions itself).
    ///
    /// ```rust
    /// use snapkv_core::Database;
    ///
    /// let mut db = Database::new();
    /// db.set("balance", 10);
    ///
    /// let result: Result<(), &str> = db.transaction(|db| {
    ///     db.set("balance", 0);
    ///     Err("insufficient funds")
    /// });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(db.get("balance"), Some(&10));
    /// ```
    pub fn transaction<F, T, E>(&mut self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        let outer = self.depth();
        self.start_transaction();

        let result = f(self);

        if self.depth() > outer + 1 {
            warn!(
                leaked = self.depth() - outer - 1,
                "closure left nested transactions open"
            );
        }
        self.unwind_to(outer, result.is_ok());
        result
    }
}

impl<V> Default for Database<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone> KeyValueStore<V> for Database<V> {
    fn get(&self, key: &str) -> Option<&V> {
        Database::get(self, key)
    }

    fn set(&mut self, key: &str, value: V) {
        Database::set(self, key, value);
    }

    fn delete(&mut self, key: &str) {
        Database::delete(self, key);
    }

    fn start_transaction(&mut self) {
        Database::start_transaction(self);
    }

    fn commit(&mut self) {
        Database::commit(self);
    }

    fn rollback(&mut self) {
        Database::rollback(self);
    }
}
