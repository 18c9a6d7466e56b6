//! Database statistics.
//!
//! Counters for monitoring how a database is being driven.
//!
//! # Usage
//!
//! ```rust
//! use snapkv_core::Database;
//!
//! let mut db: Database<String> = Database::new();
//! db.set("k1", "v1".to_string());
//! db.start_transaction();
//! db.rollback();
//!
//! let stats = db.stats();
//! assert_eq!(stats.writes, 1);
//! assert_eq!(stats.transactions_rolled_back, 1);
//! ```

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Database statistics and metrics.
///
/// Counters are atomic so that read paths taking `&self` can record
/// themselves. Values are monotonically increasing except `max_depth`,
/// which is a high-water mark.
#[derive(Debug, Default)]
pub struct DatabaseStats {
    // Operation counters
    /// Total number of `get` calls.
    reads: AtomicU64,
    /// `get` calls that found a value.
    hits: AtomicU64,
    /// Total number of `set` calls.
    writes: AtomicU64,
    /// Total number of `delete` calls.
    deletes: AtomicU64,

    // Transaction counters
    /// Transactions started.
    transactions_started: AtomicU64,
    /// Transactions committed.
    transactions_committed: AtomicU64,
    /// Transactions rolled back.
    transactions_rolled_back: AtomicU64,
    /// `commit` calls with no open transaction.
    empty_commits: AtomicU64,
    /// `rollback` calls with no open transaction.
    empty_rollbacks: AtomicU64,
    /// Deepest nesting seen.
    max_depth: AtomicU64,
}

impl DatabaseStats {
    /// Creates a new stats instance.
    pub fn new() -> Self {
        Self::default()
    }

    // === Increment methods (internal use) ===

    pub(crate) fn record_read(&self, hit: bool) {
        self.reads.fetch_add(1, Ordering::Relaxed);
        if hit {
            self.hits.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_write(&self) {
        self.writes.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_delete(&self) {
        self.deletes.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transaction start that reached `depth`.
    pub(crate) fn record_transaction_start(&self, depth: usize) {
        self.transactions_started.fetch_add(1, Ordering::Relaxed);
        self.max_depth.fetch_max(depth as u64, Ordering::Relaxed);
    }

    pub(crate) fn record_transaction_commit(&self) {
        self.transactions_committed.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_transaction_rollback(&self) {
        self.transactions_rolled_back.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_empty_commit(&self) {
        self.empty_commits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_empty_rollback(&self) {
        self.empty_rollbacks.fetch_add(1, Ordering::Relaxed);
    }

    // === Getter methods (public API) ===

    /// Returns the total number of reads.
    pub fn reads(&self) -> u64 {
        self.reads.load(Ordering::Relaxed)
    }

    /// Returns the number of reads that found a value.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the total number of writes.
    pub fn writes(&self) -> u64 {
        self.writes.load(Ordering::Relaxed)
    }

    /// Returns the total number of deletes.
    pub fn deletes(&self) -> u64 {
        self.deletes.load(Ordering::Relaxed)
    }

    /// Returns the number of transactions started.
    pub fn transactions_started(&self) -> u64 {
        self.transactions_started.load(Ordering::Relaxed)
    }

    /// Returns the number of transactions committed.
    pub fn transactions_committed(&self) -> u64 {
        self.transactions_committed.load(Ordering::Relaxed)
    }

    /// Returns the number of transactions rolled back.
    pub fn transactions_rolled_back(&self) -> u64 {
        self.transactions_rolled_back.load(Ordering::Relaxed)
    }

    /// Returns the number of `commit` calls made with no open transaction.
    pub fn empty_commits(&self) -> u64 {
        self.empty_commits.load(Ordering::Relaxed)
    }

    /// Returns the number of `rollback` calls made with no open transaction.
    pub fn empty_rollbacks(&self) -> u64 {
        self.empty_rollbacks.load(Ordering::Relaxed)
    }

    /// Returns the deepest transaction nesting reached.
    pub fn max_depth(&self) -> u64 {
        self.max_depth.load(Ordering::Relaxed)
    }

    /// Returns a snapshot of all stats.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            reads: self.reads(),
            hits: self.hits(),
            writes: self.writes(),
            deletes: self.deletes(),
            transactions_started: self.transactions_started(),
            transactions_committed: self.transactions_committed(),
            transactions_rolled_back: self.transactions_rolled_back(),
            empty_commits: self.empty_commits(),
            empty_rollbacks: self.empty_rollbacks(),
            max_depth: self.max_depth(),
        }
    }
}

/// A point-in-time snapshot of database statistics.
///
/// Unlike `DatabaseStats`, this is a plain struct that can be serialized,
/// compared, or passed across threads without atomics.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total number of reads.
    pub reads: u64,
    /// Reads that found a value.
    pub hits: u64,
    /// Total number of writes.
    pub writes: u64,
    /// Total number of deletes.
    pub deletes: u64,
    /// Transactions started.
    pub transactions_started: u64,
    /// Transactions committed.
    pub transactions_committed: u64,
    /// Transactions rolled back.
    pub transactions_rolled_back: u64,
    /// `commit` calls with no open transaction.
    pub empty_commits: u64,
    /// `rollback` calls with no open transaction.
    pub empty_rollbacks: u64,
    /// Deepest nesting reached.
    pub max_depth: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_stats_are_zero() {
        let stats = DatabaseStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn record_reads_tracks_hits() {
        let stats = DatabaseStats::new();

        stats.record_read(true);
        stats.record_read(false);
        stats.record_read(true);

        assert_eq!(stats.reads(), 3);
        assert_eq!(stats.hits(), 2);
    }

    #[test]
    fn record_transactions() {
        let stats = DatabaseStats::new();

        stats.record_transaction_start(1);
        stats.record_transaction_start(2);
        stats.record_transaction_commit();
        stats.record_transaction_rollback();
        stats.record_transaction_start(1);
        stats.record_empty_commit();
        stats.record_empty_rollback();

        assert_eq!(stats.transactions_started(), 3);
        assert_eq!(stats.transactions_committed(), 1);
        assert_eq!(stats.transactions_rolled_back(), 1);
        assert_eq!(stats.empty_commits(), 1);
        assert_eq!(stats.empty_rollbacks(), 1);
        assert_eq!(stats.max_depth(), 2);
    }

    #[test]
    fn snapshot_serializes() {
        let stats = DatabaseStats::new();
        stats.record_write();
        stats.record_delete();

        let json = serde_json::to_string(&stats.snapshot()).unwrap();
        let back: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.writes, 1);
        assert_eq!(back.deletes, 1);
    }
}
