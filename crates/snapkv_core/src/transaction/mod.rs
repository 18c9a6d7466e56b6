//! Nested transactions as a stack of store snapshots.
//!
//! Each open transaction owns exactly one entry on the [`SnapshotStack`]: the
//! baseline store captured when it started. Committing discards the
//! baseline; rolling back restores it. Transactions nest strictly LIFO.

mod stack;

pub use stack::SnapshotStack;
