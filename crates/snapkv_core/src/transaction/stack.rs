//! Snapshot stack.

use crate::error::{CoreError, CoreResult};
use snapkv_store::Store;

/// LIFO history of store snapshots, one per open transaction.
///
/// The oldest snapshot sits at the bottom. Depth equals the number of open
/// transactions; an empty stack means no transaction is open. Once pushed, a
/// snapshot is never mutated, and once popped it is never seen again.
#[derive(Debug, Clone)]
pub struct SnapshotStack<V> {
    snapshots: Vec<Store<V>>,
}

impl<V> SnapshotStack<V> {
    /// Creates a new empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshots: Vec::new(),
        }
    }

    /// Creates a new empty stack with room for `capacity` nested transactions.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(capacity),
        }
    }

    /// Returns `true` if no transaction is open.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.snapshots.len()
    }

    /// Pushes `snapshot` as the new top of the stack.
    pub fn push(&mut self, snapshot: Store<V>) {
        self.snapshots.push(snapshot);
    }

    /// Returns the topmost snapshot without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Store<V>> {
        self.snapshots.last()
    }

    /// Removes and returns the topmost snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptySnapshotStack`] if no transaction is open.
    /// Callers are expected to check [`is_empty`](Self::is_empty) first.
    pub fn pop(&mut self) -> CoreResult<Store<V>> {
        self.snapshots.pop().ok_or(CoreError::EmptySnapshotStack)
    }
}

impl<V> Default for SnapshotStack<V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(key: &str, value: u32) -> Store<u32> {
        let mut store = Store::new();
        store.set(key, value);
        store
    }

    #[test]
    fn new_stack_is_empty() {
        let stack: SnapshotStack<u32> = SnapshotStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.depth(), 0);
        assert!(stack.peek().is_none());
    }

    #[test]
    fn push_increases_depth() {
        let mut stack = SnapshotStack::new();
        stack.push(store_with("a", 1));
        stack.push(store_with("a", 2));

        assert!(!stack.is_empty());
        assert_eq!(stack.depth(), 2);
    }

    #[test]
    fn pop_is_lifo() {
        let mut stack = SnapshotStack::new();
        stack.push(store_with("a", 1));
        stack.push(store_with("a", 2));

        assert_eq!(stack.pop().unwrap().get("a"), Some(&2));
        assert_eq!(stack.pop().unwrap().get("a"), Some(&1));
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = SnapshotStack::new();
        stack.push(store_with("a", 7));

        assert_eq!(stack.peek().unwrap().get("a"), Some(&7));
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn pop_empty_fails() {
        let mut stack: SnapshotStack<u32> = SnapshotStack::new();
        assert_eq!(stack.pop(), Err(CoreError::EmptySnapshotStack));
    }

    #[test]
    fn pop_after_drain_fails() {
        let mut stack = SnapshotStack::with_capacity(1);
        stack.push(store_with("a", 1));
        stack.pop().unwrap();

        assert!(matches!(stack.pop(), Err(CoreError::EmptySnapshotStack)));
    }
}
