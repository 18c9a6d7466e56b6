//! The transactional key-value interface.

/// An in-memory key-value store with nested transactions.
///
/// This is the complete externally visible contract: three point
/// operations on the current state and three transaction lifecycle
/// operations. Every method is total.
///
/// # Semantics
///
/// - Reads and writes always act on the live state.
/// - `start_transaction` captures a baseline without changing what reads see.
/// - `commit` accepts the live state and discards the newest baseline.
/// - `rollback` restores the newest baseline.
/// - `commit` and `rollback` with no open transaction do nothing.
///
/// The trait is object safe, so callers can hold a `Box<dyn KeyValueStore<V>>`.
pub trait KeyValueStore<V> {
    /// Returns the value bound to `key`, or `None` if unbound.
    fn get(&self, key: &str) -> Option<&V>;

    /// Binds `key` to `value`, overwriting any previous binding.
    fn set(&mut self, key: &str, value: V);

    /// Removes the binding for `key`; a no-op if `key` is unbound.
    fn delete(&mut self, key: &str);

    /// Opens a new (possibly nested) transaction.
    fn start_transaction(&mut self);

    /// Accepts every change made since the matching `start_transaction`.
    fn commit(&mut self);

    /// Discards every change made since the matching `start_transaction`.
    fn rollback(&mut self);
}
