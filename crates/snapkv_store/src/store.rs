//! The live key-value store.

use std::collections::hash_map::{self, HashMap};
use std::fmt;

/// Key type for all snapkv stores.
pub type Key = String;

/// An associative mapping from string keys to opaque values.
///
/// `Store` is the single source of truth for current state. It is fully
/// owned by whoever holds it; there is no interior mutability and no
/// sharing between instances.
///
/// # Cloning
///
/// [`Clone`] produces an independent copy: later `set`/`delete` calls on
/// either the original or the clone are invisible to the other. Each value is
/// duplicated with `V::clone`, so owned values (`String`, `Vec<u8>`, plain
/// structs) are copied structurally while shared handles (`Arc<T>`,
/// `Rc<RefCell<T>>`) only copy the handle. Values stored behind a shared
/// handle must be treated as immutable once set.
///
/// # Example
///
/// ```rust
/// use snapkv_store::Store;
///
/// let mut store: Store<u32> = Store::new();
/// assert_eq!(store.set("a", 1), None);
/// assert_eq!(store.set("a", 2), Some(1));
/// assert_eq!(store.get("a"), Some(&2));
/// assert_eq!(store.delete("a"), Some(2));
/// assert!(store.is_empty());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Store<V> {
    entries: HashMap<Key, V>,
}

impl<V> Store<V> {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Creates a new empty store able to hold `capacity` keys without
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the value bound to `key`, or `None` if the key is unbound.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(key)
    }

    /// Binds `key` to `value`, overwriting any previous binding.
    ///
    /// Returns the previously bound value, if any.
    pub fn set(&mut self, key: impl Into<Key>, value: V) -> Option<V> {
        self.entries.insert(key.into(), value)
    }

    /// Removes the binding for `key`.
    ///
    /// Deleting an unbound key is a no-op and returns `None`.
    pub fn delete(&mut self, key: &str) -> Option<V> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is bound.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no keys are bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the bound keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterates over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes every binding.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<V: Clone> Store<V> {
    /// Returns an independent point-in-time copy of this store.
    ///
    /// Equivalent to [`Clone::clone`]; named for call sites that take a
    /// transaction baseline.
    #[must_use]
    pub fn snapshot(&self) -> Self {
        self.clone()
    }
}

impl<V> Default for Store<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for Store<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K: Into<Key>, V> FromIterator<(K, V)> for Store<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<Key>, V> Extend<(K, V)> for Store<V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.entries
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl<V> IntoIterator for Store<V> {
    type Item = (Key, V);
    type IntoIter = hash_map::IntoIter<Key, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
