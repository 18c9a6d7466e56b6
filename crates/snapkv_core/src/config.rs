//! Database configuration.

/// Configuration for creating a database.
///
/// snapkv has no files or environment to configure; every field here is a
/// sizing hint or a behavioural toggle for the in-process instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Initial key capacity of the live store.
    pub store_capacity: usize,

    /// Initial capacity of the snapshot stack (expected nesting depth).
    pub stack_capacity: usize,

    /// Whether operation counters are recorded.
    pub track_stats: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_capacity: 0,
            stack_capacity: 0,
            track_stats: true,
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial key capacity of the live store.
    #[must_use]
    pub const fn store_capacity(mut self, capacity: usize) -> Self {
        self.store_capacity = capacity;
        self
    }

    /// Sets the initial capacity of the snapshot stack.
    #[must_use]
    pub const fn stack_capacity(mut self, capacity: usize) -> Self {
        self.stack_capacity = capacity;
        self
    }

    /// Sets whether operation counters are recorded.
    #[must_use]
    pub const fn track_stats(mut self, value: bool) -> Self {
        self.track_stats = value;
        self
    }
}
