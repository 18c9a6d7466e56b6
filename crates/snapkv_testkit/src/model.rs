//! Reference model for differential testing.
//!
//! [`ModelDatabase`] implements the same contract as
//! [`snapkv_core::Database`] with a different mechanism: instead of
//! snapshotting the whole store, each open transaction keeps an undo log of
//! the prior binding of every key it touched. Agreement between the two on
//! random op sequences is strong evidence both are right.

use snapkv_core::KeyValueStore;
use std::collections::{BTreeMap, HashMap};

/// Prior bindings of the keys touched by one transaction.
type UndoLog = HashMap<String, Option<String>>;

/// Undo-log implementation of the transactional key-value contract.
#[derive(Debug, Clone, Default)]
pub struct ModelDatabase {
    data: BTreeMap<String, String>,
    undo: Vec<UndoLog>,
}

impl ModelDatabase {
    /// Creates an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of open transactions.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.undo.len()
    }

    /// Returns the current contents, ordered by key.
    #[must_use]
    pub fn contents(&self) -> &BTreeMap<String, String> {
        &self.data
    }

    fn remember(&mut self, key: &str) {
        let prior = self.data.get(key).cloned();
        if let Some(log) = self.undo.last_mut() {
            // Only the first touch records the baseline binding.
            log.entry(key.to_string()).or_insert(prior);
        }
    }
}

impl KeyValueStore<String> for ModelDatabase {
    fn get(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        self.remember(key);
        self.data.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.remember(key);
        self.data.remove(key);
    }

    fn start_transaction(&mut self) {
        self.undo.push(UndoLog::new());
    }

    fn commit(&mut self) {
        let Some(log) = self.undo.pop() else {
            return;
        };
        // The enclosing transaction inherits baselines it has not seen yet.
        if let Some(parent) = self.undo.last_mut() {
            for (key, prior) in log {
                parent.entry(key).or_insert(prior);
            }
        }
    }

    fn rollback(&mut self) {
        let Some(log) = self.undo.pop() else {
            return;
        };
        for (key, prior) in log {
            match prior {
                Some(value) => {
                    self.data.insert(key, value);
                }
                None => {
                    self.data.remove(&key);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_rollback_restores_deleted_and_added_keys() {
        let mut model = ModelDatabase::new();
        model.set("a", "1".into());
        model.start_transaction();
        model.delete("a");
        model.set("b", "2".into());
        model.set("b", "3".into());
        model.rollback();

        assert_eq!(model.get("a").map(String::as_str), Some("1"));
        assert_eq!(model.get("b"), None);
    }

    #[test]
    fn model_commit_hands_baseline_to_parent() {
        let mut model = ModelDatabase::new();
        model.set("a", "1".into());
        model.start_transaction();
        model.start_transaction();
        model.set("a", "2".into());
        model.commit();
        model.rollback();

        assert_eq!(model.get("a").map(String::as_str), Some("1"));
        assert_eq!(model.depth(), 0);
    }

    #[test]
    fn model_empty_commit_and_rollback_are_noops() {
        let mut model = ModelDatabase::new();
        model.set("a", "1".into());
        model.commit();
        model.rollback();

        assert_eq!(model.contents().len(), 1);
    }
}
