//! Scenario vectors.
//!
//! Each vector is a fixed op sequence with the reads and final depth it must
//! produce. Vectors are plain data and serialize to JSON, so the same set can
//! drive any implementation of [`KeyValueStore`].

use crate::ops::{apply_all, Op};
use serde::{Deserialize, Serialize};
use snapkv_core::KeyValueStore;
use std::fmt;

/// A scenario that any implementation must reproduce exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioVector {
    /// Unique identifier for this vector.
    pub id: String,
    /// Human-readable description.
    pub description: String,
    /// Operations to apply, in order.
    pub ops: Vec<Op>,
    /// Result of every `Get` in `ops`, in order.
    pub expected_reads: Vec<Option<String>>,
    /// Open transactions after the last op.
    pub expected_depth: usize,
}

/// How a vector run diverged from its expectations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorMismatch {
    /// The failing vector.
    pub id: String,
    /// Reads actually observed.
    pub actual_reads: Vec<Option<String>>,
    /// Reads the vector expected.
    pub expected_reads: Vec<Option<String>>,
}

impl fmt::Display for VectorMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "vector {}: expected reads {:?}, got {:?}",
            self.id, self.expected_reads, self.actual_reads
        )
    }
}

impl std::error::Error for VectorMismatch {}

impl ScenarioVector {
    /// Replays this vector against `db` and compares the reads.
    ///
    /// Depth is not visible through [`KeyValueStore`]; callers that can
    /// observe it should also check [`expected_depth`](Self::expected_depth).
    pub fn run<D>(&self, db: &mut D) -> Result<(), VectorMismatch>
    where
        D: KeyValueStore<String> + ?Sized,
    {
        let actual_reads = apply_all(db, &self.ops);
        if actual_reads == self.expected_reads {
            Ok(())
        } else {
            Err(VectorMismatch {
                id: self.id.clone(),
                actual_reads,
                expected_reads: self.expected_reads.clone(),
            })
        }
    }
}

fn some(value: &str) -> Option<String> {
    Some(value.to_string())
}

/// The transaction scenarios every implementation must pass.
pub fn transaction_vectors() -> Vec<ScenarioVector> {
    vec![
        ScenarioVector {
            id: "commit_keeps_write".into(),
            description: "a committed overwrite is visible afterwards".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::StartTransaction,
                Op::set("key1", "value2"),
                Op::Commit,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value2")],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "rollback_restores_value".into(),
            description: "a rolled-back overwrite is undone".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::StartTransaction,
                Op::get("key1"),
                Op::set("key1", "value2"),
                Op::get("key1"),
                Op::Rollback,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value1"), some("value2"), some("value1")],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "nested_delete_commit".into(),
            description: "an inner committed delete leaves the key absent".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::StartTransaction,
                Op::set("key1", "value2"),
                Op::get("key1"),
                Op::StartTransaction,
                Op::get("key1"),
                Op::delete("key1"),
                Op::Commit,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value2"), some("value2"), None],
            expected_depth: 1,
        },
        ScenarioVector {
            id: "nested_delete_rollback".into(),
            description: "an inner rollback restores the outer transaction's write".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::StartTransaction,
                Op::set("key1", "value2"),
                Op::get("key1"),
                Op::StartTransaction,
                Op::get("key1"),
                Op::delete("key1"),
                Op::Rollback,
                Op::get("key1"),
                Op::Commit,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value2"), some("value2"), some("value2"), some("value2")],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "empty_stack_noops".into(),
            description: "commit and rollback with no transaction change nothing".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::Commit,
                Op::Rollback,
                Op::Rollback,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value1")],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "missing_key_absent".into(),
            description: "reading or deleting an unbound key is not an error".into(),
            ops: vec![Op::get("nope"), Op::delete("nope"), Op::get("nope")],
            expected_reads: vec![None, None],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "outer_rollback_undoes_inner_commit".into(),
            description: "an inner commit only hands its writes to the outer scope".into(),
            ops: vec![
                Op::StartTransaction,
                Op::StartTransaction,
                Op::set("key1", "inner"),
                Op::Commit,
                Op::get("key1"),
                Op::Rollback,
                Op::get("key1"),
            ],
            expected_reads: vec![some("inner"), None],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "rollback_restores_deleted_key".into(),
            description: "a key deleted inside a transaction returns on rollback".into(),
            ops: vec![
                Op::set("key1", "value1"),
                Op::set("key2", "value2"),
                Op::StartTransaction,
                Op::delete("key1"),
                Op::set("key3", "value3"),
                Op::Rollback,
                Op::get("key1"),
                Op::get("key2"),
                Op::get("key3"),
            ],
            expected_reads: vec![some("value1"), some("value2"), None],
            expected_depth: 0,
        },
        ScenarioVector {
            id: "open_transaction_left_open".into(),
            description: "an unfinished transaction still exposes its writes".into(),
            ops: vec![
                Op::StartTransaction,
                Op::set("key1", "value1"),
                Op::StartTransaction,
                Op::get("key1"),
            ],
            expected_reads: vec![some("value1")],
            expected_depth: 2,
        },
    ]
}

/// Serializes vectors to pretty JSON.
pub fn vectors_to_json(vectors: &[ScenarioVector]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(vectors)
}

/// Parses vectors from JSON.
pub fn vectors_from_json(json: &str) -> serde_json::Result<Vec<ScenarioVector>> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelDatabase;
    use snapkv_core::Database;

    #[test]
    fn vector_ids_are_unique() {
        let vectors = transaction_vectors();
        let mut ids: Vec<_> = vectors.iter().map(|v| v.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), vectors.len());
    }

    #[test]
    fn vectors_pass_against_database() {
        for vector in transaction_vectors() {
            let mut db: Database<String> = Database::new();
            vector.run(&mut db).unwrap();
            assert_eq!(db.depth(), vector.expected_depth, "vector {}", vector.id);
        }
    }

    #[test]
    fn vectors_pass_against_model() {
        for vector in transaction_vectors() {
            let mut model = ModelDatabase::new();
            vector.run(&mut model).unwrap();
            assert_eq!(model.depth(), vector.expected_depth, "vector {}", vector.id);
        }
    }

    #[test]
    fn mismatch_is_reported() {
        let vector = ScenarioVector {
            id: "wrong".into(),
            description: "expects a value that was never set".into(),
            ops: vec![Op::get("k")],
            expected_reads: vec![some("v")],
            expected_depth: 0,
        };

        let err = vector.run(&mut Database::<String>::new()).unwrap_err();
        assert_eq!(err.actual_reads, vec![None]);
        assert!(err.to_string().starts_with("vector wrong"));
    }

    #[test]
    fn vectors_survive_json() {
        let vectors = transaction_vectors();
        let json = vectors_to_json(&vectors).unwrap();
        assert_eq!(vectors_from_json(&json).unwrap(), vectors);
    }
}
