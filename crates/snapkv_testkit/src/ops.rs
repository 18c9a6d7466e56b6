//! Serializable database operations.
//!
//! An [`Op`] is one call on the [`KeyValueStore`] interface. Sequences of
//! ops drive property tests, model comparison, and scenario vectors.

use serde::{Deserialize, Serialize};
use snapkv_core::KeyValueStore;

/// A single call on a [`KeyValueStore`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// Read a key.
    Get {
        /// Key to read.
        key: String,
    },
    /// Bind a key.
    Set {
        /// Key to bind.
        key: String,
        /// Value to bind.
        value: String,
    },
    /// Unbind a key.
    Delete {
        /// Key to unbind.
        key: String,
    },
    /// Open a transaction.
    StartTransaction,
    /// Commit the innermost transaction.
    Commit,
    /// Roll back the innermost transaction.
    Rollback,
}

impl Op {
    /// Shorthand for [`Op::Get`].
    pub fn get(key: impl Into<String>) -> Self {
        Self::Get { key: key.into() }
    }

    /// Shorthand for [`Op::Set`].
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Set {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Shorthand for [`Op::Delete`].
    pub fn delete(key: impl Into<String>) -> Self {
        Self::Delete { key: key.into() }
    }

    /// Returns `true` for `Set` and `Delete`.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        matches!(self, Self::Set { .. } | Self::Delete { .. })
    }

    /// Applies this op to `db`.
    ///
    /// Returns the value read for `Get` (cloned), and `None` for every other op.
    pub fn apply<D>(&self, db: &mut D) -> Option<String>
    where
        D: KeyValueStore<String> + ?Sized,
    {
        match self {
            Self::Get { key } => db.get(key).cloned(),
            Self::Set { key, value } => {
                db.set(key, value.clone());
                None
            }
            Self::Delete { key } => {
                db.delete(key);
                None
            }
            Self::StartTransaction => {
                db.start_transaction();
                None
            }
            Self::Commit => {
                db.commit();
                None
            }
            Self::Rollback => {
                db.rollback();
                None
            }
        }
    }
}

/// Applies every op in order and collects the results of each `Get`.
pub fn apply_all<D>(db: &mut D, ops: &[Op]) -> Vec<Option<String>>
where
    D: KeyValueStore<String> + ?Sized,
{
    ops.iter()
        .filter_map(|op| {
            let read = op.apply(db);
            matches!(op, Op::Get { .. }).then_some(read)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapkv_core::Database;

    #[test]
    fn apply_all_collects_reads() {
        let mut db: Database<String> = Database::new();
        let reads = apply_all(
            &mut db,
            &[
                Op::get("k"),
                Op::set("k", "v"),
                Op::get("k"),
                Op::StartTransaction,
                Op::delete("k"),
                Op::get("k"),
                Op::Rollback,
                Op::get("k"),
            ],
        );

        assert_eq!(
            reads,
            vec![None, Some("v".into()), None, Some("v".into())]
        );
    }

    #[test]
    fn op_json_shape() {
        let json = serde_json::to_string(&Op::set("k1", "v1")).unwrap();
        assert_eq!(json, r#"{"op":"set","key":"k1","value":"v1"}"#);

        let op: Op = serde_json::from_str(r#"{"op":"start_transaction"}"#).unwrap();
        assert_eq!(op, Op::StartTransaction);
    }
}
