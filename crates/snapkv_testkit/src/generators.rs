//! Property-based test generators using proptest.
//!
//! Keys are drawn from a small alphabet so that random sequences collide on
//! the same keys often enough to exercise overwrite and delete paths.

use crate::ops::Op;
use proptest::prelude::*;
use snapkv_store::Store;

/// Strategy for keys from a deliberately small key space.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("k[0-5]").expect("Invalid regex")
}

/// Strategy for values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9]{0,6}").expect("Invalid regex")
}

/// Strategy for a single mutation (`Set` or `Delete`).
pub fn mutation_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (key_strategy(), value_strategy()).prop_map(|(k, v)| Op::set(k, v)),
        1 => key_strategy().prop_map(Op::delete),
    ]
}

/// Strategy for any op, transaction lifecycle included.
pub fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => mutation_strategy(),
        2 => key_strategy().prop_map(Op::get),
        1 => Just(Op::StartTransaction),
        1 => Just(Op::Commit),
        1 => Just(Op::Rollback),
    ]
}

/// Strategy for sequences of mutations only (no transaction ops).
pub fn mutations_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(mutation_strategy(), 0..max_len)
}

/// Strategy for arbitrary op sequences.
pub fn ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..max_len)
}

/// Strategy for op sequences whose transactions are balanced.
///
/// Every `StartTransaction` is matched by a later `Commit` or `Rollback`,
/// and no `Commit`/`Rollback` is issued at depth zero.
pub fn balanced_ops_strategy(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    ops_strategy(max_len).prop_map(|ops| {
        let mut depth = 0usize;
        let mut out = Vec::with_capacity(ops.len());
        for op in ops {
            match op {
                Op::StartTransaction => depth += 1,
                Op::Commit | Op::Rollback if depth == 0 => continue,
                Op::Commit | Op::Rollback => depth -= 1,
                _ => {}
            }
            out.push(op);
        }
        out.extend(std::iter::repeat(Op::Commit).take(depth));
        out
    })
}

/// Strategy for an initial store.
pub fn store_strategy() -> impl Strategy<Value = Store<String>> {
    prop::collection::hash_map(key_strategy(), value_strategy(), 0..6)
        .prop_map(|map| map.into_iter().collect())
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Creates a configuration for thorough tests.
    #[must_use]
    pub fn thorough() -> Self {
        Self {
            cases: 1024,
            max_shrink_iters: 10000,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
