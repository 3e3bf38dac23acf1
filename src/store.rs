//! Pluggable storage abstraction for memoized parse results.
//!
//! The evaluator never owns a cache. Each call site supplies its own store,
//! so independent caches (e.g. one per annotation kind) stay isolated and
//! lifecycle decisions (creation, clearing, bounding) remain with the caller.

use std::collections::HashMap;
use std::hash::Hash;

use crate::key::ExpressionKey;

/// Key-value store for parsed expressions.
///
/// Implementations choose their own backing and concurrency guarantees; the
/// evaluator performs a plain lookup-then-store sequence with no locking of
/// its own. The `&mut` receiver on [`put`](ExpressionStore::put) makes the
/// mutation hazard explicit: callers that share a store across threads wrap
/// it in whatever synchronization they prefer.
///
/// # Invariant
///
/// Within one store, at most one value is associated with a given key at any
/// time. [`put`](ExpressionStore::put) for an existing key overwrites, it
/// never appends.
pub trait ExpressionStore<E, X> {
    /// Get the value stored under `key`, if any.
    fn get(&self, key: &ExpressionKey<E>) -> Option<X>;

    /// Store `value` under `key`, replacing any existing entry.
    fn put(&mut self, key: ExpressionKey<E>, value: X);
}

/// Plain in-memory store for single-threaded call sites.
impl<E, X> ExpressionStore<E, X> for HashMap<ExpressionKey<E>, X>
where
    E: Eq + Hash,
    X: Clone,
{
    fn get(&self, key: &ExpressionKey<E>) -> Option<X> {
        HashMap::get(self, key).cloned()
    }

    fn put(&mut self, key: ExpressionKey<E>, value: X) {
        self.insert(key, value);
    }
}
