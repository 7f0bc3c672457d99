//! Memoization for two-index recurrences.

use bitnum_integers::BigInt;
use rustc_hash::FxHashMap;

/// A recurrence in two integer indices `(k, n)`.
pub trait Recurrence {
    /// Evaluates the recurrence at `(k, n)`.
    fn eval(&mut self, k: &BigInt, n: &BigInt) -> BigInt;
}

/// Cache of already evaluated `(k, n)` pairs.
///
/// Entries are grouped by `k`, so lookups borrow both indices.
#[derive(Clone, Debug, Default)]
pub struct Memo {
    rows: FxHashMap<BigInt, FxHashMap<BigInt, BigInt>>,
    len: usize,
}

impl Memo {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value at `(k, n)`, if any.
    #[must_use]
    pub fn get(&self, k: &BigInt, n: &BigInt) -> Option<&BigInt> {
        self.rows.get(k)?.get(n)
    }

    /// Stores the value at `(k, n)`.
    pub fn insert(&mut self, k: &BigInt, n: &BigInt, value: BigInt) {
        let row = self.rows.entry(k.clone()).or_default();
        if row.insert(n.clone(), value).is_none() {
            self.len += 1;
        }
    }

    /// Returns the number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drops every cached entry.
    pub fn clear(&mut self) {
        self.rows.clear();
        self.len = 0;
    }
}
