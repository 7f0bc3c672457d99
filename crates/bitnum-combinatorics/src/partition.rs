//! Partition numbers.
//!
//! `p(k, n)` counts the partitions of `n` into parts no larger than `k`:
//!
//! ```text
//! p(k, n) = p(k, n - k) + p(k - 1, n)    1 <= k <= n
//! ```

use bitnum_integers::BigInt;
use num_traits::{One, Zero};

use crate::memo::{Memo, Recurrence};

/// Memoized evaluator for `p(k, n)`.
#[derive(Clone, Debug, Default)]
pub struct Partitions {
    memo: Memo,
}

impl Partitions {
    /// Creates an evaluator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Recurrence for Partitions {
    fn eval(&mut self, k: &BigInt, n: &BigInt) -> BigInt {
        if k.is_negative() || n.is_negative() {
            return BigInt::zero();
        }
        if k.is_zero() && !n.is_zero() {
            return BigInt::zero();
        }
        if n.is_zero() {
            return BigInt::one();
        }
        if k > n {
            return self.eval(n, n);
        }
        if let Some(value) = self.memo.get(k, n) {
            return value.clone();
        }

        let value = self.eval(k, &(n - k)) + self.eval(&(k - &BigInt::one()), n);
        self.memo.insert(k, n, value.clone());
        value
    }
}

/// Computes `p(k, n)`, the number of partitions of `n` into parts of size
/// at most `k`.
///
/// Negative indices give zero, `p(0, n) = 0` for `n > 0`, and
/// `p(k, 0) = 1` for `k >= 0`.
#[must_use]
pub fn partition(k: &BigInt, n: &BigInt) -> BigInt {
    Partitions::new().eval(k, n)
}
