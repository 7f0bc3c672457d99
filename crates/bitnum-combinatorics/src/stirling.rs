//! Stirling numbers of the first and second kind.
//!
//! ```text
//! s(k, n) = -(n - 1) s(k, n - 1) + s(k - 1, n - 1)    1 <= k <= n
//! S(k, n) =       k  S(k, n - 1) + S(k - 1, n - 1)    1 <= k <= n
//! ```
//!
//! Both share the same boundary: zero for negative indices, for `k > n`,
//! and when exactly one index is zero; one on the diagonal.

use bitnum_integers::BigInt;
use num_traits::{One, Zero};

use crate::memo::{Memo, Recurrence};

/// Boundary values shared by both kinds, or `None` inside the triangle.
fn boundary(k: &BigInt, n: &BigInt) -> Option<BigInt> {
    if k.is_negative() || n.is_negative() || k.is_zero() != n.is_zero() || k > n {
        Some(BigInt::zero())
    } else if k == n {
        Some(BigInt::one())
    } else {
        None
    }
}

/// Memoized evaluator for signed Stirling numbers of the first kind.
#[derive(Clone, Debug, Default)]
pub struct StirlingFirst {
    memo: Memo,
}

impl StirlingFirst {
    /// Creates an evaluator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Recurrence for StirlingFirst {
    fn eval(&mut self, k: &BigInt, n: &BigInt) -> BigInt {
        if let Some(value) = boundary(k, n) {
            return value;
        }
        if let Some(value) = self.memo.get(k, n) {
            return value.clone();
        }

        let one = BigInt::one();
        let n_prev = n - &one;
        let value = -(&n_prev * &self.eval(k, &n_prev)) + self.eval(&(k - &one), &n_prev);
        self.memo.insert(k, n, value.clone());
        value
    }
}

/// Memoized evaluator for Stirling numbers of the second kind.
#[derive(Clone, Debug, Default)]
pub struct StirlingSecond {
    memo: Memo,
}

impl StirlingSecond {
    /// Creates an evaluator with an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Recurrence for StirlingSecond {
    fn eval(&mut self, k: &BigInt, n: &BigInt) -> BigInt {
        if let Some(value) = boundary(k, n) {
            return value;
        }
        if let Some(value) = self.memo.get(k, n) {
            return value.clone();
        }

        let one = BigInt::one();
        let n_prev = n - &one;
        let value = k * &self.eval(k, &n_prev) + self.eval(&(k - &one), &n_prev);
        self.memo.insert(k, n, value.clone());
        value
    }
}

/// Computes the signed Stirling number of the first kind `s(k, n)`.
#[must_use]
pub fn stirling_first(k: &BigInt, n: &BigInt) -> BigInt {
    StirlingFirst::new().eval(k, n)
}

/// Computes the Stirling number of the second kind `S(k, n)`, the number of
/// ways to split `n` labelled items into `k` non-empty blocks.
#[must_use]
pub fn stirling_second(k: &BigInt, n: &BigInt) -> BigInt {
    StirlingSecond::new().eval(k, n)
}
