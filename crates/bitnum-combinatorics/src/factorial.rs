//! Factorials.

use bitnum_integers::BigInt;
use num_traits::One;

/// Computes `n!`.
///
/// Follows `n! = n * (n - 1)!` down to one; every `n <= 1`, including
/// negative values, gives 1.
#[must_use]
pub fn factorial(n: &BigInt) -> BigInt {
    let one = BigInt::one();
    let mut result = BigInt::one();
    let mut factor = n.clone();
    while factor > one {
        result *= &factor;
        factor.decrement();
    }
    result
}

/// Iterator over `1!, 2!, 3!, ...`.
#[derive(Clone, Debug)]
pub struct Factorials {
    n: BigInt,
    current: BigInt,
}

impl Factorials {
    /// Starts the sequence at `1!`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            n: BigInt::one(),
            current: BigInt::one(),
        }
    }
}

impl Default for Factorials {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Factorials {
    type Item = BigInt;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.current.clone();
        self.n.increment();
        self.current *= &self.n;
        Some(value)
    }
}
