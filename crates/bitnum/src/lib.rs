//! # bitnum
//!
//! Arbitrary precision integers built on a plain bit vector, and the
//! combinatorial tables that exercise them.
//!
//! ## Features
//!
//! - **Sign/Magnitude Integers**: `BigInt` with no size limit
//! - **Full Operator Set**: arithmetic, ordering, bitwise and shifts
//! - **Exact Rendering**: decimal and binary text for any size
//! - **Recurrences**: partition numbers, Stirling numbers, factorials
//!
//! ## Quick Start
//!
//! ```rust
//! use bitnum::prelude::*;
//!
//! let a = BigInt::from(i32::MAX);
//! let b = &a + &BigInt::from(1);
//! assert_eq!(b.to_string(), "2147483648");
//!
//! let p = partition(&BigInt::from(2), &BigInt::from(4));
//! assert_eq!(p, BigInt::from(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use bitnum_combinatorics as combinatorics;
pub use bitnum_integers as integers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bitnum_combinatorics::{
        factorial, partition, stirling_first, stirling_second, Recurrence, Table, TableKind,
    };
    pub use bitnum_integers::{BigInt, BigIntError, ParseBigIntError};
}
