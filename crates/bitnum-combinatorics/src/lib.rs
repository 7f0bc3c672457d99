//! # bitnum-combinatorics
//!
//! Combinatorial recurrences evaluated with [`bitnum_integers::BigInt`].
//!
//! This crate provides:
//! - Partition numbers `p(k, n)`
//! - Stirling numbers of the first (signed) and second kind
//! - Factorials
//! - Square tables of each, written as plain text
//!
//! Two-index recurrences are memoized, so filling an `m x m` table costs a
//! polynomial number of `BigInt` operations instead of an exponential one.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod factorial;
pub mod memo;
pub mod partition;
pub mod stirling;
pub mod table;

pub use error::TableError;
pub use factorial::{factorial, Factorials};
pub use memo::{Memo, Recurrence};
pub use partition::{partition, Partitions};
pub use stirling::{stirling_first, stirling_second, StirlingFirst, StirlingSecond};
pub use table::{write_all_tables, write_table, Table, TableKind};
