//! # bitnum-integers
//!
//! Arbitrary precision signed integers for bitnum.
//!
//! This crate provides:
//! - `BigInt`, a sign/magnitude integer backed by a bit vector
//! - Arithmetic, comparison, bitwise and shift operators
//! - Base-10 and base-2 rendering and parsing
//!
//! ## Representation Notes
//!
//! - The magnitude is stored least significant bit first, so shifts and
//!   normalization only touch one end of the vector
//! - Values are always canonical: no leading zero bits, no negative zero
//! - Bitwise operators act on the magnitude only (see [`BigInt`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adder;
pub mod error;
pub mod integer;
mod ops;
mod radix;

#[cfg(test)]
mod proptests;

pub use error::{BigIntError, ParseBigIntError};
pub use integer::BigInt;
