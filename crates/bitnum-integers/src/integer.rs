//! Arbitrary precision integers stored as bit vectors.
//!
//! A `BigInt` is a sign flag plus a magnitude held in a packed `BitVec`.
//! Every value is kept in canonical form: no leading zero bits and no
//! negative zero, so structural equality is value equality.

use bit_vec::BitVec;
use num_traits::{One, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::iter::{Product, Sum};

use crate::adder::{self, cmp_magnitude};
use crate::error::BigIntError;
use crate::radix;

/// An arbitrary precision signed integer.
///
/// Arithmetic works on the sign and magnitude directly; addition of mixed
/// signs goes through a temporary two's-complement form internally.
///
/// The bitwise operators (`&`, `|`, `^`) act on the stored magnitude only
/// and keep the sign of the left operand. They do not follow the
/// two's-complement semantics of the native integer types for negative
/// values: `BigInt::from(-6) & BigInt::from(3)` is `-2`, not `2`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    /// Magnitude, least significant bit first.
    bits: BitVec,
    negative: bool,
}

impl BigInt {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self::from(value)
    }

    /// Builds a value from a native magnitude by repeated division by two.
    fn from_unsigned(mut magnitude: u128, negative: bool) -> Self {
        let mut bits = BitVec::with_capacity(128 - magnitude.leading_zeros() as usize);
        while magnitude > 0 {
            bits.push(magnitude % 2 == 1);
            magnitude /= 2;
        }
        Self::from_parts(bits, negative)
    }

    /// Builds a normalized value from an LSB-first magnitude.
    pub(crate) fn from_parts(bits: BitVec, negative: bool) -> Self {
        let mut value = Self { bits, negative };
        value.normalize();
        value
    }

    /// Strips leading zero bits and clears the sign of zero.
    fn normalize(&mut self) {
        match self.bits.iter().rposition(|bit| bit) {
            Some(top) => self.bits.truncate(top + 1),
            None => {
                self.bits.truncate(0);
                self.bits.push(false);
                self.negative = false;
            }
        }
    }

    /// Returns the magnitude, least significant bit first.
    pub(crate) fn magnitude(&self) -> &BitVec {
        &self.bits
    }

    pub(crate) fn into_magnitude(self) -> BitVec {
        self.bits
    }

    /// Returns the number of bits in the magnitude.
    ///
    /// Zero has a bit length of one.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Iterates the magnitude bits, most significant first.
    pub fn bits(&self) -> impl DoubleEndedIterator<Item = bool> + ExactSizeIterator + '_ {
        self.bits.iter().rev()
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            bits: self.bits.clone(),
            negative: false,
        }
    }

    /// Unary plus: returns a copy of the value.
    #[must_use]
    pub fn pos(&self) -> Self {
        self.clone()
    }

    /// Adds `rhs` in place and returns `self` for chaining.
    pub fn add_in_place(&mut self, rhs: &Self) -> &mut Self {
        let (bits, negative) =
            adder::add_signed(&self.bits, self.negative, &rhs.bits, rhs.negative);
        self.bits = bits;
        self.negative = negative;
        self.normalize();
        self
    }

    /// Subtracts `rhs` in place, as `self + (-rhs)`.
    pub fn sub_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.add_in_place(&-rhs)
    }

    /// Multiplies by `rhs` in place using shift-and-add.
    pub fn mul_in_place(&mut self, rhs: &Self) -> &mut Self {
        let mut product = Self::zero();
        let mut shifted = rhs.abs();
        for bit in &self.bits {
            if bit {
                product.add_in_place(&shifted);
            }
            shifted.shl_in_place(1);
        }
        product.negative = self.negative != rhs.negative;
        product.normalize();
        *self = product;
        self
    }

    /// Adds one in place (prefix increment).
    pub fn increment(&mut self) -> &mut Self {
        self.add_in_place(&Self::one())
    }

    /// Subtracts one in place (prefix decrement).
    pub fn decrement(&mut self) -> &mut Self {
        self.sub_in_place(&Self::one())
    }

    /// Adds one in place and returns the value before the change.
    #[must_use = "use `increment` if the previous value is not needed"]
    pub fn post_increment(&mut self) -> Self {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtracts one in place and returns the value before the change.
    #[must_use = "use `decrement` if the previous value is not needed"]
    pub fn post_decrement(&mut self) -> Self {
        let previous = self.clone();
        self.decrement();
        previous
    }

    /// Pads both magnitudes to a common width and combines them with `op`.
    fn zip_magnitude(
        &mut self,
        rhs: &Self,
        op: impl FnOnce(&mut BitVec, &BitVec) -> bool,
    ) -> &mut Self {
        let width = self.bits.len().max(rhs.bits.len());
        self.bits.grow(width - self.bits.len(), false);
        let mut other = rhs.bits.clone();
        other.grow(width - rhs.bits.len(), false);
        op(&mut self.bits, &other);
        self.normalize();
        self
    }

    /// Bitwise AND of the magnitudes; the sign of `self` is kept.
    pub fn and_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_magnitude(rhs, BitVec::and)
    }

    /// Bitwise OR of the magnitudes; the sign of `self` is kept.
    pub fn or_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_magnitude(rhs, BitVec::or)
    }

    /// Bitwise XOR of the magnitudes; the sign of `self` is kept.
    pub fn xor_in_place(&mut self, rhs: &Self) -> &mut Self {
        self.zip_magnitude(rhs, BitVec::xor)
    }

    /// Flips every magnitude bit and the sign.
    ///
    /// This is a structural one's complement, not arithmetic negation:
    /// the magnitude of the result is `2^bit_len - 1 - |self|`.
    #[must_use]
    pub fn complement(&self) -> Self {
        let mut bits = self.bits.clone();
        bits.negate();
        Self::from_parts(bits, !self.negative)
    }

    /// Shifts the magnitude left by `shift` bits, keeping the sign.
    pub fn shl_in_place(&mut self, shift: usize) -> &mut Self {
        let mut shifted = BitVec::from_elem(shift, false);
        shifted.append(&mut self.bits);
        self.bits = shifted;
        self.normalize();
        self
    }

    /// Shifts the magnitude right by `shift` bits, keeping the sign.
    ///
    /// Bits shifted out are discarded, so the magnitude is truncated
    /// towards zero. Shifting by exactly `bit_len()` gives zero.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::ShiftOutOfRange`] if `shift` exceeds the bit
    /// length; `self` is left unchanged.
    pub fn try_shr_in_place(&mut self, shift: usize) -> Result<&mut Self, BigIntError> {
        if shift > self.bits.len() {
            return Err(BigIntError::ShiftOutOfRange {
                shift,
                bit_len: self.bits.len(),
            });
        }
        self.bits = self.bits.split_off(shift);
        self.normalize();
        Ok(self)
    }

    /// Returns the value shifted right by `shift` bits.
    ///
    /// # Errors
    ///
    /// Returns [`BigIntError::ShiftOutOfRange`] if `shift` exceeds the bit
    /// length.
    pub fn checked_shr(&self, shift: usize) -> Result<Self, BigIntError> {
        let mut value = self.clone();
        value.try_shr_in_place(shift)?;
        Ok(value)
    }

    /// Attempts to convert to an i128.
    ///
    /// Returns `None` if the value doesn't fit in an i128.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        if self.bits.len() > 128 {
            return None;
        }
        let magnitude = self
            .bits
            .iter()
            .rev()
            .fold(0u128, |acc, bit| (acc << 1) | u128::from(bit));
        if self.negative && magnitude == i128::MIN.unsigned_abs() {
            return Some(i128::MIN);
        }
        let value = i128::try_from(magnitude).ok()?;
        Some(if self.negative { -value } else { value })
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.to_i128().and_then(|v| i64::try_from(v).ok())
    }

    /// Renders the value in base 2 as `(bits)_2`, with a leading `-` for
    /// negative values.
    #[must_use]
    pub fn to_bits_string(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}({})_2", radix::binary_digits(&self.bits))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            bits: BitVec::from_elem(1, false),
            negative: false,
        }
    }

    fn is_zero(&self) -> bool {
        self.bits.none()
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            bits: BitVec::from_elem(1, true),
            negative: false,
        }
    }

    fn is_one(&self) -> bool {
        self.bits.len() == 1 && self.bits[0] && !self.negative
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => cmp_magnitude(&self.bits, &other.bits),
            // a larger magnitude is more negative
            (true, true) => cmp_magnitude(&other.bits, &self.bits),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "", &radix::decimal_digits(&self.bits))
    }
}

impl fmt::Binary for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(!self.negative, "0b", &radix::binary_digits(&self.bits))
    }
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_unsigned(value.unsigned_abs() as u128, value < 0)
                }
            }
        )*
    };
}

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    Self::from_unsigned(value as u128, false)
                }
            }
        )*
    };
}

impl_from_signed!(i8, i16, i32, i64, i128, isize);
impl_from_unsigned!(u8, u16, u32, u64, u128, usize);

impl TryFrom<&BigInt> for i64 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_i64().ok_or(BigIntError::OutOfRange("i64"))
    }
}

impl TryFrom<&BigInt> for i128 {
    type Error = BigIntError;

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        value.to_i128().ok_or(BigIntError::OutOfRange("i128"))
    }
}

impl Sum for BigInt {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, x| {
            acc.add_in_place(&x);
            acc
        })
    }
}

impl<'a> Sum<&'a BigInt> for BigInt {
    fn sum<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(Self::zero(), |mut acc, x| {
            acc.add_in_place(x);
            acc
        })
    }
}

impl Product for BigInt {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |mut acc, x| {
            acc.mul_in_place(&x);
            acc
        })
    }
}

impl<'a> Product<&'a BigInt> for BigInt {
    fn product<I: Iterator<Item = &'a BigInt>>(iter: I) -> Self {
        iter.fold(Self::one(), |mut acc, x| {
            acc.mul_in_place(x);
            acc
        })
    }
}
