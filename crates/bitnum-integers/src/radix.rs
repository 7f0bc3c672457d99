//! Conversion between `BigInt` and base-10 / base-2 text.

use bit_vec::BitVec;
use num_traits::Zero;
use std::str::FromStr;

use crate::error::ParseBigIntError;
use crate::BigInt;

/// Renders an LSB-first magnitude as binary digits, most significant first.
pub(crate) fn binary_digits(bits: &BitVec) -> String {
    bits.iter()
        .rev()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

/// Renders an LSB-first magnitude as decimal digits.
///
/// Works by repeated long division of the bit vector by ten, so the output
/// is exact for any length.
pub(crate) fn decimal_digits(bits: &BitVec) -> String {
    // most significant first for long division
    let mut dividend: BitVec = bits.iter().rev().collect();
    let mut digits = Vec::new();

    loop {
        let mut quotient = BitVec::with_capacity(dividend.len());
        let mut remainder = 0u8;
        for bit in &dividend {
            remainder = remainder * 2 + u8::from(bit);
            if remainder >= 10 {
                remainder -= 10;
                quotient.push(true);
            } else {
                quotient.push(false);
            }
        }
        digits.push(char::from(b'0' + remainder));

        match quotient.iter().position(|bit| bit) {
            Some(first_one) => dividend = quotient.split_off(first_one),
            None => break,
        }
    }

    digits.iter().rev().collect()
}

impl BigInt {
    /// Parses an integer from a string in the given base.
    ///
    /// Accepts an optional leading `+` or `-` followed by digits. Only base
    /// 2 and base 10 are supported.
    ///
    /// # Errors
    ///
    /// Returns an error if the radix is unsupported, the string has no
    /// digits, or a character is not a digit in the radix.
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self, ParseBigIntError> {
        if radix != 2 && radix != 10 {
            return Err(ParseBigIntError::UnsupportedRadix(radix));
        }

        let (negative, digits, offset) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..], 1),
            Some(b'+') => (false, &s[1..], 1),
            _ => (false, s, 0),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }

        let mut values = Vec::with_capacity(digits.len());
        for (position, digit) in digits.char_indices() {
            let value = digit
                .to_digit(radix)
                .ok_or(ParseBigIntError::InvalidDigit {
                    digit,
                    position: position + offset,
                })?;
            values.push(value);
        }

        let mut result = if radix == 2 {
            Self::from_parts(values.iter().rev().map(|&v| v == 1).collect(), false)
        } else {
            let ten = Self::from(10u8);
            let mut acc = Self::zero();
            for value in values {
                acc.mul_in_place(&ten).add_in_place(&Self::from(value));
            }
            acc
        };

        if negative {
            result = -result;
        }
        Ok(result)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_radix(s, 10)
    }
}
