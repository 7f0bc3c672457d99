//! Two's-complement ripple-carry addition for sign/magnitude values.
//!
//! Values are stored as a sign flag plus a magnitude, but addition of mixed
//! signs is easiest as plain binary addition over a fixed width. The helpers
//! here widen both operands, switch negative ones into two's complement,
//! add, and switch back. All bit vectors are least significant bit first.

use bit_vec::BitVec;
use std::cmp::Ordering;

/// Compares two normalized magnitudes.
///
/// Shorter magnitudes are smaller; equal lengths are scanned from the most
/// significant bit down and the first differing bit decides.
pub(crate) fn cmp_magnitude(a: &BitVec, b: &BitVec) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// Negates a fixed-width two's-complement value in place.
///
/// The carry out of the most significant bit is dropped, so negating zero
/// yields zero.
pub(crate) fn negate(bits: &mut BitVec) {
    bits.negate();
    // +1: trailing ones become zeros up to and including the first zero
    for i in 0..bits.len() {
        let flipped = !bits[i];
        bits.set(i, flipped);
        if flipped {
            break;
        }
    }
}

/// Zero-extends `bits` to `width` and converts to two's complement if negative.
fn widen(bits: &BitVec, width: usize, negative: bool) -> BitVec {
    let mut out = bits.clone();
    out.grow(width - bits.len(), false);
    if negative {
        negate(&mut out);
    }
    out
}

/// Adds two sign/magnitude values and returns the result in the same form.
///
/// The sign of the result is settled before any bit is touched: equal
/// signs keep that sign, otherwise the operand with the strictly larger
/// magnitude wins, and exact cancellation gives a non-negative zero.
///
/// Both operands are widened to the longer length plus two guard bits. One
/// guard bit holds the two's-complement sign, the other absorbs the carry
/// of same-sign additions. The returned magnitude is not normalized.
pub(crate) fn add_signed(
    a: &BitVec,
    a_negative: bool,
    b: &BitVec,
    b_negative: bool,
) -> (BitVec, bool) {
    let negative = if a_negative == b_negative {
        a_negative
    } else {
        match cmp_magnitude(a, b) {
            Ordering::Less => b_negative,
            Ordering::Greater => a_negative,
            Ordering::Equal => false,
        }
    };

    let width = a.len().max(b.len()) + 2;
    let lhs = widen(a, width, a_negative);
    let rhs = widen(b, width, b_negative);

    let mut sum = BitVec::with_capacity(width);
    let mut carry = false;
    for (x, y) in lhs.iter().zip(rhs.iter()) {
        sum.push(x ^ y ^ carry);
        carry = (x && y) || (carry && (x ^ y));
    }
    // the carry out of the top guard bit is discarded

    if negative {
        negate(&mut sum);
    }
    (sum, negative)
}
