//! Operator overloads for `BigInt`.
//!
//! Binary operators never mutate their operands; each one clones (or
//! consumes) the left operand and applies the matching in-place method.

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Mul,
    MulAssign, Neg, Not, Shl, ShlAssign, Shr, ShrAssign, Sub, SubAssign,
};

use crate::BigInt;

macro_rules! forward_binop {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $in_place:ident) => {
        impl $OpAssign<&BigInt> for BigInt {
            fn $op_assign(&mut self, rhs: &BigInt) {
                self.$in_place(rhs);
            }
        }

        impl $OpAssign for BigInt {
            fn $op_assign(&mut self, rhs: BigInt) {
                self.$in_place(&rhs);
            }
        }

        impl $Op<&BigInt> for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: &BigInt) -> Self::Output {
                self.$in_place(rhs);
                self
            }
        }

        impl $Op for BigInt {
            type Output = BigInt;

            fn $op(mut self, rhs: BigInt) -> Self::Output {
                self.$in_place(&rhs);
                self
            }
        }

        impl $Op for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: &BigInt) -> Self::Output {
                let mut out = self.clone();
                out.$in_place(rhs);
                out
            }
        }

        impl $Op<BigInt> for &BigInt {
            type Output = BigInt;

            fn $op(self, rhs: BigInt) -> Self::Output {
                let mut out = self.clone();
                out.$in_place(&rhs);
                out
            }
        }
    };
}

// Arithmetic operations
forward_binop!(Add, add, AddAssign, add_assign, add_in_place);
forward_binop!(Sub, sub, SubAssign, sub_assign, sub_in_place);
forward_binop!(Mul, mul, MulAssign, mul_assign, mul_in_place);

// Bitwise operations (magnitude only)
forward_binop!(BitAnd, bitand, BitAndAssign, bitand_assign, and_in_place);
forward_binop!(BitOr, bitor, BitOrAssign, bitor_assign, or_in_place);
forward_binop!(BitXor, bitxor, BitXorAssign, bitxor_assign, xor_in_place);

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let negative = !self.is_negative();
        Self::from_parts(self.into_magnitude(), negative)
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        BigInt::from_parts(self.magnitude().clone(), !self.is_negative())
    }
}

impl Not for BigInt {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl ShlAssign<usize> for BigInt {
    fn shl_assign(&mut self, shift: usize) {
        self.shl_in_place(shift);
    }
}

impl Shl<usize> for BigInt {
    type Output = Self;

    fn shl(mut self, shift: usize) -> Self::Output {
        self.shl_in_place(shift);
        self
    }
}

impl Shl<usize> for &BigInt {
    type Output = BigInt;

    fn shl(self, shift: usize) -> Self::Output {
        self.clone() << shift
    }
}

impl ShrAssign<usize> for BigInt {
    /// # Panics
    ///
    /// Panics if `shift` exceeds the bit length; use
    /// [`BigInt::try_shr_in_place`] to handle that case.
    fn shr_assign(&mut self, shift: usize) {
        if let Err(err) = self.try_shr_in_place(shift) {
            panic!("{err}");
        }
    }
}

impl Shr<usize> for BigInt {
    type Output = Self;

    fn shr(mut self, shift: usize) -> Self::Output {
        self >>= shift;
        self
    }
}

impl Shr<usize> for &BigInt {
    type Output = BigInt;

    fn shr(self, shift: usize) -> Self::Output {
        self.clone() >> shift
    }
}
