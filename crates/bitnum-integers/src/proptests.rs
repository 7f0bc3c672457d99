//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use dashu::integer::IBig;
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Values whose sums and products stay inside i128
    fn wide_int() -> impl Strategy<Value = i64> {
        any::<i64>()
    }

    fn is_canonical(value: &BigInt) -> bool {
        let bits = value.magnitude();
        let no_leading_zero = bits.len() == 1 || bits.get(bits.len() - 1) == Some(true);
        let no_negative_zero = !(value.is_zero() && value.is_negative());
        no_leading_zero && no_negative_zero
    }

    proptest! {
        // Agreement with native arithmetic

        #[test]
        fn add_matches_native(a in wide_int(), b in wide_int()) {
            let sum = BigInt::from(a) + BigInt::from(b);
            prop_assert_eq!(sum.to_i128(), Some(i128::from(a) + i128::from(b)));
            prop_assert!(is_canonical(&sum));
        }

        #[test]
        fn sub_matches_native(a in wide_int(), b in wide_int()) {
            let diff = BigInt::from(a) - BigInt::from(b);
            prop_assert_eq!(diff.to_i128(), Some(i128::from(a) - i128::from(b)));
            prop_assert!(is_canonical(&diff));
        }

        #[test]
        fn mul_matches_native(a in wide_int(), b in wide_int()) {
            let product = BigInt::from(a) * BigInt::from(b);
            prop_assert_eq!(product.to_i128(), Some(i128::from(a) * i128::from(b)));
            prop_assert!(is_canonical(&product));
        }

        #[test]
        fn wide_mul_matches_dashu(a in any::<i128>(), b in any::<i128>(), c in any::<i64>()) {
            let ours = BigInt::from(a) * BigInt::from(b) * BigInt::from(c);
            let reference = IBig::from(a) * IBig::from(b) * IBig::from(c);
            prop_assert_eq!(ours.to_string(), reference.to_string());
        }

        #[test]
        fn wide_add_matches_dashu(a in any::<i128>(), b in any::<i128>(), c in any::<i128>()) {
            let ours = BigInt::from(a) * BigInt::from(b) + BigInt::from(c);
            let reference = IBig::from(a) * IBig::from(b) + IBig::from(c);
            prop_assert_eq!(ours.to_string(), reference.to_string());
        }

        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn integer_add_associative(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
        }

        #[test]
        fn integer_mul_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn integer_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn integer_identities(a in small_int()) {
            let a = BigInt::new(a);
            prop_assert_eq!(&a + &BigInt::zero(), a.clone());
            prop_assert_eq!(&a * &BigInt::one(), a.clone());
            prop_assert!((&a - &a).is_zero());
            prop_assert!(!(&a - &a).is_negative());
        }

        // Ordering

        #[test]
        fn ordering_matches_native(a in wide_int(), b in wide_int()) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            prop_assert_eq!(x.cmp(&y), a.cmp(&b));
            prop_assert_eq!(x == y, a == b);
        }

        #[test]
        fn ordering_is_total(a in small_int(), b in small_int()) {
            let x = BigInt::new(a);
            let y = BigInt::new(b);
            let holds = [x < y, x == y, y < x];
            prop_assert_eq!(holds.iter().filter(|&&h| h).count(), 1);
        }

        // Rendering

        #[test]
        fn decimal_round_trip(a in any::<i128>()) {
            let rendered = BigInt::from(a).to_string();
            prop_assert_eq!(&rendered, &a.to_string());
            prop_assert_eq!(rendered.parse::<BigInt>().ok(), Some(BigInt::from(a)));
        }

        #[test]
        fn binary_matches_native(a in wide_int()) {
            let value = BigInt::from(a);
            let sign = if a < 0 { "-" } else { "" };
            prop_assert_eq!(format!("{value:b}"), format!("{sign}{:b}", a.unsigned_abs()));
        }

        // Shifts and complement

        #[test]
        fn shift_inverse(a in 1i64..i64::MAX, n in 0usize..200) {
            let value = BigInt::new(a);
            let shifted = &value << n;
            prop_assert!(is_canonical(&shifted));
            let restored = shifted.checked_shr(n);
            prop_assert!(restored.as_ref().is_ok_and(is_canonical));
            prop_assert_eq!(restored.ok(), Some(value));
        }

        #[test]
        fn shift_matches_native(a in 0u64..u64::from(u32::MAX), n in 0usize..32) {
            let value = BigInt::from(a);
            let up = &value << n;
            prop_assert_eq!(up.to_i128(), Some(i128::from(a) << n));
            prop_assert!(is_canonical(&up));
            let down = n.min(value.bit_len());
            let shrunk = &value >> down;
            prop_assert_eq!(shrunk.to_i128(), Some(i128::from(a >> down)));
            prop_assert!(is_canonical(&shrunk));
        }

        #[test]
        fn signed_shifts_stay_canonical(a in -70i64..70, n in 0usize..10) {
            let value = BigInt::new(a);
            let up = &value << n;
            prop_assert!(is_canonical(&up));
            prop_assert_eq!(up.to_i128(), Some(i128::from(a) << n));
            if let Ok(down) = value.checked_shr(n) {
                prop_assert!(is_canonical(&down));
                let expected = i128::from(a.unsigned_abs() >> n);
                prop_assert_eq!(down.to_i128(), Some(if a < 0 { -expected } else { expected }));
            } else {
                prop_assert!(n > value.bit_len());
            }
        }

        #[test]
        fn complement_magnitude(a in wide_int()) {
            let value = BigInt::from(a);
            let flipped = !&value;
            let all_ones = (1i128 << value.bit_len()) - 1;
            let expected = all_ones - i128::from(a.unsigned_abs());
            prop_assert_eq!(flipped.abs().to_i128(), Some(expected));
            prop_assert!(is_canonical(&flipped));
            if expected != 0 {
                prop_assert_eq!(flipped.is_negative(), !value.is_negative());
            }
        }

        #[test]
        fn bitwise_matches_magnitudes(a in wide_int(), b in wide_int()) {
            let x = BigInt::from(a);
            let y = BigInt::from(b);
            let (ma, mb) = (a.unsigned_abs(), b.unsigned_abs());
            for (result, magnitude) in [(&x & &y, ma & mb), (&x | &y, ma | mb), (&x ^ &y, ma ^ mb)] {
                prop_assert_eq!(result.abs().to_i128(), Some(i128::from(magnitude)));
                prop_assert_eq!(result.is_negative(), a < 0 && magnitude != 0);
                prop_assert!(is_canonical(&result));
            }
        }
    }
}
