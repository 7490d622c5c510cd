//! Property-based tests for the arithmetic core.

#[cfg(test)]
mod tests {
    use num_traits::{One, Zero};
    use proptest::prelude::*;

    use crate::BigInt;

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -100_000i64..100_000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-100_000i64..=-1i64), (1i64..=100_000i64)]
    }

    // Strategy for decimal strings well past the i64 range
    fn big_decimal() -> impl Strategy<Value = String> {
        "-?[1-9][0-9]{0,38}"
    }

    proptest! {
        #[test]
        fn parse_format_round_trip(s in big_decimal()) {
            let x: BigInt = s.parse().unwrap();
            prop_assert_eq!(x.to_string(), s);
            let y: BigInt = x.to_string().parse().unwrap();
            prop_assert_eq!(x, y);
        }

        #[test]
        fn compare_agrees_with_value(a in small_int(), b in small_int()) {
            prop_assert_eq!(BigInt::new(a).cmp(&BigInt::new(b)), a.cmp(&b));
        }

        #[test]
        fn cmp_magnitude_ignores_sign(a in small_int(), b in small_int()) {
            prop_assert_eq!(
                BigInt::new(a).cmp_magnitude(&BigInt::new(b)),
                a.unsigned_abs().cmp(&b.unsigned_abs())
            );
        }

        #[test]
        fn add_matches_machine(a in small_int(), b in small_int()) {
            prop_assert_eq!(BigInt::new(a) + BigInt::new(b), BigInt::new(a + b));
        }

        #[test]
        fn sub_matches_machine(a in small_int(), b in small_int()) {
            prop_assert_eq!(BigInt::new(a) - BigInt::new(b), BigInt::new(a - b));
        }

        #[test]
        fn mul_matches_machine(a in small_int(), b in small_int()) {
            prop_assert_eq!(BigInt::new(a) * BigInt::new(b), BigInt::new(a * b));
        }

        // Truncating division agrees with the machine `/` and `%`.
        #[test]
        fn div_rem_match_machine(a in small_int(), b in non_zero_int()) {
            let x = BigInt::new(a);
            let y = BigInt::new(b);
            prop_assert_eq!(x.checked_div(&y).unwrap(), BigInt::new(a / b));
            prop_assert_eq!(x.checked_rem(&y).unwrap(), BigInt::new(a % b));
        }

        #[test]
        fn add_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn add_sub_inverse(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&(&a + &b) - &b, a.clone());
            prop_assert_eq!(&(&a - &b) + &b, a);
        }

        #[test]
        fn mul_commutative(a in small_int(), b in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            prop_assert_eq!(&a * &b, &b * &a);
        }

        #[test]
        fn mul_distributive(a in small_int(), b in small_int(), c in small_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let c = BigInt::new(c);
            prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
        }

        #[test]
        fn division_identity(a in small_int(), b in non_zero_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let q = a.checked_div(&b).unwrap();
            let r = a.checked_rem(&b).unwrap();
            prop_assert_eq!(&(&q * &b) + &r, a);
        }

        #[test]
        fn pow_laws(a in -50i64..50i64, n in 0u32..8u32) {
            let base = BigInt::new(a);
            let exp = BigInt::new(i64::from(n));
            let next = BigInt::new(i64::from(n) + 1);
            prop_assert_eq!(base.pow(&BigInt::zero()), BigInt::one());
            prop_assert_eq!(base.pow(&BigInt::one()), base.clone());
            prop_assert_eq!(base.pow(&next), &base.pow(&exp) * &base);
        }

        #[test]
        fn gcd_zero_is_identity(a in small_int()) {
            let a = BigInt::new(a);
            prop_assert_eq!(a.gcd(&BigInt::zero()), a);
        }

        #[test]
        fn gcd_divides_both(a in small_int(), b in non_zero_int()) {
            let a = BigInt::new(a);
            let b = BigInt::new(b);
            let g = a.gcd(&b);
            prop_assert!(!g.is_zero());
            prop_assert!(a.checked_rem(&g).unwrap().is_zero());
            prop_assert!(b.checked_rem(&g).unwrap().is_zero());
        }

        #[test]
        fn to_i64_round_trip(a in any::<i64>()) {
            prop_assert_eq!(BigInt::new(a).to_i64(), Some(a));
        }
    }
}
