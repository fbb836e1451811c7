//! Property-based tests for arbitrary precision arithmetic.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::prelude::*;

    use crate::{Integer, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    proptest! {
        // Integer ring axioms

        #[test]
        fn integer_add_commutative(a in small_int(), b in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn integer_mul_distributes(a in small_int(), b in small_int(), c in small_int()) {
            let a = Integer::new(a);
            let b = Integer::new(b);
            let c = Integer::new(c);
            prop_assert_eq!(
                a.clone() * (b.clone() + c.clone()),
                a.clone() * b + a * c
            );
        }

        // Floor division bounds: d*q <= n < d*(q+1) for positive d, and the
        // reverse ordering for negative d.
        #[test]
        fn integer_div_floor_bounds(n in small_int(), d in non_zero_int()) {
            let q = Integer::new(n).div_floor(&Integer::new(d));
            let q = q.to_i64().unwrap();
            if d > 0 {
                prop_assert!(d * q <= n && n < d * (q + 1));
            } else {
                prop_assert!(d * q >= n && n > d * (q + 1));
            }
        }

        #[test]
        fn integer_div_floor_matches_exact(a in small_int(), d in non_zero_int()) {
            // Exact multiples divide back exactly regardless of sign.
            let product = Integer::new(a) * Integer::new(d);
            prop_assert_eq!(product.div_floor(&Integer::new(d)), Integer::new(a));
        }

        // Rational field axioms

        #[test]
        fn rational_add_commutative(
            an in small_int(), ad in non_zero_int(),
            bn in small_int(), bd in non_zero_int(),
        ) {
            let a = Rational::from_i64(an, ad);
            let b = Rational::from_i64(bn, bd);
            prop_assert_eq!(a.clone() + b.clone(), b + a);
        }

        #[test]
        fn rational_mul_inverse(n in non_zero_int(), d in non_zero_int()) {
            use num_traits::One;
            let r = Rational::from_i64(n, d);
            prop_assert!((r.clone() * r.recip()).is_one());
        }

        #[test]
        fn rational_div_is_exact(
            an in small_int(), ad in non_zero_int(),
            bn in non_zero_int(), bd in non_zero_int(),
        ) {
            let a = Rational::from_i64(an, ad);
            let b = Rational::from_i64(bn, bd);
            let q = a.clone() / b.clone();
            prop_assert_eq!(q * b, a);
        }

        #[test]
        fn rational_denominator_positive(n in small_int(), d in non_zero_int()) {
            let r = Rational::from_i64(n, d);
            if !r.is_zero() {
                prop_assert!(!r.denominator().is_negative());
            }
        }
    }
}
