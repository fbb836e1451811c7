//! Property-based tests for the series algebra laws.

#[cfg(test)]
mod tests {
    use num_traits::Zero;
    use proptest::collection::vec;
    use proptest::prelude::*;

    use formalis_numbers::{Integer, Rational};

    use crate::series::PowerSeries;

    fn small_int() -> impl Strategy<Value = i64> {
        -20i64..20i64
    }

    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-20i64..=-1i64), (1i64..=20i64)]
    }

    fn coeffs() -> impl Strategy<Value = Vec<i64>> {
        vec(small_int(), 0..8)
    }

    fn series_of(vs: &[i64]) -> PowerSeries<Integer> {
        PowerSeries::from_coeffs(vs.iter().copied().map(Integer::new).collect())
    }

    proptest! {
        #[test]
        fn finite_source_replays_then_pads(vs in coeffs(), extra in 0usize..8) {
            let f = series_of(&vs);
            let taken = f.take(vs.len()).unwrap();
            let expected: Vec<Integer> = vs.iter().copied().map(Integer::new).collect();
            prop_assert_eq!(taken, expected);
            prop_assert!(f.nth(vs.len() + extra).unwrap().is_zero());
        }

        #[test]
        fn addition_is_coefficientwise(fs in coeffs(), gs in coeffs(), k in 0usize..12) {
            let f = series_of(&fs);
            let g = series_of(&gs);
            let sum = &f + &g;
            prop_assert_eq!(
                sum.nth(k).unwrap(),
                f.nth(k).unwrap() + g.nth(k).unwrap()
            );
        }

        #[test]
        fn product_satisfies_convolution_identity(
            fs in coeffs(),
            gs in coeffs(),
            k in 0usize..10,
        ) {
            let f = series_of(&fs);
            let g = series_of(&gs);
            let product = &f * &g;
            let mut expected = Integer::zero();
            for i in 0..=k {
                expected = expected + f.nth(i).unwrap() * g.nth(k - i).unwrap();
            }
            prop_assert_eq!(product.nth(k).unwrap(), expected);
        }

        #[test]
        fn division_inverts_multiplication(
            fs in coeffs(),
            g0 in non_zero_int(),
            gs in coeffs(),
            k in 0usize..10,
        ) {
            // g is forced to have a non-zero constant term, so (f*g)/g = f.
            let f = series_of(&fs);
            let mut g_coeffs = vec![g0];
            g_coeffs.extend(&gs);
            let g = series_of(&g_coeffs);
            let recovered = (&f * &g) / g;
            prop_assert_eq!(recovered.nth(k).unwrap(), f.nth(k).unwrap());
        }

        #[test]
        fn reciprocal_recovers_one(g0 in non_zero_int(), gs in coeffs(), k in 1usize..10) {
            let mut g_coeffs = vec![g0];
            g_coeffs.extend(&gs);
            let g = series_of(&g_coeffs).to_rational();
            let identity = &g * &(PowerSeries::<Rational>::one() / g.clone());
            prop_assert_eq!(identity.nth(0).unwrap(), Rational::from(1));
            prop_assert!(identity.nth(k).unwrap().is_zero());
        }

        #[test]
        fn composing_with_identity_is_noop(gs in coeffs(), k in 0usize..12) {
            // Inner constant term must be zero for composition.
            let mut g_coeffs = vec![0];
            g_coeffs.extend(&gs);
            let g = series_of(&g_coeffs);
            let composed = PowerSeries::z().compose(&g);
            prop_assert_eq!(composed.nth(k).unwrap(), g.nth(k).unwrap());
        }

        #[test]
        fn composition_matches_brute_force_powers(
            fs in vec(small_int(), 0..5),
            gs in vec(small_int(), 0..5),
            k in 0usize..8,
        ) {
            // f(g) = sum_m f_m * g^m, expanded with the product combinator.
            let f = series_of(&fs);
            let mut g_coeffs = vec![0];
            g_coeffs.extend(&gs);
            let g = series_of(&g_coeffs);

            let mut expansion = PowerSeries::zero();
            let mut power = PowerSeries::one();
            for m in 0..fs.len() {
                expansion = expansion + power.scale(f.nth(m).unwrap());
                power = power * g.clone();
            }
            prop_assert_eq!(
                f.compose(&g).nth(k).unwrap(),
                expansion.nth(k).unwrap()
            );
        }
    }
}
