//! Power-set and multiset counting via the exponential formula.
//!
//! For a collection of items whose sizes are encoded by a generating
//! function `f` (coefficient `i` counts the distinct items of size `i`),
//! the generating function of its power sets is
//!
//!   exp( sum_{k>=1} (-1)^{k+1} f(z^k) / k )
//!
//! and of its multisets
//!
//!   exp( sum_{k>=1} f(z^k) / k ).
//!
//! The inner sums are logarithms in disguise, so for example six distinct
//! items of size one give exp(6 ln(1+z)) = (1+z)^6. The sums are truncated
//! at `depth` terms, which leaves all coefficients up to index `depth`
//! exact; there is currently no way to express the untruncated sum of
//! infinitely many series.

use formalis::prelude::*;

/// The generating function counting subsets drawn from items described
/// by `f`. Exact up to coefficient `depth`.
pub fn powerset_series(f: &PowerSeries<Rational>, depth: u32) -> PowerSeries<Rational> {
    let inner: PowerSeries<Rational> = (1..=depth)
        .map(|k| {
            let term = f
                .compose(&PowerSeries::z_pow(k as usize))
                .scale(Rational::from_i64(1, i64::from(k)));
            if k % 2 == 0 { -term } else { term }
        })
        .sum();
    PowerSeries::exp().compose(&inner)
}

/// The generating function counting multisets drawn from items described
/// by `f`. Exact up to coefficient `depth`.
pub fn multiset_series(f: &PowerSeries<Rational>, depth: u32) -> PowerSeries<Rational> {
    let inner: PowerSeries<Rational> = (1..=depth)
        .map(|k| {
            f.compose(&PowerSeries::z_pow(k as usize))
                .scale(Rational::from_i64(1, i64::from(k)))
        })
        .sum();
    PowerSeries::exp().compose(&inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> Rational {
        Rational::from_i64(n, d)
    }

    fn whole(vs: &[i64]) -> Vec<Rational> {
        vs.iter().copied().map(Rational::from).collect()
    }

    #[test]
    fn test_powerset_of_six_distinct_items() {
        // Six items of size one: the power sets form (1+z)^6, so the
        // coefficients are the binomials C(6, n).
        let f = PowerSeries::z().scale(q(6, 1));
        let powerset = powerset_series(&f, 12);
        assert_eq!(
            powerset.take(8).unwrap(),
            whole(&[1, 6, 15, 20, 15, 6, 1, 0])
        );
    }

    #[test]
    fn test_powerset_of_mixed_sizes() {
        // One item of size one, one of size two: (1+z)(1+z^2).
        let f = PowerSeries::z() + PowerSeries::z_pow(2);
        let powerset = powerset_series(&f, 10);
        assert_eq!(powerset.take(6).unwrap(), whole(&[1, 1, 1, 1, 0, 0]));
    }

    #[test]
    fn test_multiset_of_six_distinct_items() {
        // Six items of size one with repetition: 1/(1-z)^6, coefficients
        // C(n+5, 5).
        let f = PowerSeries::z().scale(q(6, 1));
        let multiset = multiset_series(&f, 12);
        assert_eq!(
            multiset.take(5).unwrap(),
            whole(&[1, 6, 21, 56, 126])
        );
    }
}
