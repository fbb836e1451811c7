//! Demonstrations of generating-function arithmetic.

mod constructions;

use formalis::prelude::*;

use crate::constructions::{multiset_series, powerset_series};

fn main() -> Result<(), SeriesError> {
    // Solve the famous "change-making" problem using generating functions.
    let coin = |k: usize| {
        &PowerSeries::<Integer>::one() / &(PowerSeries::one() - PowerSeries::z_pow(k))
    };
    let change = coin(1) * coin(5) * coin(10) * coin(25);
    println!("Ways to make change of 99 cents: {}", change.nth(99)?);
    println!();

    // Verify that identity-composition works as expected.
    let identity = PowerSeries::<Integer>::z().compose(&PowerSeries::z());
    for c in identity.take(10)? {
        println!("{c}");
    }
    println!();

    // Powerset construction with one unique item of size 1 and another of
    // size 2.
    let mixed = PowerSeries::z() + PowerSeries::z_pow(2);
    for c in powerset_series(&mixed, 10).take(10)? {
        println!("{c}");
    }
    println!();

    // Powerset construction with exactly 6 unique elements, each of size 1.
    // We expect to find C(6, n) subsets of size n within the powerset,
    // where C(n, k) is the binomial coefficient "n choose k".
    let six = PowerSeries::z().scale(Rational::from(6));
    for c in powerset_series(&six, 100).take(10)? {
        println!("{c}");
    }
    println!();

    // Multiset construction with exactly 6 unique elements, each of size 1.
    for c in multiset_series(&six, 10).take(10)? {
        println!("{c}");
    }

    Ok(())
}
