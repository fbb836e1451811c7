//! Composition factors: the coefficients of `g/(1-g)`, combinatorially.
//!
//! Given the first coefficients of a series `g` with zero constant term,
//! the coefficient of `z^n` in `g + g^2 + g^3 + ... = g/(1-g)` is the sum
//! over all integer compositions `(c_1, .., c_k)` of `n` of the products
//! `g_{c_1} * .. * g_{c_k}`. The three routes below compute the same
//! numbers with very different amounts of work:
//!
//! - by compositions: visit every composition (exponentially many),
//! - by partitions: visit every partition and weight it by the number of
//!   compositions that collapse onto it (its multiset permutations),
//! - by recurrence: dynamic programming over previously computed factors.
//!
//! The lazy engine computes the same coefficients as `g/(one() - g)`; the
//! routes here exist to cross-check it and to make the combinatorial
//! reading explicit.

use num_traits::Zero;

use formalis_numbers::Integer;

use crate::compositions::compositions;
use crate::error::EnumerateError;
use crate::multisets::multiset_permutations;
use crate::partitions::partitions;

/// Checks the zero-constant-term precondition shared by all three routes.
fn check_constant_term(coeffs: &[Integer]) -> Result<(), EnumerateError> {
    match coeffs.first() {
        Some(c0) if !c0.is_zero() => Err(EnumerateError::NonZeroConstantTerm),
        _ => Ok(()),
    }
}

/// Product of the coefficients selected by one set of parts.
fn product_over(coeffs: &[Integer], parts: &[u32]) -> Integer {
    let mut product = Integer::new(1);
    for &part in parts {
        product = product * &coeffs[part as usize];
    }
    product
}

/// Composition factors by visiting every integer composition of `n`.
///
/// Returns one factor per index `1..coeffs.len()`.
///
/// # Errors
///
/// Fails with [`EnumerateError::NonZeroConstantTerm`] if `coeffs[0]` is
/// not zero.
pub fn factors_by_compositions(coeffs: &[Integer]) -> Result<Vec<Integer>, EnumerateError> {
    check_constant_term(coeffs)?;
    let mut factors = Vec::new();
    for n in 1..coeffs.len() {
        let mut sum = Integer::zero();
        #[allow(clippy::cast_possible_truncation)]
        for composition in compositions(n as u32) {
            sum = sum + product_over(coeffs, &composition);
        }
        factors.push(sum);
    }
    Ok(factors)
}

/// Composition factors by visiting every integer partition of `n` and
/// correcting for the number of "repeats" with a multinomial factor.
///
/// Returns one factor per index `1..coeffs.len()`.
///
/// # Errors
///
/// Fails with [`EnumerateError::NonZeroConstantTerm`] if `coeffs[0]` is
/// not zero.
pub fn factors_by_partitions(coeffs: &[Integer]) -> Result<Vec<Integer>, EnumerateError> {
    check_constant_term(coeffs)?;
    let mut factors = Vec::new();
    for n in 1..coeffs.len() {
        let mut sum = Integer::zero();
        #[allow(clippy::cast_possible_truncation)]
        for partition in partitions(n as u32) {
            let product = product_over(coeffs, &partition);
            sum = sum + product * multiset_permutations(&partition);
        }
        factors.push(sum);
    }
    Ok(factors)
}

/// Composition factors by a direct recurrence.
///
/// Maintains a table of previous factors; the `n`-th factor extends some
/// earlier factor by one more part, giving
/// `y_n = sum_{i=1}^{n-1} y_{n-i} * g_i + g_n`.
///
/// Returns one factor per index `1..coeffs.len()`.
///
/// # Errors
///
/// Fails with [`EnumerateError::NonZeroConstantTerm`] if `coeffs[0]` is
/// not zero.
pub fn factors_by_recurrence(coeffs: &[Integer]) -> Result<Vec<Integer>, EnumerateError> {
    check_constant_term(coeffs)?;
    if coeffs.len() < 2 {
        return Ok(Vec::new());
    }
    let mut table = vec![Integer::zero(), coeffs[1].clone()];
    for n in 2..coeffs.len() {
        let mut value = coeffs[n].clone();
        for i in 1..n {
            value = value + table[n - i].clone() * &coeffs[i];
        }
        table.push(value);
    }
    table.remove(0);
    Ok(table)
}
