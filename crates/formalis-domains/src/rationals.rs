//! The rational coefficient domain.

use formalis_numbers::Rational;

use crate::traits::Coeff;

/// Rationals form a field, so exact division is true division.
impl Coeff for Rational {
    fn exact_div(&self, denom: &Self) -> Self {
        self / denom
    }
}
