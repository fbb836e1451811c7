//! The integer coefficient domain.

use formalis_numbers::Integer;

use crate::traits::Coeff;

/// Integers divide by flooring, matching ordinary integer generating
/// functions where every division in a recurrence is known to be exact.
impl Coeff for Integer {
    fn exact_div(&self, denom: &Self) -> Self {
        self.div_floor(denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_exact_div_floors() {
        assert_eq!(n(6).exact_div(&n(2)), n(3));
        assert_eq!(n(7).exact_div(&n(2)), n(3));
        assert_eq!(n(-7).exact_div(&n(2)), n(-4));
    }

    #[test]
    fn test_exact_div_inverts_multiplication() {
        let a = n(-35);
        let d = n(5);
        assert_eq!((a.clone() * d.clone()).exact_div(&d), a);
    }
}
