//! The coefficient-domain contract.
//!
//! Every combinator in the series engine is generic over a single type
//! parameter implementing [`Coeff`]. Carrying the domain in the type keeps
//! it explicit at every node of an expression tree: an expression mixing
//! two incompatible domains simply does not type-check, so there is no
//! runtime domain inspection anywhere in the engine.

use std::fmt::Debug;
use std::ops::{Neg, Sub};

use num_traits::{One, Zero};

/// A coefficient domain for formal power series.
///
/// # Laws
///
/// - `Zero`/`One` and the ring operations behave as usual.
/// - `exact_div` is the domain's notion of exact division: true division
///   for fields, floor division for the integers. For every `a` and
///   non-zero `d`, `exact_div(a * d, d) == a`.
///
/// The `Send + Sync + 'static` bounds let series nodes be shared freely
/// between expression trees; traversal state is never shared, so no
/// synchronization is involved.
pub trait Coeff:
    Zero + One + Sub<Output = Self> + Neg<Output = Self> + Clone + Eq + Debug + Send + Sync + 'static
{
    /// Divides `self` by `denom`, exactly for this domain.
    ///
    /// # Panics
    ///
    /// May panic if `denom` is zero. Callers are expected to check first;
    /// the series engine always does.
    fn exact_div(&self, denom: &Self) -> Self;
}
