//! Errors raised while pulling series coefficients.

use thiserror::Error;

/// Errors that can occur during a coefficient traversal.
///
/// All of these are raised eagerly, on the first pull that observes the
/// violated precondition, never at expression-construction time. A cursor
/// that has raised an error is poisoned: every later pull from the same
/// cursor reports the same error. Other traversals of the same series are
/// unaffected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SeriesError {
    /// Division by a series whose constant term is the domain zero.
    ///
    /// Power-series division solves `g·h = f` coefficient by coefficient,
    /// which requires dividing by `g`'s constant term at every step; a
    /// zero constant term leaves `h` unconstrained.
    #[error("division by a series whose constant term is zero")]
    DivisionUndefined,

    /// Composition whose inner series has a non-zero constant term.
    ///
    /// With `g(0) != 0`, every coefficient of `f(g(z))` would depend on
    /// infinitely many coefficients of `f` at once.
    #[error("composition with an inner series whose constant term is non-zero")]
    CompositionUndefined,

    /// A coefficient rule terminated.
    ///
    /// Rules passed to [`PowerSeries::from_rule`] must yield forever; a
    /// deliberately-bounded rule fails the traversal at the first missing
    /// coefficient.
    ///
    /// [`PowerSeries::from_rule`]: crate::PowerSeries::from_rule
    #[error("a bounded coefficient rule ran out of elements")]
    InsufficientElements,
}
