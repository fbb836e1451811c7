//! Errors for the combinatorial extraction helpers.

use thiserror::Error;

/// Errors raised by the enumerators and bounded accessors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EnumerateError {
    /// Composition factors are only defined for a series whose constant
    /// term is zero; otherwise the underlying geometric sum diverges.
    #[error("composition factors require a zero constant term")]
    NonZeroConstantTerm,

    /// A bounded sequence ended before the requested element.
    #[error("not enough elements: wanted {wanted}, sequence ended after {got}")]
    InsufficientElements {
        /// How many elements were asked for.
        wanted: usize,
        /// How many the sequence actually produced.
        got: usize,
    },
}
