//! # formalis-series
//!
//! Lazy formal power series over exact coefficient domains.
//!
//! A [`PowerSeries`] is an immutable node in an expression tree built from
//! primitive sources (finite coefficient lists, unbounded rules) and the
//! algebraic combinators: negation, addition, subtraction, scalar
//! multiplication, Cauchy-product multiplication, division, and
//! composition. Nothing is computed at construction time; pulling the
//! `n`-th coefficient drives a single coefficient-by-coefficient pass over
//! the whole tree, in increasing index order.
//!
//! Every series is conceptually infinite. Finite sources continue with the
//! domain zero forever, and no combinator ever terminates a traversal.
//! A series hands out as many independent traversals as asked for; each
//! one owns its private memo buffers, so the same node can participate in
//! several expressions at once.
//!
//! ```rust,ignore
//! use formalis_series::PowerSeries;
//! use formalis_numbers::Integer;
//!
//! // Ways to make change of 99 cents from US coins.
//! let coin = |k| &PowerSeries::<Integer>::one() / &(PowerSeries::one() - PowerSeries::z_pow(k));
//! let change = coin(1) * coin(5) * coin(10) * coin(25);
//! assert_eq!(change.nth(99)?, Integer::new(213));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod ops;
pub mod series;

#[cfg(test)]
mod proptests;

pub use cursor::Coeffs;
pub use error::SeriesError;
pub use series::PowerSeries;
