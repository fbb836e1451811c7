//! # formalis-enumerate
//!
//! Combinatorial enumerators and an alternative, non-lazy route to
//! generating-function coefficients.
//!
//! The series engine in `formalis-series` extracts coefficients by lazy
//! streaming. This crate approaches the same numbers combinatorially: the
//! coefficients of `g/(1-g)` are sums over integer compositions (or,
//! after collapsing repeats, over integer partitions weighted by
//! multiset-permutation counts), and can also be built by a direct
//! recurrence. The engine does not depend on anything here; this crate is
//! a consumer of the engine's contract, used for cross-checking and
//! exploration.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bounded;
pub mod compositions;
pub mod error;
pub mod factors;
pub mod multisets;
pub mod partitions;

pub use bounded::{nth, take};
pub use compositions::{compositions, Compositions, Parts};
pub use error::EnumerateError;
pub use factors::{factors_by_compositions, factors_by_partitions, factors_by_recurrence};
pub use multisets::multiset_permutations;
pub use partitions::{partitions, Partitions};
