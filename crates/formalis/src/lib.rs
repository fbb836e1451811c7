//! # Formalis
//!
//! Lazy formal power series for exact combinatorial computation.
//!
//! Formalis lets a caller phrase a counting problem as an algebraic
//! expression over generating functions and extract any coefficient on
//! demand, without ever materializing an infinite object.
//!
//! - **Exact domains**: arbitrary precision integers and rationals
//! - **Lazy algebra**: add, subtract, scale, multiply, divide, compose
//! - **Independent traversals**: one series, any number of cursors
//! - **Combinatorial cross-checks**: compositions, partitions, multiset
//!   permutation counts
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use formalis::prelude::*;
//!
//! let pennies = PowerSeries::<Integer>::one() / (PowerSeries::one() - PowerSeries::z());
//! println!("{}", pennies.nth(99)?);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use formalis_domains as domains;
pub use formalis_enumerate as enumerate;
pub use formalis_numbers as numbers;
pub use formalis_series as series;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use formalis_domains::Coeff;
    pub use formalis_numbers::{Integer, Rational};
    pub use formalis_series::{Coeffs, PowerSeries, SeriesError};
}
