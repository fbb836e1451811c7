//! # formalis-domains
//!
//! Coefficient domains for the Formalis power-series engine.
//!
//! A series is only meaningful relative to the numeric domain its
//! coefficients are drawn from. This crate defines that contract as the
//! [`Coeff`] trait and implements it for the two exact domains the engine
//! supports: arbitrary precision integers (with floor division) and
//! arbitrary precision rationals (with true division).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integers;
pub mod rationals;
pub mod traits;

pub use traits::Coeff;
