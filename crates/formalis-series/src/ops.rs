//! Algebraic operators on power series.
//!
//! All operators build a new expression node and never mutate or consume
//! their operands' structure; handles are cheap to clone, so both owned
//! and borrowed forms are provided.

use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

use formalis_domains::Coeff;

use crate::series::{Node, PowerSeries};

impl<C: Coeff> Neg for PowerSeries<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<C: Coeff> Neg for &PowerSeries<C> {
    type Output = PowerSeries<C>;

    fn neg(self) -> Self::Output {
        self.map(|c| -c)
    }
}

impl<C: Coeff> Add for PowerSeries<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_node(Node::Sum(self, rhs))
    }
}

impl<C: Coeff> Add for &PowerSeries<C> {
    type Output = PowerSeries<C>;

    fn add(self, rhs: Self) -> Self::Output {
        PowerSeries::from_node(Node::Sum(self.clone(), rhs.clone()))
    }
}

impl<C: Coeff> Sub for PowerSeries<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_node(Node::Difference(self, rhs))
    }
}

impl<C: Coeff> Sub for &PowerSeries<C> {
    type Output = PowerSeries<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        PowerSeries::from_node(Node::Difference(self.clone(), rhs.clone()))
    }
}

impl<C: Coeff> Mul for PowerSeries<C> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_node(Node::Product(self, rhs))
    }
}

impl<C: Coeff> Mul for &PowerSeries<C> {
    type Output = PowerSeries<C>;

    fn mul(self, rhs: Self) -> Self::Output {
        PowerSeries::from_node(Node::Product(self.clone(), rhs.clone()))
    }
}

impl<C: Coeff> Div for PowerSeries<C> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self::from_node(Node::Quotient(self, rhs))
    }
}

impl<C: Coeff> Div for &PowerSeries<C> {
    type Output = PowerSeries<C>;

    fn div(self, rhs: Self) -> Self::Output {
        PowerSeries::from_node(Node::Quotient(self.clone(), rhs.clone()))
    }
}

/// Summing any number of series folds them over `+`, seeded with the zero
/// series; an empty iterator yields the zero series.
impl<C: Coeff> Sum for PowerSeries<C> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, series| acc + series)
    }
}
