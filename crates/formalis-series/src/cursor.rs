//! Coefficient cursors.
//!
//! A [`Coeffs`] cursor is one traversal of a series expression tree. It is
//! built by walking the tree once and giving every node fresh per-traversal
//! state: the convolution combinators get their history buffers, sources get
//! their own iteration of the underlying rule. Nothing is shared between
//! cursors, so any number of them can walk the same tree at once.
//!
//! Causality discipline: to produce coefficient `n`, a cursor pulls exactly
//! coefficient `n` from each upstream cursor (never further ahead), and the
//! recursive combinators additionally re-read their own previously produced
//! coefficients `0..n` from their buffers.

use num_traits::Zero;

use formalis_domains::Coeff;

use crate::error::SeriesError;
use crate::series::{MapFn, Node, PowerSeries};

/// One traversal of a series: an unbounded cursor over its coefficients.
///
/// As an [`Iterator`], it yields `Result` coefficients and never returns
/// `None`. After the first error, the cursor is poisoned and repeats the
/// same error forever.
pub struct Coeffs<C: Coeff> {
    state: State<C>,
    failed: Option<SeriesError>,
}

/// Per-traversal evaluation state, one variant per node kind.
enum State<C: Coeff> {
    /// Remaining explicit coefficients; the domain zero once exhausted.
    Finite { items: std::vec::IntoIter<C> },
    /// A private iteration of the node's rule.
    Rule {
        items: Box<dyn Iterator<Item = Result<C, SeriesError>>>,
    },
    Mapped {
        inner: Box<Coeffs<C>>,
        map: MapFn<C>,
    },
    Sum {
        lhs: Box<Coeffs<C>>,
        rhs: Box<Coeffs<C>>,
    },
    Difference {
        lhs: Box<Coeffs<C>>,
        rhs: Box<Coeffs<C>>,
    },
    /// Cauchy product. Every coefficient pulled from either operand is
    /// buffered, because emitting index `n` re-reads all of `0..=n`.
    Product {
        lhs: Box<Coeffs<C>>,
        rhs: Box<Coeffs<C>>,
        lhs_seen: Vec<C>,
        rhs_seen: Vec<C>,
    },
    /// Quotient `num / den`. Solves the convolution identity
    /// `den * quotient = num` for one new quotient coefficient per pull,
    /// which needs the full divisor history and the cursor's own output
    /// history.
    Quotient {
        num: Box<Coeffs<C>>,
        den: Box<Coeffs<C>>,
        den_seen: Vec<C>,
        emitted: Vec<C>,
    },
    /// Composition `outer(inner(z))`. `powers` is the recursive power
    /// table: row `m` (computed when emitting index `m + 1`) holds, at
    /// column `k - 1`, the coefficient of `z^{m+1}` in `inner(z)^k`.
    /// Rows are never discarded; later rows are built from earlier ones.
    Substitution {
        outer: Box<Coeffs<C>>,
        inner: Box<Coeffs<C>>,
        outer_seen: Vec<C>,
        inner_seen: Vec<C>,
        powers: Vec<Vec<C>>,
    },
}

impl<C: Coeff> Coeffs<C> {
    pub(crate) fn new(series: &PowerSeries<C>) -> Self {
        let state = match &*series.node {
            Node::Finite(coeffs) => State::Finite {
                items: coeffs.clone().into_iter(),
            },
            Node::Rule(rule) => State::Rule {
                items: (**rule)(),
            },
            Node::Mapped { inner, map } => State::Mapped {
                inner: Box::new(inner.coeffs()),
                map: map.clone(),
            },
            Node::Sum(f, g) => State::Sum {
                lhs: Box::new(f.coeffs()),
                rhs: Box::new(g.coeffs()),
            },
            Node::Difference(f, g) => State::Difference {
                lhs: Box::new(f.coeffs()),
                rhs: Box::new(g.coeffs()),
            },
            Node::Product(f, g) => State::Product {
                lhs: Box::new(f.coeffs()),
                rhs: Box::new(g.coeffs()),
                lhs_seen: Vec::new(),
                rhs_seen: Vec::new(),
            },
            Node::Quotient(f, g) => State::Quotient {
                num: Box::new(f.coeffs()),
                den: Box::new(g.coeffs()),
                den_seen: Vec::new(),
                emitted: Vec::new(),
            },
            Node::Substitution(f, g) => State::Substitution {
                outer: Box::new(f.coeffs()),
                inner: Box::new(g.coeffs()),
                outer_seen: Vec::new(),
                inner_seen: Vec::new(),
                powers: Vec::new(),
            },
        };
        Self {
            state,
            failed: None,
        }
    }

    /// Pulls the next coefficient.
    ///
    /// # Errors
    ///
    /// Returns the combinator's [`SeriesError`] on the first pull that
    /// observes a violated precondition, and the same error on every pull
    /// after that.
    pub fn next_coeff(&mut self) -> Result<C, SeriesError> {
        if let Some(err) = &self.failed {
            return Err(err.clone());
        }
        let result = self.state.step();
        if let Err(err) = &result {
            self.failed = Some(err.clone());
        }
        result
    }
}

impl<C: Coeff> State<C> {
    fn step(&mut self) -> Result<C, SeriesError> {
        match self {
            State::Finite { items } => Ok(items.next().unwrap_or_else(C::zero)),
            State::Rule { items } => items
                .next()
                .unwrap_or_else(|| Err(SeriesError::InsufficientElements)),
            State::Mapped { inner, map } => inner.next_coeff().map(|c| (**map)(c)),
            State::Sum { lhs, rhs } => Ok(lhs.next_coeff()? + rhs.next_coeff()?),
            State::Difference { lhs, rhs } => Ok(lhs.next_coeff()? - rhs.next_coeff()?),
            State::Product {
                lhs,
                rhs,
                lhs_seen,
                rhs_seen,
            } => {
                lhs_seen.push(lhs.next_coeff()?);
                rhs_seen.push(rhs.next_coeff()?);
                let n = lhs_seen.len() - 1;
                let mut sum = C::zero();
                for i in 0..=n {
                    sum = sum + lhs_seen[i].clone() * rhs_seen[n - i].clone();
                }
                Ok(sum)
            }
            State::Quotient {
                num,
                den,
                den_seen,
                emitted,
            } => {
                if den_seen.is_empty() {
                    let leading = den.next_coeff()?;
                    if leading.is_zero() {
                        return Err(SeriesError::DivisionUndefined);
                    }
                    den_seen.push(leading);
                    let first = num.next_coeff()?.exact_div(&den_seen[0]);
                    emitted.push(first.clone());
                    return Ok(first);
                }
                let n = emitted.len();
                den_seen.push(den.next_coeff()?);
                // Partial convolution over the coefficients already fixed:
                // den * emitted agrees with num below index n, so the new
                // quotient term is whatever balances index n.
                let mut partial = C::zero();
                for i in 0..n {
                    partial = partial + emitted[i].clone() * den_seen[n - i].clone();
                }
                let value = (num.next_coeff()? - partial).exact_div(&den_seen[0]);
                emitted.push(value.clone());
                Ok(value)
            }
            State::Substitution {
                outer,
                inner,
                outer_seen,
                inner_seen,
                powers,
            } => {
                if inner_seen.is_empty() {
                    let inner0 = inner.next_coeff()?;
                    if !inner0.is_zero() {
                        return Err(SeriesError::CompositionUndefined);
                    }
                    inner_seen.push(inner0);
                    let outer0 = outer.next_coeff()?;
                    outer_seen.push(outer0.clone());
                    return Ok(outer0);
                }
                let n = inner_seen.len();
                outer_seen.push(outer.next_coeff()?);
                inner_seen.push(inner.next_coeff()?);
                // row[k - 1] = [z^n] inner^k for k = 1..=n, built from the
                // earlier rows: [z^n] g^k = sum_i g_i * [z^{n-i}] g^{k-1},
                // with i capped at n - k + 1 because g^{k-1} has no terms
                // below z^{k-1}.
                let mut row = vec![C::zero(); n];
                row[0] = inner_seen[n].clone();
                for k in 2..=n {
                    for i in 1..=(n - k + 1) {
                        row[k - 1] = row[k - 1].clone()
                            + inner_seen[i].clone() * powers[n - i - 1][k - 2].clone();
                    }
                }
                let mut value = C::zero();
                for m in 1..=n {
                    value = value + outer_seen[m].clone() * row[m - 1].clone();
                }
                powers.push(row);
                Ok(value)
            }
        }
    }
}

impl<C: Coeff> Iterator for Coeffs<C> {
    type Item = Result<C, SeriesError>;

    /// Never returns `None`: every series is infinite.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_coeff())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formalis_numbers::Integer;

    fn ints(vs: &[i64]) -> Vec<Integer> {
        vs.iter().copied().map(Integer::new).collect()
    }

    #[test]
    fn test_cursor_is_infinite() {
        let f = PowerSeries::from_coeffs(ints(&[1, 2]));
        let mut cursor = f.coeffs();
        for _ in 0..1000 {
            assert!(cursor.next().is_some());
        }
    }

    #[test]
    fn test_poisoned_cursor_repeats_error() {
        let bad = PowerSeries::one() / PowerSeries::from_coeffs(ints(&[0, 1]));
        let mut cursor = bad.coeffs();
        assert_eq!(cursor.next_coeff(), Err(SeriesError::DivisionUndefined));
        assert_eq!(cursor.next_coeff(), Err(SeriesError::DivisionUndefined));
        assert_eq!(cursor.next_coeff(), Err(SeriesError::DivisionUndefined));
    }

    #[test]
    fn test_product_buffers_pull_upstream_once_per_index() {
        // A rule whose iteration order would expose double pulls: the
        // naturals convolved with themselves. (f*f)_n = sum i*(n-i).
        let naturals = PowerSeries::from_rule(|| (0i64..).map(Integer::new));
        let square = &naturals * &naturals;
        let expected: Vec<Integer> = (0..8i64)
            .map(|k| Integer::new((0..=k).map(|i| i * (k - i)).sum()))
            .collect();
        assert_eq!(square.take(8).unwrap(), expected);
    }
}
