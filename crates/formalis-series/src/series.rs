//! The series expression tree.
//!
//! A [`PowerSeries`] is a cheaply-clonable handle to an immutable node.
//! Composite nodes hold handles to their operands, so an expression like
//! `one() / (one() - z())` is a small tree of shared nodes. The tree
//! carries no traversal state at all: state lives in the cursors handed
//! out by [`PowerSeries::coeffs`].

use std::sync::Arc;

use formalis_domains::Coeff;
use formalis_numbers::{Integer, Rational};
use num_traits::{One, Zero};

use crate::cursor::Coeffs;
use crate::error::SeriesError;

/// A restartable coefficient rule: each call produces a fresh, independent
/// iteration from index 0.
pub(crate) type RuleFn<C> =
    Arc<dyn Fn() -> Box<dyn Iterator<Item = Result<C, SeriesError>>> + Send + Sync>;

/// A pure per-coefficient transform.
pub(crate) type MapFn<C> = Arc<dyn Fn(C) -> C + Send + Sync>;

/// One node of a series expression tree.
pub(crate) enum Node<C: Coeff> {
    /// Explicit leading coefficients, then the domain zero forever.
    Finite(Vec<C>),
    /// An arbitrary restartable rule, deferred to per traversal.
    Rule(RuleFn<C>),
    /// A pure per-coefficient transform of one upstream series.
    Mapped {
        inner: PowerSeries<C>,
        map: MapFn<C>,
    },
    /// Elementwise sum of two series.
    Sum(PowerSeries<C>, PowerSeries<C>),
    /// Elementwise difference of two series.
    Difference(PowerSeries<C>, PowerSeries<C>),
    /// Cauchy product of two series.
    Product(PowerSeries<C>, PowerSeries<C>),
    /// Quotient of two series, solved coefficient by coefficient.
    Quotient(PowerSeries<C>, PowerSeries<C>),
    /// Composition `outer(inner(z))`.
    Substitution(PowerSeries<C>, PowerSeries<C>),
}

/// A formal power series with coefficients in the domain `C`.
///
/// Values are immutable once constructed and cheap to clone; the algebraic
/// operators take their operands by reference or by value and never mutate
/// them. See the crate docs for the evaluation model.
pub struct PowerSeries<C: Coeff> {
    pub(crate) node: Arc<Node<C>>,
}

impl<C: Coeff> Clone for PowerSeries<C> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
        }
    }
}

impl<C: Coeff> PowerSeries<C> {
    pub(crate) fn from_node(node: Node<C>) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// A series with the given leading coefficients, continuing with the
    /// domain zero forever. This is how finite polynomials are expressed.
    #[must_use]
    pub fn from_coeffs(coeffs: Vec<C>) -> Self {
        Self::from_node(Node::Finite(coeffs))
    }

    /// The zero series.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_coeffs(Vec::new())
    }

    /// The constant series 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from_coeffs(vec![C::one()])
    }

    /// The series `z`: coefficients 0, 1, 0, 0, ...
    #[must_use]
    pub fn z() -> Self {
        Self::from_coeffs(vec![C::zero(), C::one()])
    }

    /// The series `z^k`: all zero except a 1 at index `k`.
    #[must_use]
    pub fn z_pow(k: usize) -> Self {
        let mut coeffs = vec![C::zero(); k];
        coeffs.push(C::one());
        Self::from_coeffs(coeffs)
    }

    /// A series backed by an arbitrary restartable rule.
    ///
    /// The rule is called once per traversal and must produce a fresh
    /// iteration from index 0 each time. Rules must be unbounded; if one
    /// terminates, the traversal fails with
    /// [`SeriesError::InsufficientElements`] at the first missing
    /// coefficient.
    #[must_use]
    pub fn from_rule<F, I>(rule: F) -> Self
    where
        F: Fn() -> I + Send + Sync + 'static,
        I: Iterator<Item = C> + 'static,
    {
        Self::from_fallible_rule(move || Box::new(rule().map(Ok)))
    }

    /// Rule constructor for adaptors whose upstream pulls can fail.
    pub(crate) fn from_fallible_rule<F>(rule: F) -> Self
    where
        F: Fn() -> Box<dyn Iterator<Item = Result<C, SeriesError>>> + Send + Sync + 'static,
    {
        Self::from_node(Node::Rule(Arc::new(rule)))
    }

    /// The geometric series 1/(1-z): coefficients 1, 1, 1, ...
    #[must_use]
    pub fn geometric() -> Self {
        Self::from_rule(|| std::iter::repeat_with(C::one))
    }

    /// Applies a pure transform to every coefficient.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(C) -> C + Send + Sync + 'static,
    {
        Self::from_node(Node::Mapped {
            inner: self.clone(),
            map: Arc::new(f),
        })
    }

    /// Multiplies every coefficient by a domain scalar.
    #[must_use]
    pub fn scale(&self, scalar: C) -> Self {
        self.map(move |c| scalar.clone() * c)
    }

    /// Transforms every coefficient into another domain.
    ///
    /// The result is a rule-backed series over `D`; each traversal of it
    /// drives an independent traversal of `self`.
    #[must_use]
    pub fn map_domain<D, F>(&self, f: F) -> PowerSeries<D>
    where
        D: Coeff,
        F: Fn(C) -> D + Send + Sync + 'static,
    {
        let source = self.clone();
        let f = Arc::new(f);
        PowerSeries::from_fallible_rule(move || {
            let f = Arc::clone(&f);
            Box::new(source.coeffs().map(move |item| item.map(|c| (*f)(c))))
        })
    }

    /// The formal derivative: coefficient `n` is `(n+1) * f_{n+1}`.
    #[must_use]
    pub fn derivative(&self) -> Self {
        let source = self.clone();
        Self::from_fallible_rule(move || {
            let mut inner = source.coeffs();
            let mut index = 0usize;
            let mut skipped = false;
            Box::new(std::iter::from_fn(move || {
                if !skipped {
                    // The constant term does not survive differentiation.
                    if let Err(err) = inner.next_coeff() {
                        return Some(Err(err));
                    }
                    skipped = true;
                }
                index += 1;
                Some(inner.next_coeff().map(|c| c * from_usize::<C>(index)))
            }))
        })
    }

    /// A fresh, independent cursor over the coefficients.
    ///
    /// Cursors yield `Result` coefficients in increasing index order from
    /// 0 and never run out. Independent cursors over the same series do
    /// not interfere: each owns its private memo buffers.
    #[must_use]
    pub fn coeffs(&self) -> Coeffs<C> {
        Coeffs::new(self)
    }

    /// The single coefficient at index `n`.
    ///
    /// Negative indices are unrepresentable by construction.
    ///
    /// # Errors
    ///
    /// Propagates any [`SeriesError`] raised while pulling coefficients
    /// 0 through `n`.
    pub fn nth(&self, n: usize) -> Result<C, SeriesError> {
        let mut cursor = self.coeffs();
        let mut value = cursor.next_coeff()?;
        for _ in 0..n {
            value = cursor.next_coeff()?;
        }
        Ok(value)
    }

    /// The first `n` coefficients, in order.
    ///
    /// # Errors
    ///
    /// Propagates any [`SeriesError`] raised while pulling coefficients
    /// 0 through `n - 1`.
    pub fn take(&self, n: usize) -> Result<Vec<C>, SeriesError> {
        let mut cursor = self.coeffs();
        let mut out = Vec::with_capacity(n);
        for _ in 0..n {
            out.push(cursor.next_coeff()?);
        }
        Ok(out)
    }
}

impl<C: Coeff> PowerSeries<C> {
    /// Composes two series: the result is `self(inner(z))`.
    ///
    /// Well-defined only when `inner`'s constant term is the domain zero;
    /// otherwise the first coefficient pull fails with
    /// [`SeriesError::CompositionUndefined`].
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        Self::from_node(Node::Substitution(self.clone(), inner.clone()))
    }
}

impl PowerSeries<Integer> {
    /// Reinterprets an integer series over the rationals.
    #[must_use]
    pub fn to_rational(&self) -> PowerSeries<Rational> {
        self.map_domain(Rational::from_integer)
    }
}

impl PowerSeries<Rational> {
    /// The exponential series: coefficient `n` is `1/n!`.
    #[must_use]
    pub fn exp() -> Self {
        Self::from_rule(|| {
            let mut factorial = Integer::one();
            let mut index = 0u32;
            std::iter::from_fn(move || {
                if index > 0 {
                    factorial = factorial.clone() * Integer::from(i64::from(index));
                }
                index += 1;
                Some(Rational::new(Integer::one(), factorial.clone()))
            })
        })
    }

    /// The formal integral: coefficient 0 is zero, coefficient `n` is
    /// `f_{n-1} / n`. Only offered over the rationals, where the division
    /// is always exact.
    #[must_use]
    pub fn integral(&self) -> Self {
        let source = self.clone();
        Self::from_fallible_rule(move || {
            let mut inner = source.coeffs();
            let mut index = 0usize;
            Box::new(std::iter::from_fn(move || {
                index += 1;
                if index == 1 {
                    return Some(Ok(Rational::zero()));
                }
                Some(
                    inner
                        .next_coeff()
                        .map(|c| c.exact_div(&from_usize::<Rational>(index - 1))),
                )
            }))
        })
    }
}

/// Builds the domain value `n` by repeated addition of one.
pub(crate) fn from_usize<C: Coeff>(n: usize) -> C {
    let mut result = C::zero();
    for _ in 0..n {
        result = result + C::one();
    }
    result
}
