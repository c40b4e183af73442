//! Recovered coefficient vectors.

use num_traits::Zero;
use polyrecon_integers::Integer;

use crate::Sample;

/// Polynomial coefficients `[a_0, a_1, ..., a_{k-1}]` in ascending powers.
///
/// Unlike a normalized polynomial, trailing zero coefficients are kept: the
/// vector always has one entry per sample it was solved from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Coefficients(Vec<Integer>);

impl Coefficients {
    /// Wraps a coefficient vector.
    #[must_use]
    pub fn new(coeffs: Vec<Integer>) -> Self {
        Self(coeffs)
    }

    /// The constant term `a_0`, the polynomial's value at zero.
    #[must_use]
    pub fn constant_term(&self) -> Option<&Integer> {
        self.0.first()
    }

    /// Number of coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no coefficients.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The degree, ignoring trailing zero coefficients.
    ///
    /// Returns `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.0.iter().rposition(|c| !c.is_zero())
    }

    /// Returns the coefficients as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Integer] {
        &self.0
    }

    /// Returns the coefficients.
    #[must_use]
    pub fn into_vec(self) -> Vec<Integer> {
        self.0
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    #[must_use]
    pub fn eval(&self, x: &Integer) -> Integer {
        let mut result = Integer::zero();
        for c in self.0.iter().rev() {
            result = result * x + c;
        }
        result
    }

    /// Returns the samples this polynomial does not pass through.
    #[must_use]
    pub fn mismatches<'a>(&self, samples: &'a [Sample]) -> Vec<&'a Sample> {
        samples
            .iter()
            .filter(|s| &self.eval(s.x()) != s.y())
            .collect()
    }
}

impl From<Vec<Integer>> for Coefficients {
    fn from(coeffs: Vec<Integer>) -> Self {
        Self::new(coeffs)
    }
}
