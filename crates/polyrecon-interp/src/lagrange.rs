//! Exact Lagrange interpolation.
//!
//! Evaluates the interpolating polynomial at a single point without solving
//! for its coefficients:
//!
//! ```text
//! P(x) = sum_i y_i * prod_{j != i} (x - x_j) / (x_i - x_j)
//! ```
//!
//! The sum is accumulated as one integer fraction, reduced by the gcd after
//! every term, and divided exactly at the end. This still yields the true
//! value when the polynomial's coefficients are rational, as long as the
//! value itself is an integer.

use std::collections::BTreeSet;

use num_traits::{One, Zero};
use polyrecon_integers::Integer;
use tracing::trace;

use crate::{ReconstructError, Sample};

/// Evaluates the polynomial through `samples` at `x`.
///
/// # Errors
///
/// - [`ReconstructError::NoSamples`] for an empty sample set
/// - [`ReconstructError::DuplicateAbscissa`] if two samples share an abscissa
/// - [`ReconstructError::NonIntegralValue`] if `P(x)` is not an integer
pub fn interpolate_at(samples: &[Sample], x: &Integer) -> Result<Integer, ReconstructError> {
    if samples.is_empty() {
        return Err(ReconstructError::NoSamples);
    }
    check_distinct(samples)?;

    let mut numerator = Integer::zero();
    let mut denominator = Integer::one();

    for (i, si) in samples.iter().enumerate() {
        let mut term_num = si.y().clone();
        let mut term_den = Integer::one();
        for (j, sj) in samples.iter().enumerate() {
            if i != j {
                term_num = term_num * (x - sj.x());
                term_den = term_den * (si.x() - sj.x());
            }
        }

        numerator = numerator * &term_den + term_num * &denominator;
        denominator = denominator * term_den;

        let g = numerator.gcd(&denominator);
        if !g.is_one() {
            numerator = numerator / &g;
            denominator = denominator / &g;
        }
    }

    if denominator.is_negative() {
        numerator = -numerator;
        denominator = -denominator;
    }
    trace!(bits = denominator.bit_len(), "reduced Lagrange denominator");

    match numerator.exact_div(&denominator) {
        Some(value) => Ok(value),
        None => Err(ReconstructError::NonIntegralValue {
            x: x.clone(),
            numerator,
            denominator,
        }),
    }
}

/// The interpolating polynomial's constant term, `P(0)`.
///
/// # Errors
///
/// See [`interpolate_at`].
pub fn constant_term_at_zero(samples: &[Sample]) -> Result<Integer, ReconstructError> {
    interpolate_at(samples, &Integer::zero())
}

fn check_distinct(samples: &[Sample]) -> Result<(), ReconstructError> {
    let mut seen = BTreeSet::new();
    for sample in samples {
        if !seen.insert(sample.x()) {
            return Err(ReconstructError::DuplicateAbscissa {
                x: sample.x().clone(),
            });
        }
    }
    Ok(())
}
