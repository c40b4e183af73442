//! Reconstruction strategies and surplus checking.

use num_traits::Zero;
use polyrecon_integers::Integer;
use tracing::{info, warn};

use crate::{interpolate_at, solve, Coefficients, ReconstructError, Sample};

/// How the polynomial is recovered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Solve the Vandermonde system for integer coefficients.
    #[default]
    Elimination,
    /// Evaluate the interpolant directly; coefficients may be rational.
    Lagrange,
}

/// A recovered polynomial.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reconstruction {
    /// Integer coefficients from [`solve`].
    Polynomial(Coefficients),
    /// The defining samples, evaluated on demand by [`interpolate_at`].
    Interpolant(Vec<Sample>),
}

/// A surplus sample that disagrees with the reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// The sample as decoded from the input.
    pub sample: Sample,
    /// What the reconstruction gives at `sample.x()`, or `None` when that
    /// value is not an integer.
    pub predicted: Option<Integer>,
}

/// Recovers the polynomial through `samples` with the given strategy.
///
/// # Errors
///
/// [`Strategy::Elimination`] fails as [`solve`] does. [`Strategy::Lagrange`]
/// fails on an empty or duplicated sample set.
pub fn reconstruct(samples: &[Sample], strategy: Strategy) -> Result<Reconstruction, ReconstructError> {
    if samples.is_empty() {
        return Err(ReconstructError::NoSamples);
    }
    match strategy {
        Strategy::Elimination => Ok(Reconstruction::Polynomial(solve(samples)?)),
        Strategy::Lagrange => {
            // Validates distinctness up front
            interpolate_at(samples, samples[0].x())?;
            Ok(Reconstruction::Interpolant(samples.to_vec()))
        }
    }
}

impl Reconstruction {
    /// The polynomial's value at `x`.
    ///
    /// # Errors
    ///
    /// For an interpolant, [`ReconstructError::NonIntegralValue`] if the
    /// value is not an integer.
    pub fn value_at(&self, x: &Integer) -> Result<Integer, ReconstructError> {
        match self {
            Self::Polynomial(coefficients) => Ok(coefficients.eval(x)),
            Self::Interpolant(samples) => interpolate_at(samples, x),
        }
    }

    /// The constant term `a_0`.
    ///
    /// # Errors
    ///
    /// See [`Reconstruction::value_at`].
    pub fn constant_term(&self) -> Result<Integer, ReconstructError> {
        match self {
            Self::Polynomial(coefficients) => coefficients
                .constant_term()
                .cloned()
                .ok_or(ReconstructError::NoSamples),
            Self::Interpolant(_) => self.value_at(&Integer::zero()),
        }
    }

    /// The coefficient vector, when it was solved for.
    #[must_use]
    pub fn coefficients(&self) -> Option<&Coefficients> {
        match self {
            Self::Polynomial(coefficients) => Some(coefficients),
            Self::Interpolant(_) => None,
        }
    }
}

/// Evaluates `reconstruction` at every surplus sample and returns the ones
/// it does not reproduce.
///
/// # Errors
///
/// Only errors other than a non-integral prediction are returned; a
/// non-integral prediction is itself a mismatch.
pub fn check_surplus(
    reconstruction: &Reconstruction,
    surplus: &[Sample],
) -> Result<Vec<Mismatch>, ReconstructError> {
    let mut mismatches = Vec::new();
    for sample in surplus {
        let predicted = match reconstruction.value_at(sample.x()) {
            Ok(value) if &value == sample.y() => continue,
            Ok(value) => Some(value),
            Err(ReconstructError::NonIntegralValue { .. }) => None,
            Err(other) => return Err(other),
        };
        warn!(
            x = %sample.x(),
            decoded = %sample.y(),
            predicted = ?predicted.as_ref().map(ToString::to_string),
            "surplus sample disagrees with reconstruction"
        );
        mismatches.push(Mismatch {
            sample: sample.clone(),
            predicted,
        });
    }
    info!(
        checked = surplus.len(),
        mismatched = mismatches.len(),
        "surplus check finished"
    );
    Ok(mismatches)
}
