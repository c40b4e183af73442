//! Exact polynomial solving by fraction-free elimination.

use polyrecon_linalg::{solve_augmented, SolveError};
use tracing::debug;

use crate::{augmented_matrix, Coefficients, Sample};

/// Recovers the coefficients of the degree `k - 1` polynomial through `k`
/// samples.
///
/// The samples must have distinct abscissas. The result reproduces every
/// `y_i` when evaluated at its `x_i`.
///
/// # Errors
///
/// - [`SolveError::Singular`] if two samples share an abscissa
/// - [`SolveError::InexactDivision`] if the interpolating polynomial has a
///   non-integer coefficient
pub fn solve(samples: &[Sample]) -> Result<Coefficients, SolveError> {
    let coefficients = solve_augmented(augmented_matrix(samples))?;
    debug!(k = samples.len(), "recovered polynomial coefficients");
    Ok(Coefficients::new(coefficients))
}
