//! Vandermonde systems for interpolation.

use polyrecon_integers::Integer;
use polyrecon_linalg::DenseMatrix;

use crate::Sample;

/// Builds the augmented `k × (k + 1)` matrix for `k` samples.
///
/// Row `i` is `[x_i^0, x_i^1, ..., x_i^(k-1), y_i]`, with every power computed
/// exactly. Its solution is the coefficient vector in ascending powers.
#[must_use]
pub fn augmented_matrix(samples: &[Sample]) -> DenseMatrix<Integer> {
    let k = samples.len();
    let rows = samples
        .iter()
        .map(|sample| {
            let mut row: Vec<Integer> = (0..k).map(|power| sample.x().pow(power)).collect();
            row.push(sample.y().clone());
            row
        })
        .collect();
    DenseMatrix::from_rows(rows)
}
