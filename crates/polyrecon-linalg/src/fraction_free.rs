//! Fraction-free Gaussian elimination over the integers.
//!
//! The input is an augmented `k × (k + 1)` matrix `[A | b]`. Elimination
//! clears everything below the diagonal by cross-multiplication
//! (`row_j = row_j * pivot - row_j[i] * row_i`), which keeps every entry an
//! integer at the cost of growing bit lengths. Back-substitution then divides,
//! and each division must leave no remainder.
//!
//! Pivots are chosen by position only: the first row at or below the diagonal
//! with a nonzero entry wins. Magnitude never matters for exact arithmetic,
//! and a fixed rule keeps results reproducible.

use num_traits::Zero;
use polyrecon_integers::Integer;
use thiserror::Error;
use tracing::{debug, trace};

use crate::DenseMatrix;

/// Errors that can occur while solving an augmented system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// The matrix is not `k × (k + 1)`.
    #[error("expected an augmented k x (k + 1) matrix, got {rows} x {cols}")]
    NotAugmented {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// No row at or below the diagonal has a nonzero entry in `column`.
    #[error("singular system: no nonzero pivot in column {column}")]
    Singular {
        /// The column without a pivot.
        column: usize,
    },

    /// Back-substitution for `row` did not divide evenly.
    #[error("inexact division in back-substitution at row {row} (remainder {remainder})")]
    InexactDivision {
        /// The row whose unknown is not an integer.
        row: usize,
        /// The nonzero remainder left by the division.
        remainder: Integer,
    },
}

/// Reduces `matrix` to upper triangular form in place.
///
/// # Errors
///
/// Returns [`SolveError::NotAugmented`] for a matrix of the wrong shape and
/// [`SolveError::Singular`] when some column has no nonzero pivot candidate.
pub fn eliminate(matrix: &mut DenseMatrix<Integer>) -> Result<(), SolveError> {
    let k = check_shape(matrix)?;

    for col in 0..k {
        let pivot_row = matrix
            .find_row_from(col, col, |v| !v.is_zero())
            .ok_or(SolveError::Singular { column: col })?;

        if pivot_row != col {
            trace!(column = col, from = pivot_row, "swapping pivot row into place");
            matrix.swap_rows(col, pivot_row);
        }

        for row in col + 1..k {
            matrix.cross_multiply_row(row, col, col);
        }
    }

    debug!(
        size = k,
        peak_bits = peak_bit_len(matrix),
        "fraction-free elimination finished"
    );
    Ok(())
}

/// Solves an upper triangular augmented matrix for its unknowns.
///
/// Rows are processed bottom-up; unknown `i` is
/// `(b_i - sum_{j > i} a_ij * x_j) / a_ii`.
///
/// # Errors
///
/// Returns [`SolveError::NotAugmented`] for a matrix of the wrong shape,
/// [`SolveError::Singular`] for a zero diagonal entry, and
/// [`SolveError::InexactDivision`] when a division leaves a remainder.
pub fn back_substitute(matrix: &DenseMatrix<Integer>) -> Result<Vec<Integer>, SolveError> {
    let k = check_shape(matrix)?;
    let mut solution = vec![Integer::zero(); k];

    for i in (0..k).rev() {
        let row = matrix.row(i);
        let diagonal = &row[i];
        if diagonal.is_zero() {
            return Err(SolveError::Singular { column: i });
        }

        let sum = row[i + 1..k]
            .iter()
            .zip(&solution[i + 1..])
            .fold(Integer::zero(), |acc, (a, x)| acc + a * x);
        let numerator = &row[k] - &sum;

        let (quotient, remainder) = numerator.div_rem(diagonal);
        if !remainder.is_zero() {
            return Err(SolveError::InexactDivision { row: i, remainder });
        }
        solution[i] = quotient;
    }

    Ok(solution)
}

/// Solves the augmented system `[A | b]`, consuming the matrix.
///
/// # Errors
///
/// Propagates the errors of [`eliminate`] and [`back_substitute`]. No
/// partial solution is returned on failure.
///
/// # Examples
///
/// ```
/// use polyrecon_integers::Integer;
/// use polyrecon_linalg::{solve_augmented, DenseMatrix};
///
/// // x + y = 5, x - y = 1
/// let z = Integer::new;
/// let m = DenseMatrix::from_rows(vec![
///     vec![z(1), z(1), z(5)],
///     vec![z(1), z(-1), z(1)],
/// ]);
/// assert_eq!(solve_augmented(m).unwrap(), vec![z(3), z(2)]);
/// ```
pub fn solve_augmented(mut matrix: DenseMatrix<Integer>) -> Result<Vec<Integer>, SolveError> {
    eliminate(&mut matrix)?;
    back_substitute(&matrix)
}

fn check_shape(matrix: &DenseMatrix<Integer>) -> Result<usize, SolveError> {
    let rows = matrix.num_rows();
    let cols = matrix.num_cols();
    if cols == rows + 1 || (rows == 0 && cols == 0) {
        Ok(rows)
    } else {
        Err(SolveError::NotAugmented { rows, cols })
    }
}

fn peak_bit_len(matrix: &DenseMatrix<Integer>) -> usize {
    matrix.iter().map(Integer::bit_len).max().unwrap_or(0)
}
