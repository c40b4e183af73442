//! Dense matrix implementation.
//!
//! Interpolation systems are small and completely filled, so a flat
//! row-major buffer is all that is needed.

use std::ops::{Index, IndexMut, Mul, Sub};

use num_traits::{One, Zero};

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl<R: Zero + Clone> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows do not all have the same length.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        if rows.is_empty() {
            return Self::zeros(0, 0);
        }
        let num_rows = rows.len();
        let num_cols = rows[0].len();
        let data: Vec<R> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self
    where
        R: One,
    {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Matrix-vector multiply: y = A * x.
    ///
    /// # Panics
    ///
    /// Panics if `x` does not have one entry per column.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R>
    where
        R: Mul<Output = R>,
    {
        assert_eq!(x.len(), self.num_cols);
        (0..self.num_rows)
            .map(|row| {
                self.row(row)
                    .iter()
                    .zip(x.iter())
                    .fold(R::zero(), |acc, (a, b)| acc + a.clone() * b.clone())
            })
            .collect()
    }
}

impl<R> DenseMatrix<R> {
    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Iterates over the entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.data.iter()
    }

    /// Swaps two rows in-place.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        if i == j {
            return;
        }
        let i_start = i * self.num_cols;
        let j_start = j * self.num_cols;
        for k in 0..self.num_cols {
            self.data.swap(i_start + k, j_start + k);
        }
    }

    /// Returns the first row in `start..num_rows` whose entry in `col`
    /// satisfies `pred`.
    pub fn find_row_from(&self, start: usize, col: usize, pred: impl Fn(&R) -> bool) -> Option<usize> {
        (start..self.num_rows).find(|&row| pred(&self[(row, col)]))
    }
}

impl<R> DenseMatrix<R>
where
    R: Clone,
    for<'a> &'a R: Mul<&'a R, Output = R>,
    R: Sub<Output = R>,
{
    /// Cross-multiplies `target` against `source` from column `from` on:
    /// `row[target] = row[target] * row[source][from] - row[source] * row[target][from]`.
    ///
    /// Afterwards `row[target][from]` is zero, and no division was needed.
    pub fn cross_multiply_row(&mut self, target: usize, source: usize, from: usize) {
        let pivot = self[(source, from)].clone();
        let factor = self[(target, from)].clone();
        for k in from..self.num_cols {
            let scaled = &self[(target, k)] * &pivot;
            let correction = &self[(source, k)] * &factor;
            self[(target, k)] = scaled - correction;
        }
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}
