//! # polyrecon-interp
//!
//! Exact polynomial reconstruction for polyrecon.
//!
//! Given `k` samples `(x_i, y_i)` of a polynomial of degree `k - 1`, this crate
//! recovers the polynomial exactly:
//!
//! - [`solve`] builds the Vandermonde system and runs fraction-free
//!   elimination, yielding integer [`Coefficients`]
//! - [`interpolate_at`] evaluates the interpolating polynomial at any point
//!   by exact Lagrange interpolation, which also works when the higher
//!   coefficients are not integers
//! - [`ShareSet`] reads the JSON input document and decodes its
//!   radix-encoded values into [`Sample`]s
//!
//! ## Example
//!
//! ```
//! use polyrecon_interp::{solve, Sample};
//! use polyrecon_integers::Integer;
//!
//! // y = 3 + 2x + x^2
//! let samples: Vec<Sample> = (1..=3)
//!     .map(|x| Sample::new(Integer::new(x), Integer::new(3 + 2 * x + x * x)))
//!     .collect();
//! let coefficients = solve(&samples).unwrap();
//! assert_eq!(coefficients.constant_term(), Some(&Integer::new(3)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coefficients;
pub mod error;
pub mod input;
pub mod lagrange;
pub mod reconstruct;
pub mod sample;
pub mod solver;
pub mod vandermonde;

#[cfg(test)]
mod proptests;

pub use coefficients::Coefficients;
pub use error::ReconstructError;
pub use input::{BaseField, EncodedValue, Keys, ShareSet};
pub use lagrange::{constant_term_at_zero, interpolate_at};
pub use reconstruct::{check_surplus, reconstruct, Mismatch, Reconstruction, Strategy};
pub use sample::{RadixSpec, Sample};
pub use solver::solve;
pub use vandermonde::augmented_matrix;
