//! # polyrecon-linalg
//!
//! Exact dense linear algebra for polyrecon.
//!
//! This crate provides:
//! - Dense row-major matrices (`DenseMatrix`)
//! - Fraction-free Gaussian elimination over `Integer`, with exact
//!   back-substitution (`solve_augmented`)
//!
//! ## Exactness
//!
//! Elimination never divides: each target row is scaled by the pivot before
//! the pivot row is subtracted, so entries stay integral and grow in bit
//! length instead. The only divisions happen during back-substitution and
//! are checked to be exact.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod dense_matrix;
pub mod fraction_free;

pub use dense_matrix::DenseMatrix;
pub use fraction_free::{back_substitute, eliminate, solve_augmented, SolveError};

#[cfg(test)]
mod tests;
