//! # polyrecon
//!
//! Exact reconstruction of a polynomial's constant term from sample points
//! whose values are written in arbitrary bases.
//!
//! ## Pipeline
//!
//! - **Decoding**: digit strings in bases 2..=36 become arbitrary precision
//!   integers
//! - **Solving**: a Vandermonde system is reduced by fraction-free Gaussian
//!   elimination, so no intermediate value is ever rounded
//! - **Reporting**: the constant term `a_0` is printed in base 10
//!
//! ## Quick Start
//!
//! ```rust
//! use polyrecon::prelude::*;
//!
//! let set = ShareSet::from_json(r#"{
//!     "keys": { "n": 3, "k": 2 },
//!     "1": { "base": "10", "value": "7" },
//!     "2": { "base": "2", "value": "1010" },
//!     "3": { "base": "16", "value": "d" }
//! }"#).unwrap();
//!
//! // y = 4 + 3x
//! let coefficients = solve(&set.threshold_samples().unwrap()).unwrap();
//! assert_eq!(coefficients.constant_term(), Some(&Integer::new(4)));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod cli;

pub use polyrecon_integers as integers;
pub use polyrecon_interp as interp;
pub use polyrecon_linalg as linalg;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use polyrecon_integers::{decode, DecodeError, Integer};
    pub use polyrecon_interp::{
        check_surplus, constant_term_at_zero, interpolate_at, reconstruct, solve, Coefficients,
        ReconstructError, Reconstruction, Sample, ShareSet, Strategy,
    };
    pub use polyrecon_linalg::{DenseMatrix, SolveError};
}
