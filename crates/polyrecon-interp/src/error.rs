//! Errors raised while reading samples and reconstructing polynomials.

use polyrecon_integers::{DecodeError, Integer};
use polyrecon_linalg::SolveError;
use thiserror::Error;

/// Everything that can stop a reconstruction.
#[derive(Debug, Error)]
pub enum ReconstructError {
    /// A record's value could not be decoded.
    #[error("record {index}: {source}")]
    Decode {
        /// Index of the record in the input document.
        index: u64,
        /// The decoder's error.
        #[source]
        source: DecodeError,
    },

    /// The linear system could not be solved exactly.
    #[error(transparent)]
    Solve(#[from] SolveError),

    /// There is nothing to interpolate.
    #[error("no samples to interpolate")]
    NoSamples,

    /// Two samples share an abscissa, so the interpolant is not unique.
    #[error("duplicate abscissa x = {x}")]
    DuplicateAbscissa {
        /// The repeated abscissa.
        x: Integer,
    },

    /// The interpolating polynomial does not take an integer value at `x`.
    #[error("interpolated value at x = {x} is {numerator}/{denominator}, not an integer")]
    NonIntegralValue {
        /// Where the polynomial was evaluated.
        x: Integer,
        /// Reduced numerator.
        numerator: Integer,
        /// Reduced, positive denominator.
        denominator: Integer,
    },

    /// The document names `k = 0`.
    #[error("threshold k must be at least 1")]
    ZeroThreshold,

    /// The document asks for more samples than it declares.
    #[error("threshold k = {k} exceeds the number of records n = {n}")]
    ThresholdExceedsRecords {
        /// Required samples.
        k: usize,
        /// Declared samples.
        n: usize,
    },

    /// A record needed by the solver is absent.
    #[error("record {index} is missing")]
    MissingRecord {
        /// The absent index.
        index: u64,
    },

    /// A record key is not a positive integer in canonical decimal form.
    #[error("record key {key:?} is not a positive integer")]
    InvalidIndex {
        /// The offending key.
        key: String,
    },

    /// Two records share an index.
    #[error("record {index} appears more than once")]
    DuplicateIndex {
        /// The repeated index.
        index: u64,
    },

    /// A record's base is a string that is not a number.
    #[error("record {index}: base {raw:?} is not a number")]
    InvalidBaseField {
        /// Index of the record.
        index: u64,
        /// The text given as base.
        raw: String,
    },

    /// The input document is not well-formed.
    #[error("malformed input document: {0}")]
    Json(#[from] serde_json::Error),
}
