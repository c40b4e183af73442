//! # polyrecon-integers
//!
//! Arbitrary precision integer arithmetic for polyrecon.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision integers (`Integer`)
//! - Radix 2..=36 digit-string decoding (`decode`)
//!
//! ## Performance Notes
//!
//! - Small integers (fitting in a machine word) use stack allocation
//! - Large integers are heap-allocated; no operation ever narrows to a
//!   fixed-width type

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod integer;
pub mod radix;

#[cfg(test)]
mod proptests;

pub use integer::Integer;
pub use radix::{decode, DecodeError, MAX_RADIX, MIN_RADIX};
