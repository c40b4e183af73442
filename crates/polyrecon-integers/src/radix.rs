//! Radix decoding of digit strings.
//!
//! Digits use the alphabet `0-9` followed by `a-z` (case-insensitive), so a
//! base `b` string may contain the first `b` symbols of that alphabet. The
//! value is accumulated most-significant digit first as
//! `total = total * base + digit`, entirely in arbitrary precision.

use num_traits::Zero;
use thiserror::Error;

use crate::Integer;

/// Smallest supported radix.
pub const MIN_RADIX: u32 = 2;

/// Largest supported radix (ten digits plus twenty-six letters).
pub const MAX_RADIX: u32 = 36;

/// Errors produced while decoding a digit string.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The requested base lies outside `MIN_RADIX..=MAX_RADIX`.
    #[error("invalid base {base}: expected a base between 2 and 36")]
    InvalidBase {
        /// The rejected base.
        base: u32,
    },

    /// A character is not a legal digit for the declared base.
    #[error("invalid digit {digit:?} at position {position} for base {base}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset of the offending digit.
        position: usize,
        /// The base the string was declared in.
        base: u32,
    },
}

/// Decodes `digits`, written in `base`, into an exact integer.
///
/// The empty string decodes to zero.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase`] if `base` is outside `2..=36`, and
/// [`DecodeError::InvalidDigit`] for the first character that is not a digit
/// of that base.
///
/// # Examples
///
/// ```
/// use polyrecon_integers::{decode, Integer};
///
/// assert_eq!(decode("ff", 16).unwrap(), Integer::new(255));
/// assert_eq!(decode("Zz", 36).unwrap(), Integer::new(1295));
/// assert!(decode("1z", 10).is_err());
/// ```
pub fn decode(digits: &str, base: u32) -> Result<Integer, DecodeError> {
    if !(MIN_RADIX..=MAX_RADIX).contains(&base) {
        return Err(DecodeError::InvalidBase { base });
    }

    let radix = Integer::from(base);
    let mut total = Integer::zero();
    for (position, ch) in digits.chars().enumerate() {
        let value = digit_value(ch, base).ok_or(DecodeError::InvalidDigit {
            digit: ch,
            position,
            base,
        })?;
        total = total * &radix + Integer::from(value);
    }
    Ok(total)
}

/// Maps a character to its numeral value if it is a digit of `base`.
fn digit_value(ch: char, base: u32) -> Option<u32> {
    // `to_digit(36)` covers the whole alphabet and folds case
    ch.to_digit(MAX_RADIX).filter(|&value| value < base)
}
