//! Sample points and their encoded form.

use polyrecon_integers::{decode, DecodeError, Integer};

/// A point `(x, y)` the polynomial passes through.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sample {
    x: Integer,
    y: Integer,
}

impl Sample {
    /// Creates a sample from its coordinates.
    #[must_use]
    pub fn new(x: Integer, y: Integer) -> Self {
        Self { x, y }
    }

    /// The abscissa.
    #[must_use]
    pub fn x(&self) -> &Integer {
        &self.x
    }

    /// The ordinate.
    #[must_use]
    pub fn y(&self) -> &Integer {
        &self.y
    }
}

/// A value written as a digit string in some radix, prior to decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadixSpec {
    /// Digits, most significant first.
    pub digits: String,
    /// The radix the digits are written in.
    pub base: u32,
}

impl RadixSpec {
    /// Creates a new encoded value.
    #[must_use]
    pub fn new(digits: impl Into<String>, base: u32) -> Self {
        Self {
            digits: digits.into(),
            base,
        }
    }

    /// Decodes the digits into an exact integer.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn decode(&self) -> Result<Integer, DecodeError> {
        decode(&self.digits, self.base)
    }

    /// Decodes the value and pairs it with `x`.
    ///
    /// # Errors
    ///
    /// See [`decode`].
    pub fn into_sample(self, x: Integer) -> Result<Sample, DecodeError> {
        let y = self.decode()?;
        Ok(Sample::new(x, y))
    }
}
