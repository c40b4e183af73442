//! Arbitrary precision integers.
//!
//! This module provides a wrapper around `dashu::IBig` with the
//! operations needed by the radix decoder and the exact solvers.

use dashu::base::{Abs, BitTest, Gcd, Signed};
use dashu::integer::IBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// An arbitrary precision integer.
///
/// This type wraps `dashu::IBig`. Every operation is exact; nothing here
/// rounds, saturates or narrows to a machine word.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Integer(IBig);

impl Integer {
    /// Creates a new integer from an i64.
    #[must_use]
    pub fn new(value: i64) -> Self {
        Self(IBig::from(value))
    }

    /// Parses a base-10 string, with an optional leading sign.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid integer.
    pub fn from_decimal(s: &str) -> Result<Self, dashu::base::error::ParseError> {
        IBig::from_str_radix(s, 10).map(Self)
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Returns the number of bits needed to represent the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Computes the greatest common divisor (always non-negative).
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(IBig::from(self.0.clone().gcd(other.0.clone())))
    }

    /// Truncating division with remainder.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of
    /// `self`, so `self == q * divisor + r` always holds.
    ///
    /// # Panics
    ///
    /// Panics if `divisor` is zero.
    #[must_use]
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        (Self(&self.0 / &divisor.0), Self(&self.0 % &divisor.0))
    }

    /// Divides exactly.
    ///
    /// Returns `None` when `divisor` is zero or does not divide `self`.
    #[must_use]
    pub fn exact_div(&self, divisor: &Self) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let (quotient, remainder) = self.div_rem(divisor);
        remainder.is_zero().then_some(quotient)
    }

    /// Returns a reference to the inner `dashu::IBig`.
    #[must_use]
    pub fn as_inner(&self) -> &IBig {
        &self.0
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        self.0.clone().try_into().ok()
    }

    /// Computes self^exp for non-negative exp.
    #[must_use]
    pub fn pow(&self, exp: usize) -> Self {
        Self(self.0.pow(exp))
    }
}

impl Zero for Integer {
    fn zero() -> Self {
        Self(IBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Integer {
    fn one() -> Self {
        Self(IBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == IBig::ONE
    }
}

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Integer> for Integer {
    type Output = Self;

    fn add(self, rhs: &Integer) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Integer> for Integer {
    type Output = Self;

    fn sub(self, rhs: &Integer) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Integer> for Integer {
    type Output = Self;

    fn mul(self, rhs: &Integer) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Div<&Integer> for Integer {
    type Output = Self;

    fn div(self, rhs: &Integer) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<u32> for Integer {
    fn from(value: u32) -> Self {
        Self(IBig::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(IBig::from(value))
    }
}

impl From<IBig> for Integer {
    fn from(value: IBig) -> Self {
        Self(value)
    }
}
