//! Remainder, GCD and LCM, composed from division and multiplication.
//!
//! The remainder is defined literally as `a - (a / b) * b`, so its sign
//! falls out of the division's floor-of-magnitudes rule combined with
//! subtraction's sign rules: a nonzero remainder carries the dividend's
//! sign. It is not Euclidean-normalized to non-negative.

use std::ops::Rem;

use num_traits::Zero;

use crate::arith::forward_binop;
use crate::bigint::BigInt;
use crate::error::DivideByZeroError;

impl BigInt {
    /// Computes the remainder `self - (self / divisor) * divisor`.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZeroError`] when the divisor has zero magnitude.
    pub fn checked_rem(&self, divisor: &Self) -> Result<Self, DivideByZeroError> {
        let quotient = self.checked_div(divisor)?;
        Ok(self - &(&quotient * divisor))
    }

    /// Computes the greatest common divisor by the Euclidean algorithm.
    ///
    /// When `other` has zero magnitude the result is `self` unchanged,
    /// sign included; more generally the result's sign follows the
    /// remainder chain rather than being forced positive.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        let mut a = self.clone();
        let mut b = other.clone();
        while !b.is_zero() {
            let r = &a % &b;
            a = b;
            b = r;
        }
        a
    }

    /// Computes the least common multiple as `(self * other) / gcd`.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZeroError`] when both operands are zero (the gcd
    /// then has zero magnitude).
    pub fn checked_lcm(&self, other: &Self) -> Result<Self, DivideByZeroError> {
        (self * other).checked_div(&self.gcd(other))
    }
}

impl Rem<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if the divisor has zero magnitude. Use
    /// [`BigInt::checked_rem`] to handle that case.
    fn rem(self, rhs: &BigInt) -> BigInt {
        self.checked_rem(rhs).expect("division by zero")
    }
}

forward_binop!(Rem, rem);
