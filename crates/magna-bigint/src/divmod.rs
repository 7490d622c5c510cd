//! Truncating division and exponentiation.
//!
//! Division computes the floor quotient of the two magnitudes by binary
//! search and applies the XOR sign afterwards. For integers that is the
//! same result as truncation toward zero. Each search step performs a full
//! multiplication, so the cost is `O(log |a|)` multiplications; correct but
//! deliberately not asymptotically optimal.

use std::cmp::Ordering;
use std::ops::Div;

use num_traits::{One, Zero};

use crate::arith::forward_binop;
use crate::bigint::BigInt;
use crate::error::DivideByZeroError;

impl BigInt {
    /// Divides `self` by `divisor`, truncating toward zero.
    ///
    /// # Errors
    ///
    /// Returns [`DivideByZeroError`] when the divisor has zero magnitude.
    pub fn checked_div(&self, divisor: &Self) -> Result<Self, DivideByZeroError> {
        if divisor.is_zero() {
            return Err(DivideByZeroError);
        }
        let negative = self.negative != divisor.negative;
        let dividend = self.abs();
        let divisor = divisor.abs();

        // Binary search for the greatest mid with mid * |b| <= |a|.
        let one = Self::one();
        let mut left = Self::zero();
        let mut right = dividend.clone();
        let mut ans = Self::zero();
        while left.cmp_magnitude(&right) != Ordering::Greater {
            let mut mid = &left + &right;
            mid.halve();
            let prod = &mid * &divisor;
            if prod.cmp_magnitude(&dividend) == Ordering::Greater {
                right = &mid - &one;
            } else {
                left = &mid + &one;
                ans = mid;
            }
        }

        if !ans.is_zero() {
            ans.negative = negative;
        }
        Ok(ans)
    }

    /// Raises `self` to the power `exp` by iterative squaring.
    ///
    /// The exponent's sign is ignored; it is treated as non-negative. A
    /// zero-magnitude exponent yields one (including `0^0 == 1`).
    #[must_use]
    pub fn pow(&self, exp: &Self) -> Self {
        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = exp.abs();
        while !exp.is_zero() {
            // Odd test on the least significant group; valid because the
            // radix is even.
            if exp.groups[exp.groups.len() - 1] % 2 == 1 {
                result = &result * &base;
            }
            base = &base * &base;
            exp.halve();
        }
        result
    }
}

impl Div<&BigInt> for &BigInt {
    type Output = BigInt;

    /// # Panics
    ///
    /// Panics if the divisor has zero magnitude. Use
    /// [`BigInt::checked_div`] to handle that case.
    fn div(self, rhs: &BigInt) -> BigInt {
        self.checked_div(rhs).expect("division by zero")
    }
}

forward_binop!(Div, div);
