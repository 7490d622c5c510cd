//! Additive and multiplicative cores.
//!
//! Addition and subtraction delegate to each other on a sign mismatch, so
//! only same-sign magnitude arithmetic is ever performed. Multiplication is
//! schoolbook over digit groups with a wide accumulator. The private
//! `halve` primitive divides a magnitude by two in place; it exists for the
//! binary-search division and for exponent halving.

use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

use num_traits::Zero;

use crate::bigint::{BigInt, BASE};

/// Adds two magnitudes least-significant-first with carry in radix 10000.
fn add_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().max(b.len()) + 1);
    let mut x = a.iter().rev().copied();
    let mut y = b.iter().rev().copied();
    let mut carry = 0;
    loop {
        match (x.next(), y.next()) {
            (None, None) if carry == 0 => break,
            (gx, gy) => {
                let sum = carry + gx.unwrap_or(0) + gy.unwrap_or(0);
                out.push(sum % BASE);
                carry = sum / BASE;
            }
        }
    }
    out.reverse();
    out
}

/// Subtracts `b` from `a` with borrow. Requires `|a| >= |b|`.
fn sub_magnitudes(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut y = b.iter().rev().copied();
    let mut borrow = 0;
    for &gx in a.iter().rev() {
        let gy = y.next().unwrap_or(0);
        let mut diff = i64::from(gx) - borrow - i64::from(gy);
        if diff < 0 {
            diff += i64::from(BASE);
            borrow = 1;
        } else {
            borrow = 0;
        }
        out.push(diff as u32);
    }
    out.reverse();
    out
}

impl BigInt {
    /// Halves the magnitude in place, discarding the remainder.
    ///
    /// The traversal runs most-significant-first: the running remainder
    /// carries *toward* the least significant end, the opposite direction
    /// from addition's carry.
    pub(crate) fn halve(&mut self) {
        let mut carry = 0;
        for group in &mut self.groups {
            let local = carry * BASE + *group;
            *group = local / 2;
            carry = local % 2;
        }
        self.normalize();
    }

    /// Returns a copy with the sign flipped (zero stays non-negative).
    fn negated(&self) -> Self {
        let mut flipped = self.clone();
        if !flipped.is_zero() {
            flipped.negative = !flipped.negative;
        }
        flipped
    }

    /// Raw sign flip for add/sub delegation. May produce a transient
    /// negative zero, which the magnitude paths normalize away; using
    /// [`Self::negated`] here would loop on a zero operand, since the signs
    /// would still mismatch after the flip.
    fn flipped(&self) -> Self {
        let mut copy = self.clone();
        copy.negative = !copy.negative;
        copy
    }
}

impl Add<&BigInt> for &BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        if self.negative != rhs.negative {
            return self - &rhs.flipped();
        }
        // Summing two normalized same-sign magnitudes cannot produce a
        // leading zero group, so no normalization is needed.
        BigInt {
            negative: self.negative,
            groups: add_magnitudes(&self.groups, &rhs.groups),
        }
    }
}

impl Sub<&BigInt> for &BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        if self.negative != rhs.negative {
            return self + &rhs.flipped();
        }
        if self.cmp_magnitude(rhs) == Ordering::Less {
            // |a| < |b|: flip the subtraction and negate relative to a.
            let mut result = rhs - self;
            result.negative = !self.negative;
            return result;
        }
        let mut result = BigInt {
            negative: self.negative,
            groups: sub_magnitudes(&self.groups, &rhs.groups),
        };
        result.normalize();
        result
    }
}

impl Mul<&BigInt> for &BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        // Accumulator indexed by combined group position, least significant
        // at index 0. Group products use u64 to avoid overflow.
        let mut acc = vec![0_u64; self.groups.len() + rhs.groups.len()];
        for (i, &gx) in self.groups.iter().rev().enumerate() {
            for (j, &gy) in rhs.groups.iter().rev().enumerate() {
                let prod = u64::from(gx) * u64::from(gy) + acc[i + j];
                acc[i + j] = prod % u64::from(BASE);
                acc[i + j + 1] += prod / u64::from(BASE);
            }
        }
        let groups = acc.iter().rev().map(|&g| g as u32).collect();
        let mut result = BigInt {
            negative: self.negative != rhs.negative,
            groups,
        };
        result.normalize();
        result
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negated()
    }
}

impl Neg for BigInt {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negated()
    }
}

macro_rules! forward_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for BigInt {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                $trait::$method(&self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = Self;

            fn $method(self, rhs: &BigInt) -> Self::Output {
                $trait::$method(&self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> Self::Output {
                $trait::$method(self, &rhs)
            }
        }
    };
}

forward_binop!(Add, add);
forward_binop!(Sub, sub);
forward_binop!(Mul, mul);

pub(crate) use forward_binop;
