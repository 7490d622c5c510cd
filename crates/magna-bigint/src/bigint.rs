//! The digit-group representation and its construction rules.
//!
//! A [`BigInt`] stores its magnitude as groups of four decimal digits in
//! radix 10000, most significant group first. Keeping the groups in a
//! contiguous `Vec` lets the arithmetic traverse in either direction:
//! addition and subtraction walk least-significant-first, printing and
//! magnitude comparison walk most-significant-first.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::error::ParseBigIntError;

/// Radix of a single digit group.
pub(crate) const BASE: u32 = 10_000;

/// Decimal digits per group.
pub(crate) const GROUP_DIGITS: usize = 4;

/// An arbitrary precision signed integer.
///
/// Invariants, upheld by every constructor and operation:
///
/// - `groups` is never empty;
/// - no leading zero group unless the value is exactly zero, which is the
///   single group `[0]`;
/// - zero always has `negative == false`.
///
/// Equality and hashing work on the normalized representation, so they
/// coincide with mathematical equality.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) negative: bool,
    pub(crate) groups: Vec<u32>,
}

impl BigInt {
    /// Creates a big integer from a machine integer.
    #[must_use]
    pub fn new(value: i64) -> Self {
        let negative = value < 0;
        let mut magnitude = value.unsigned_abs();
        let mut groups = Vec::new();
        loop {
            groups.push((magnitude % u64::from(BASE)) as u32);
            magnitude /= u64::from(BASE);
            if magnitude == 0 {
                break;
            }
        }
        groups.reverse();
        Self { negative, groups }
    }

    /// Builds a value from most-significant-first groups and normalizes.
    pub(crate) fn from_groups(negative: bool, groups: Vec<u32>) -> Self {
        let mut value = Self { negative, groups };
        value.normalize();
        value
    }

    /// Strips leading zero groups and forces zero's sign to non-negative.
    pub(crate) fn normalize(&mut self) {
        let leading = self.groups.iter().take_while(|&&g| g == 0).count();
        let strip = leading.min(self.groups.len() - 1);
        if strip > 0 {
            self.groups.drain(..strip);
        }
        if self.groups.len() == 1 && self.groups[0] == 0 {
            self.negative = false;
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            groups: self.groups.clone(),
        }
    }

    /// Returns true if this integer is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.is_zero() {
            0
        } else if self.negative {
            -1
        } else {
            1
        }
    }

    /// Compares magnitudes only, ignoring sign.
    ///
    /// A shorter group sequence is smaller; equal-length sequences compare
    /// groups pairwise from the most significant end.
    #[must_use]
    pub fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.groups
            .len()
            .cmp(&other.groups.len())
            .then_with(|| self.groups.cmp(&other.groups))
    }

    /// Attempts to convert to an i64.
    ///
    /// Returns `None` if the value doesn't fit in an i64.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        // Six groups exceed 20 decimal digits, past the i64 range.
        if self.groups.len() > 5 {
            return None;
        }
        let mut magnitude = 0_i128;
        for &group in &self.groups {
            magnitude = magnitude * i128::from(BASE) + i128::from(group);
        }
        let value = if self.negative { -magnitude } else { magnitude };
        i64::try_from(value).ok()
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    /// Parses a decimal string: optional surrounding whitespace, an
    /// optional leading `-`, then one or more ASCII decimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        if let Some((offset, ch)) = digits.char_indices().find(|&(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit { ch, offset });
        }

        // Consume digits from the end in chunks of up to four, the chunk
        // nearest the end becoming the least significant group.
        let bytes = digits.as_bytes();
        let mut groups = Vec::with_capacity(bytes.len().div_ceil(GROUP_DIGITS));
        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(GROUP_DIGITS);
            let mut group = 0_u32;
            for &b in &bytes[start..end] {
                group = group * 10 + u32::from(b - b'0');
            }
            groups.push(group);
            end = start;
        }
        groups.reverse();

        Ok(Self::from_groups(negative, groups))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.groups[0])?;
        for group in &self.groups[1..] {
            write!(f, "{group:04}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for BigInt {
    fn zero() -> Self {
        Self {
            negative: false,
            groups: vec![0],
        }
    }

    fn is_zero(&self) -> bool {
        self.groups.len() == 1 && self.groups[0] == 0
    }
}

impl One for BigInt {
    fn one() -> Self {
        Self {
            negative: false,
            groups: vec![1],
        }
    }

    fn is_one(&self) -> bool {
        !self.negative && self.groups.len() == 1 && self.groups[0] == 1
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        let mut magnitude = value;
        let mut groups = Vec::new();
        loop {
            groups.push((magnitude % u64::from(BASE)) as u32);
            magnitude /= u64::from(BASE);
            if magnitude == 0 {
                break;
            }
        }
        groups.reverse();
        Self {
            negative: false,
            groups,
        }
    }
}
