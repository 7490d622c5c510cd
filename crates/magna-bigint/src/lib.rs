//! # magna-bigint
//!
//! Exact arbitrary precision signed integer arithmetic.
//!
//! The central type is [`BigInt`], a sign plus a sequence of base-10000
//! digit groups (four decimal digits per group, most significant first).
//! It supports:
//!
//! - Addition, subtraction, multiplication via the standard operator traits
//! - Truncating division and remainder (`checked_div`, `checked_rem`, and
//!   the panicking `/` and `%` operators)
//! - Exponentiation, GCD and LCM
//! - Magnitude and signed comparison
//! - Decimal string parsing and formatting
//!
//! Every operation builds a fresh value; no instance is ever mutated after
//! being handed to a caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use magna_bigint::BigInt;
//!
//! let a: BigInt = "123456789012345678901234567890".parse().unwrap();
//! let b: BigInt = "987654321".parse().unwrap();
//! let q = a.checked_div(&b).unwrap();
//! assert_eq!((&q * &b + &a % &b), a);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bigint;
pub mod error;

mod arith;
mod divmod;
mod euclid;

#[cfg(test)]
mod proptests;

pub use bigint::BigInt;
pub use error::{DivideByZeroError, ParseBigIntError};
