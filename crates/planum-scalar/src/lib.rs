//! # planum-scalar
//!
//! Arbitrary precision decimal arithmetic for the Planum toolkit.
//!
//! This crate wraps `dashu` to provide:
//! - Arbitrary precision decimal scalars (`Scalar`)
//! - Per-value precision tracking (no process-wide context)
//! - Tolerance predicates (`is_near_zero`, `approx_eq`) used throughout
//!   the elimination engine
//!
//! ## Precision Notes
//!
//! Every constructor pins its result to an explicit number of significant
//! decimal digits ([`DEFAULT_PRECISION`] unless overridden), so arithmetic
//! never silently escalates to unlimited precision.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod scalar;

#[cfg(test)]
mod proptests;

pub use scalar::{Scalar, DEFAULT_PRECISION, NEAR_ZERO_TOLERANCE};
