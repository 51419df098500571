//! # planum-geom
//!
//! Geometric value types for the Planum toolkit.
//!
//! This crate provides:
//! - Fixed-dimension vectors of decimal scalars (`Vector`)
//! - Affine hyperplanes `normal · x = constant` (`Hyperplane`), with lines
//!   and planes as their 2- and 3-dimensional cases
//! - Tolerance-based parallelism, orthogonality and equality tests
//! - Human-readable equation rendering
//!
//! These are the value types the elimination engine in `planum-solve`
//! consumes; they carry no elimination logic themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hyperplane;
pub mod vector;

pub use hyperplane::{Hyperplane, LineIntersection};
pub use vector::Vector;
