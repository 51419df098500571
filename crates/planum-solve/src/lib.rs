//! # planum-solve
//!
//! Exact Gaussian elimination over systems of affine hyperplanes.
//!
//! This crate provides:
//! - `LinearSystem`, an ordered collection of same-dimension hyperplanes
//!   with in-place row operations (swap, scale, combine)
//! - Non-destructive transforms to triangular form and reduced
//!   row-echelon form
//! - Pivot-based classification into a unique solution, no solution, or
//!   an infinite family
//! - `Parametrization`, the basepoint-plus-directions representation of
//!   an infinite solution family
//!
//! ## Determinism
//!
//! Elimination is fully deterministic: pivot search always takes the
//! earliest candidate row, and all zero tests use the shared 1e-10
//! tolerance from `planum-scalar`. There is no numerical pivoting
//! strategy; correctness and exactness dominate.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod solution;
pub mod system;

mod elimination;


pub use solution::{Parametrization, Solution};
pub use system::{LinearSystem, SolveError};
