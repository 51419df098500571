//! # Planum
//!
//! A small exact linear-algebra toolkit for affine hyperplanes.
//!
//! Planum solves small dense systems of linear equations expressed as
//! hyperplanes (`Ax = k`) by deterministic Gaussian elimination over
//! arbitrary precision decimals, classifying each system as having a
//! unique solution, no solution, or an infinite family — and returning a
//! machine-usable value for each outcome.
//!
//! ## Features
//!
//! - **Exact Arithmetic**: decimal scalars with per-value precision, no
//!   process-wide context
//! - **Deterministic Elimination**: triangular form and canonical RREF
//!   with fixed tie-break rules
//! - **Total Classification**: unique point, explicit "no solutions", or
//!   a basepoint-plus-directions parametrization
//! - **Geometry Types**: vectors and hyperplanes with tolerance-based
//!   parallel, orthogonal and equality tests
//!
//! ## Quick Start
//!
//! ```rust
//! use planum::prelude::*;
//!
//! let system = LinearSystem::new(vec![
//!     Hyperplane::new(Vector::from_f64s(&[1.0, 1.0, 1.0]), Scalar::from_f64(1.0)),
//!     Hyperplane::new(Vector::from_f64s(&[0.0, 1.0, 1.0]), Scalar::from_f64(2.0)),
//! ])?;
//!
//! match system.solve() {
//!     Solution::Unique(point) => println!("x = {point}"),
//!     Solution::Infinite(family) => println!("{family}"),
//!     Solution::Inconsistent => println!("No solutions"),
//! }
//! # Ok::<(), planum::solve::SolveError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use planum_geom as geom;
pub use planum_scalar as scalar;
pub use planum_solve as solve;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use planum_geom::{Hyperplane, LineIntersection, Vector};
    pub use planum_scalar::Scalar;
    pub use planum_solve::{LinearSystem, Parametrization, Solution, SolveError};
}
