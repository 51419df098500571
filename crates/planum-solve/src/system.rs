//! The linear-system container and its row operations.

use std::fmt;
use std::ops::Index;

use planum_geom::Hyperplane;
use planum_scalar::Scalar;
use thiserror::Error;

/// Errors raised when constructing or mutating a linear system.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SolveError {
    /// A hyperplane's dimension disagrees with the rest of the system.
    #[error("hyperplanes in the system must share dimension {expected}, found {found}")]
    DimensionMismatch {
        /// The dimension the system was built with.
        expected: usize,
        /// The dimension of the offending hyperplane or vector.
        found: usize,
    },
    /// A linear system needs at least one equation.
    #[error("a linear system requires at least one equation")]
    EmptySystem,
}

/// An ordered collection of hyperplanes sharing one dimension.
///
/// Row order is significant and caller-visible: rows are indexable and
/// swappable, and the elimination transforms report their results in row
/// order. Row operations mutate the system in place; the transforms in
/// this crate (`triangular_form`, `rref`) always return a new system.
#[derive(Clone, PartialEq, Debug)]
pub struct LinearSystem {
    rows: Vec<Hyperplane>,
    dimension: usize,
}

impl LinearSystem {
    /// Creates a system from its equations.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::EmptySystem`] for an empty equation list and
    /// [`SolveError::DimensionMismatch`] if the hyperplanes do not all
    /// share one dimension.
    pub fn new(rows: Vec<Hyperplane>) -> Result<Self, SolveError> {
        let dimension = rows.first().ok_or(SolveError::EmptySystem)?.dimension();
        for row in &rows {
            if row.dimension() != dimension {
                return Err(SolveError::DimensionMismatch {
                    expected: dimension,
                    found: row.dimension(),
                });
            }
        }
        Ok(Self { rows, dimension })
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of equations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the system has no equations (never, by
    /// construction).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> &Hyperplane {
        &self.rows[index]
    }

    /// Returns all rows in order.
    #[must_use]
    pub fn rows(&self) -> &[Hyperplane] {
        &self.rows
    }

    /// Replaces the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if the new row's
    /// dimension differs from the system's.
    pub fn set_row(&mut self, index: usize, row: Hyperplane) -> Result<(), SolveError> {
        if row.dimension() != self.dimension {
            return Err(SolveError::DimensionMismatch {
                expected: self.dimension,
                found: row.dimension(),
            });
        }
        self.rows[index] = row;
        Ok(())
    }

    /// Exchanges two rows; no other state changes.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// Scales a row's normal vector and constant term by `coefficient`.
    ///
    /// The coefficient must be nonzero: scaling by zero silently destroys
    /// the row's information. This is the caller's responsibility and is
    /// deliberately not checked.
    pub fn multiply_row(&mut self, coefficient: &Scalar, row: usize) {
        let normal = self.rows[row].normal().scale(coefficient);
        let constant = coefficient * self.rows[row].constant();
        self.rows[row] = Hyperplane::new(normal, constant);
    }

    /// Adds `coefficient` times the `source` row to the `target` row.
    ///
    /// This is the sole elimination primitive; it preserves the solution
    /// set whenever `source != target`. Self-combination (`target ==
    /// source`) is legal and scales the row by `1 + coefficient`.
    pub fn add_multiple_of_row_to_row(
        &mut self,
        coefficient: &Scalar,
        source: usize,
        target: usize,
    ) {
        let scaled_normal = self.rows[source].normal().scale(coefficient);
        let scaled_constant = coefficient * self.rows[source].constant();
        let normal = &scaled_normal + self.rows[target].normal();
        let constant = scaled_constant + self.rows[target].constant();
        self.rows[target] = Hyperplane::new(normal, constant);
    }

    /// Returns each row's pivot column: the first column whose
    /// coefficient is not near zero, or `None` for an all-zero row.
    #[must_use]
    pub fn pivot_columns(&self) -> Vec<Option<usize>> {
        self.rows.iter().map(Hyperplane::first_nonzero_index).collect()
    }
}

impl Index<usize> for LinearSystem {
    type Output = Hyperplane;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl fmt::Display for LinearSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Linear system:")?;
        for (i, row) in self.rows.iter().enumerate() {
            writeln!(f, "Equation {}: {}", i + 1, row)?;
        }
        Ok(())
    }
}
