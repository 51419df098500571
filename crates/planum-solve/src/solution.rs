//! Solution classification and parametrization of infinite families.

use std::fmt;

use num_traits::{One, Zero};
use planum_geom::Vector;
use planum_scalar::Scalar;
use rustc_hash::FxHashMap;

use crate::system::{LinearSystem, SolveError};

/// The outcome of solving a linear system.
///
/// These are classification results, not failures: a contradictory system
/// is an ordinary answer, rendered as "No solutions" by `Display`.
#[derive(Clone, PartialEq, Debug)]
pub enum Solution {
    /// Exactly one point satisfies every equation.
    Unique(Vector),
    /// Infinitely many points satisfy the system, parametrized by its
    /// free variables.
    Infinite(Parametrization),
    /// No point satisfies the system.
    Inconsistent,
}

/// The solution set `{basepoint + Σ t_i · directions[i]}` of an
/// underdetermined system, for free real parameters `t_i`.
///
/// Built only as the terminal output of classifying a reduced system;
/// immutable once constructed.
#[derive(Clone, PartialEq, Debug)]
pub struct Parametrization {
    basepoint: Vector,
    directions: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization from a basepoint and direction vectors.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] if any direction
    /// vector's dimension differs from the basepoint's.
    pub fn new(basepoint: Vector, directions: Vec<Vector>) -> Result<Self, SolveError> {
        let dimension = basepoint.dimension();
        for direction in &directions {
            if direction.dimension() != dimension {
                return Err(SolveError::DimensionMismatch {
                    expected: dimension,
                    found: direction.dimension(),
                });
            }
        }
        Ok(Self {
            basepoint,
            directions,
        })
    }

    /// Returns the basepoint of the solution set.
    #[must_use]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    /// Returns the direction vectors, in ascending free-variable order.
    #[must_use]
    pub fn directions(&self) -> &[Vector] {
        &self.directions
    }

    /// Returns the ambient dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }
}

impl LinearSystem {
    /// Solves the system by Gaussian elimination.
    ///
    /// Reduces to canonical form, then classifies the pivot structure.
    /// The input system is left untouched.
    #[must_use]
    pub fn solve(&self) -> Solution {
        self.rref().classify()
    }

    /// Classifies an already-reduced system by its pivot structure.
    ///
    /// Expects `self` to be in reduced row-echelon form; `solve` is the
    /// entry point that guarantees this. Checks, in priority order:
    /// a contradictory row (zero normal, nonzero constant) means no
    /// solution regardless of anything else; fewer distinct pivots than
    /// variables means an infinite family; otherwise the solution is
    /// unique.
    #[must_use]
    pub fn classify(&self) -> Solution {
        for row in self.rows() {
            if row.first_nonzero_index().is_none() && !row.constant().is_near_zero() {
                return Solution::Inconsistent;
            }
        }

        // Pivot columns indexed by column, not by row, so extraction
        // stays correct when row and variable counts differ.
        let mut pivot_rows: FxHashMap<usize, usize> = FxHashMap::default();
        for (row, pivot) in self.pivot_columns().into_iter().enumerate() {
            if let Some(col) = pivot {
                pivot_rows.entry(col).or_insert(row);
            }
        }

        if pivot_rows.len() < self.dimension() {
            return Solution::Infinite(self.parametrize(&pivot_rows));
        }

        let coordinates = (0..self.dimension())
            .map(|var| self.row(pivot_rows[&var]).constant().clone())
            .collect();
        Solution::Unique(coordinates)
    }

    /// Builds the parametrization of a reduced, consistent,
    /// underdetermined system.
    ///
    /// Each free variable `f` yields one direction vector with one at
    /// coordinate `f` and, at every pivot coordinate `p`, the negated
    /// coefficient of `f` in `p`'s pivot row: the shift each pivot
    /// variable needs to absorb a unit increase of `t_f`. The basepoint
    /// takes each pivot row's constant at its pivot coordinate and zero
    /// at every free coordinate.
    fn parametrize(&self, pivot_rows: &FxHashMap<usize, usize>) -> Parametrization {
        let dimension = self.dimension();
        let free_variables: Vec<usize> = (0..dimension)
            .filter(|var| !pivot_rows.contains_key(var))
            .collect();

        let mut directions = Vec::with_capacity(free_variables.len());
        for &free_var in &free_variables {
            let mut coords = vec![Scalar::zero(); dimension];
            coords[free_var] = Scalar::one();
            for (&pivot_col, &row) in pivot_rows {
                coords[pivot_col] = -self.row(row).coefficient(free_var);
            }
            directions.push(Vector::new(coords));
        }

        let mut basepoint = vec![Scalar::zero(); dimension];
        for (&pivot_col, &row) in pivot_rows {
            basepoint[pivot_col] = self.row(row).constant().clone();
        }

        Parametrization {
            basepoint: Vector::new(basepoint),
            directions,
        }
    }
}

/// Rounds to three decimal places for display.
fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl fmt::Display for Parametrization {
    /// Renders one line per coordinate, e.g. `x_1 = -1 - t_1`, with
    /// values rounded to three decimal places and zero terms omitted.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for coord in 0..self.dimension() {
            write!(f, "x_{} = {}", coord + 1, round3(self.basepoint[coord].to_f64()))?;
            for (free_var, direction) in self.directions.iter().enumerate() {
                let coefficient = round3(direction[coord].to_f64());
                if coefficient == 0.0 {
                    continue;
                }
                let sign = if coefficient < 0.0 { '-' } else { '+' };
                let magnitude = coefficient.abs();
                if (magnitude - 1.0).abs() > f64::EPSILON {
                    write!(f, " {} {}t_{}", sign, magnitude, free_var + 1)?;
                } else {
                    write!(f, " {} t_{}", sign, free_var + 1)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Solution::Unique(point) => write!(f, "{point}"),
            Solution::Infinite(parametrization) => write!(f, "{parametrization}"),
            Solution::Inconsistent => write!(f, "No solutions"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use planum_geom::Hyperplane;

    fn plane(normal: &[f64], constant: f64) -> Hyperplane {
        Hyperplane::new(Vector::from_f64s(normal), Scalar::from_f64(constant))
    }

    #[test]
    fn test_parametrization_checks_dimensions() {
        let err = Parametrization::new(
            Vector::from_f64s(&[1.0, 2.0, 0.0]),
            vec![Vector::from_f64s(&[0.0, 1.0])],
        );
        assert_eq!(
            err,
            Err(SolveError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn test_inconsistent_display() {
        let system = LinearSystem::new(vec![
            plane(&[1.0, 1.0, 1.0], 1.0),
            plane(&[1.0, 1.0, 1.0], 2.0),
        ])
        .unwrap();
        assert_eq!(system.solve().to_string(), "No solutions");
    }

    #[test]
    fn test_parametrization_display() {
        let parametrization = Parametrization::new(
            Vector::from_f64s(&[-1.0, 2.0, 0.0]),
            vec![Vector::from_f64s(&[0.0, -1.0, 1.0])],
        )
        .unwrap();
        assert_eq!(
            parametrization.to_string(),
            "x_1 = -1\nx_2 = 2 - t_1\nx_3 = 0 + t_1\n"
        );
    }
}
