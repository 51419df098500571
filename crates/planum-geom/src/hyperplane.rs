//! Affine hyperplanes `normal · x = constant`.
//!
//! A hyperplane in 2 dimensions is a line (`Ax + By = k`), in 3 dimensions
//! a plane (`Ax + By + Cz = k`). The elimination engine treats each row of
//! a linear system as one hyperplane.

use std::fmt;

use num_traits::Zero;
use planum_scalar::Scalar;

use crate::vector::Vector;

/// An affine hyperplane defined by `normal · x = constant`.
#[derive(Clone, PartialEq, Debug)]
pub struct Hyperplane {
    normal: Vector,
    constant: Scalar,
}

/// How two lines (2-dimensional hyperplanes) relate to each other.
#[derive(Clone, PartialEq, Debug)]
pub enum LineIntersection {
    /// The lines cross in exactly one point.
    Point(Vector),
    /// The lines describe the same affine set.
    Coincident,
    /// The lines are parallel and never meet.
    Disjoint,
}

impl Hyperplane {
    /// Creates a hyperplane from its normal vector and constant term.
    #[must_use]
    pub fn new(normal: Vector, constant: Scalar) -> Self {
        Self { normal, constant }
    }

    /// Creates the degenerate hyperplane `0 = constant` of the given
    /// dimension.
    ///
    /// Rows of this shape are what redundant or contradictory equations
    /// reduce to during elimination.
    #[must_use]
    pub fn degenerate(dimension: usize, constant: Scalar) -> Self {
        Self {
            normal: Vector::zeros(dimension),
            constant,
        }
    }

    /// Returns the ambient dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.normal.dimension()
    }

    /// Returns the normal vector.
    #[must_use]
    pub fn normal(&self) -> &Vector {
        &self.normal
    }

    /// Returns the constant term.
    #[must_use]
    pub fn constant(&self) -> &Scalar {
        &self.constant
    }

    /// Returns the normal-vector coefficient for variable `index`.
    #[must_use]
    pub fn coefficient(&self, index: usize) -> &Scalar {
        &self.normal[index]
    }

    /// Returns the column of this row's leading coefficient, or `None`
    /// for an all-near-zero normal vector.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.normal.first_nonzero_index()
    }

    /// Returns a point on the hyperplane, or `None` if the normal vector
    /// is entirely near zero.
    ///
    /// The point sets every coordinate to zero except the leading one,
    /// which becomes `constant / leading coefficient`.
    #[must_use]
    pub fn basepoint(&self) -> Option<Vector> {
        let initial = self.normal.first_nonzero_index()?;
        let coords = (0..self.dimension())
            .map(|i| {
                if i == initial {
                    &self.constant / &self.normal[initial]
                } else {
                    Scalar::zero()
                }
            })
            .collect();
        Some(coords)
    }

    /// Returns true if the normal vectors are parallel.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        self.normal.is_parallel_to(&other.normal)
    }

    /// Returns true if both hyperplanes describe the same affine set,
    /// within the near-zero tolerance.
    ///
    /// Degenerate hyperplanes (near-zero normal) are equal exactly when
    /// their constants nearly agree. Otherwise the normals must be
    /// parallel and the vector connecting the two basepoints orthogonal
    /// to the normal.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        if self.dimension() != other.dimension() {
            return false;
        }
        if self.normal.is_near_zero() {
            return other.normal.is_near_zero()
                && (&self.constant - &other.constant).is_near_zero();
        }
        if other.normal.is_near_zero() {
            return false;
        }
        if !self.is_parallel_to(other) {
            return false;
        }
        match (self.basepoint(), other.basepoint()) {
            (Some(a), Some(b)) => (&a - &b).is_orthogonal_to(&self.normal),
            _ => false,
        }
    }

    /// Computes where this line meets another line.
    ///
    /// Uses Cramer's rule on the 2x2 coefficient matrix; a near-zero
    /// determinant means the lines are parallel, in which case they are
    /// either the same line or never meet.
    ///
    /// # Panics
    ///
    /// Panics unless both hyperplanes are 2-dimensional.
    #[must_use]
    pub fn intersection_with(&self, other: &Self) -> LineIntersection {
        assert_eq!(self.dimension(), 2, "line intersection requires dimension 2");
        assert_eq!(other.dimension(), 2, "line intersection requires dimension 2");

        let (a, b) = (&self.normal[0], &self.normal[1]);
        let (c, d) = (&other.normal[0], &other.normal[1]);
        let (k1, k2) = (&self.constant, &other.constant);

        let determinant = a * d - b * c;
        if determinant.is_near_zero() {
            if self.approx_eq(other) {
                return LineIntersection::Coincident;
            }
            return LineIntersection::Disjoint;
        }

        let x = d * k1 - b * k2;
        let y = a * k2 - c * k1;
        let point = Vector::new(vec![x, y]).scale(&determinant.recip());
        LineIntersection::Point(point)
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

/// Writes the sign and magnitude of one rendered coefficient.
fn write_coefficient(output: &mut String, value: f64, is_initial_term: bool) {
    if value < 0.0 {
        output.push('-');
    } else if !is_initial_term {
        output.push('+');
    }
    if !is_initial_term {
        output.push(' ');
    }
    let magnitude = value.abs();
    if (magnitude - 1.0).abs() > f64::EPSILON {
        output.push_str(&format!("{magnitude}"));
    }
}

impl fmt::Display for Hyperplane {
    /// Renders the equation as `c1 x_1 + c2 x_2 ... = k` with coefficients
    /// rounded to three decimal places, a suppressed leading `+`, elided
    /// magnitude-one coefficients, and a literal `0` for an all-zero
    /// normal vector.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut output = String::new();

        match self.first_nonzero_index() {
            Some(initial_index) => {
                let mut first = true;
                for i in 0..self.dimension() {
                    let coefficient = round3(self.normal[i].to_f64());
                    if coefficient == 0.0 {
                        continue;
                    }
                    if !first {
                        output.push(' ');
                    }
                    write_coefficient(&mut output, coefficient, i == initial_index);
                    output.push_str(&format!("x_{}", i + 1));
                    first = false;
                }
            }
            None => output.push('0'),
        }

        write!(f, "{} = {}", output, round3(self.constant.to_f64()))
    }
}
