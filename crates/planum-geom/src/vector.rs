//! Fixed-dimension vectors of decimal scalars.

use std::fmt;
use std::ops::{Add, Index, Sub};

use num_traits::Zero;
use planum_scalar::Scalar;
use smallvec::SmallVec;

/// Coordinate storage; systems of interest are low-dimensional, so a few
/// coordinates live inline.
type Coords = SmallVec<[Scalar; 4]>;

/// A fixed-length ordered sequence of decimal scalars.
///
/// The length (dimension) is set at construction and never changes.
#[derive(Clone, PartialEq, Debug)]
pub struct Vector {
    coords: Coords,
}

impl Vector {
    /// Creates a vector from its coordinates.
    #[must_use]
    pub fn new(coords: Vec<Scalar>) -> Self {
        Self {
            coords: Coords::from_vec(coords),
        }
    }

    /// Creates the zero vector of the given dimension.
    #[must_use]
    pub fn zeros(dimension: usize) -> Self {
        Self {
            coords: std::iter::repeat_with(Scalar::zero)
                .take(dimension)
                .collect(),
        }
    }

    /// Creates a vector from f64 coordinates at the default precision.
    ///
    /// # Panics
    ///
    /// Panics if any coordinate is NaN or infinite.
    #[must_use]
    pub fn from_f64s(coords: &[f64]) -> Self {
        coords.iter().copied().map(Scalar::from_f64).collect()
    }

    /// Returns the dimension (number of coordinates).
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coords.len()
    }

    /// Returns a reference to the coordinate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Scalar> {
        self.coords.get(index)
    }

    /// Iterates over the coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &Scalar> {
        self.coords.iter()
    }

    /// Scales every coordinate by `factor`.
    #[must_use]
    pub fn scale(&self, factor: &Scalar) -> Self {
        self.coords.iter().map(|c| c * factor).collect()
    }

    /// Computes the dot product with another vector.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn dot(&self, other: &Self) -> Scalar {
        assert_eq!(self.dimension(), other.dimension());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(Scalar::zero(), |acc, (a, b)| acc + a * b)
    }

    /// Returns true if every coordinate is within the near-zero tolerance.
    #[must_use]
    pub fn is_near_zero(&self) -> bool {
        self.coords.iter().all(Scalar::is_near_zero)
    }

    /// Returns true if the vectors are parallel.
    ///
    /// The zero vector is parallel to everything. Otherwise the vectors
    /// are parallel exactly when every 2x2 minor `a_i b_j - a_j b_i`
    /// vanishes; this stays in decimal arithmetic, with no square roots
    /// or angles.
    #[must_use]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        assert_eq!(self.dimension(), other.dimension());
        if self.is_near_zero() || other.is_near_zero() {
            return true;
        }
        let n = self.dimension();
        for i in 0..n {
            for j in (i + 1)..n {
                let minor = &self[i] * &other[j] - &self[j] * &other[i];
                if !minor.is_near_zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns true if the dot product is within the near-zero tolerance.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[must_use]
    pub fn is_orthogonal_to(&self, other: &Self) -> bool {
        self.dot(other).is_near_zero()
    }

    /// Returns the index of the first coordinate that is not near zero,
    /// or `None` if every coordinate is near zero.
    #[must_use]
    pub fn first_nonzero_index(&self) -> Option<usize> {
        self.coords.iter().position(|c| !c.is_near_zero())
    }

    /// Returns true if both vectors have the same dimension and every
    /// coordinate pair differs by less than 1e-10.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.dimension() == other.dimension()
            && self
                .coords
                .iter()
                .zip(other.coords.iter())
                .all(|(a, b)| a.approx_eq(b))
    }
}

impl Index<usize> for Vector {
    type Output = Scalar;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coords[index]
    }
}

impl FromIterator<Scalar> for Vector {
    fn from_iter<I: IntoIterator<Item = Scalar>>(iter: I) -> Self {
        Self {
            coords: iter.into_iter().collect(),
        }
    }
}

impl Add for &Vector {
    type Output = Vector;

    fn add(self, other: Self) -> Vector {
        assert_eq!(self.dimension(), other.dimension());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a + b)
            .collect()
    }
}

impl Sub for &Vector {
    type Output = Vector;

    fn sub(self, other: Self) -> Vector {
        assert_eq!(self.dimension(), other.dimension());
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, coord) in self.coords.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{coord}")?;
        }
        write!(f, ")")
    }
}
