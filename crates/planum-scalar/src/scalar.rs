//! Arbitrary precision decimal scalars.
//!
//! This module provides a wrapper around `dashu::float::DBig` with the
//! tolerance predicates needed for exact elimination over decimal
//! coefficients.

use dashu::base::Abs;
use dashu::float::DBig;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use std::sync::OnceLock;

/// Default number of significant decimal digits carried by a [`Scalar`].
pub const DEFAULT_PRECISION: usize = 30;

/// The near-zero tolerance used by every zero test in the toolkit.
pub const NEAR_ZERO_TOLERANCE: &str = "1e-10";

/// An arbitrary precision decimal number.
///
/// Every `Scalar` carries its own precision (in significant decimal
/// digits), so rounding behavior is a property of the value rather than of
/// any global context. Arithmetic between scalars of different precision
/// rounds to the larger of the two.
#[derive(Clone, PartialEq, PartialOrd)]
pub struct Scalar(DBig);

impl Scalar {
    /// Creates a scalar from an i64 at the default precision.
    #[must_use]
    pub fn from_i64(value: i64) -> Self {
        Self(DBig::from(value).with_precision(DEFAULT_PRECISION).value())
    }

    /// Creates a scalar from an f64 at the default precision.
    ///
    /// The float is read at its shortest round-trip decimal form, so
    /// `from_f64(4.046)` is exactly the decimal `4.046` rather than the
    /// nearest binary fraction.
    ///
    /// # Panics
    ///
    /// Panics if the value is NaN or infinite.
    #[must_use]
    pub fn from_f64(value: f64) -> Self {
        assert!(value.is_finite(), "scalar from non-finite float");
        let shortest = format!("{value}");
        let parsed = DBig::from_str_native(&shortest).expect("float renders as a decimal literal");
        Self(parsed.with_precision(DEFAULT_PRECISION).value())
    }

    /// Returns this scalar rounded (or extended) to `digits` significant
    /// decimal digits.
    #[must_use]
    pub fn with_precision(self, digits: usize) -> Self {
        Self(self.0.with_precision(digits).value())
    }

    /// Returns the number of significant decimal digits carried.
    #[must_use]
    pub fn precision(&self) -> usize {
        self.0.precision()
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the scalar is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self::one() / self
    }

    /// Returns true if the absolute value is below the 1e-10 tolerance.
    ///
    /// This is the predicate the elimination engine uses everywhere a
    /// coefficient is tested against zero.
    #[must_use]
    pub fn is_near_zero(&self) -> bool {
        self.0.clone().abs() < *epsilon()
    }

    /// Returns true if the two scalars differ by less than 1e-10.
    ///
    /// Exact equality remains available through `==`; this named operation
    /// is the tolerance contract used by the engine and its tests.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        (self - other).is_near_zero()
    }

    /// Returns true if the scalar is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0 < DBig::ZERO
    }

    /// Converts to the nearest f64.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().value()
    }

    /// Returns the inner `dashu::DBig`.
    #[must_use]
    pub fn into_inner(self) -> DBig {
        self.0
    }

    /// Returns a reference to the inner `dashu::DBig`.
    #[must_use]
    pub fn as_inner(&self) -> &DBig {
        &self.0
    }
}

/// The shared near-zero tolerance, 1e-10.
fn epsilon() -> &'static DBig {
    static EPSILON: OnceLock<DBig> = OnceLock::new();
    EPSILON.get_or_init(|| {
        DBig::from_str_native(NEAR_ZERO_TOLERANCE).expect("tolerance literal parses")
    })
}

impl Zero for Scalar {
    fn zero() -> Self {
        Self(DBig::ZERO.with_precision(DEFAULT_PRECISION).value())
    }

    fn is_zero(&self) -> bool {
        self.0 == DBig::ZERO
    }
}

impl One for Scalar {
    fn one() -> Self {
        Self(DBig::ONE.with_precision(DEFAULT_PRECISION).value())
    }

    fn is_one(&self) -> bool {
        self.0 == DBig::ONE
    }
}

impl FromStr for Scalar {
    type Err = dashu::base::error::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DBig::from_str_native(s)
            .map(|value| Self(value.with_precision(DEFAULT_PRECISION).value()))
    }
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar({})", self.0)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Arithmetic operations
impl Add for Scalar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add<&Scalar> for Scalar {
    type Output = Self;

    fn add(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 + &rhs.0)
    }
}

impl Add for &Scalar {
    type Output = Scalar;

    fn add(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 + &rhs.0)
    }
}

impl Sub for Scalar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub<&Scalar> for Scalar {
    type Output = Self;

    fn sub(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 - &rhs.0)
    }
}

impl Sub for &Scalar {
    type Output = Scalar;

    fn sub(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 - &rhs.0)
    }
}

impl Mul for Scalar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul<&Scalar> for Scalar {
    type Output = Self;

    fn mul(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 * &rhs.0)
    }
}

impl Mul for &Scalar {
    type Output = Scalar;

    fn mul(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 * &rhs.0)
    }
}

impl Div for Scalar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div<&Scalar> for Scalar {
    type Output = Self;

    fn div(self, rhs: &Scalar) -> Self::Output {
        Self(self.0 / &rhs.0)
    }
}

impl Div for &Scalar {
    type Output = Scalar;

    fn div(self, rhs: Self) -> Self::Output {
        Scalar(&self.0 / &rhs.0)
    }
}

impl Neg for Scalar {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Scalar {
    type Output = Scalar;

    fn neg(self) -> Self::Output {
        Scalar(-&self.0)
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<i32> for Scalar {
    fn from(value: i32) -> Self {
        Self::from_i64(i64::from(value))
    }
}
