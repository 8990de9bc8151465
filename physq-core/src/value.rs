//! Dynamically dimensioned quantities.
//!
//! A [`Value`] pairs an `f64` magnitude, always expressed in SI base units, with its [`Dimension`]. Operations that
//! need matching dimensions (`try_add`, `try_sub`) return a [`Result`]; operations that simply combine dimensions
//! (`*`, `/`, `powi`) are infallible and exposed as operators or plain methods.
//!
//! Magnitudes follow IEEE-754: dividing by a zero magnitude yields an infinite or NaN magnitude, not an error.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::math;
use crate::tolerance::Tolerance;
use core::fmt;
use core::ops::{Div, Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A magnitude in SI base units together with its dimension.
///
/// ```rust
/// use physq_core::{Dimension, Value};
///
/// let distance = Value::new(10.0, Dimension::LENGTH);
/// let duration = Value::new(2.0, Dimension::TIME);
/// let speed = distance / duration;
/// assert_eq!(speed.magnitude(), 5.0);
/// assert_eq!(speed.to_string(), "5 [L^1 T^-1]");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Value {
    magnitude: f64,
    dim: Dimension,
}

impl Value {
    /// Creates a value from a magnitude in SI base units and its dimension.
    #[inline]
    pub const fn new(magnitude: f64, dim: Dimension) -> Self {
        Self { magnitude, dim }
    }

    /// Creates a dimensionless value (a pure number, e.g. a ratio or an angle in radians).
    #[inline]
    pub const fn dimensionless(magnitude: f64) -> Self {
        Self::new(magnitude, Dimension::DIMENSIONLESS)
    }

    /// Returns the magnitude in SI base units.
    #[inline]
    pub const fn magnitude(self) -> f64 {
        self.magnitude
    }

    /// Returns the dimension.
    #[inline]
    pub const fn dim(self) -> Dimension {
        self.dim
    }

    /// `true` when the dimension has all exponents zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.dim.is_dimensionless()
    }

    /// Sum of two values of the same dimension.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when the dimensions differ.
    ///
    /// ```rust
    /// use physq_core::{Dimension, Value};
    ///
    /// let a = Value::new(5.0, Dimension::LENGTH);
    /// let b = Value::new(3.0, Dimension::LENGTH);
    /// assert_eq!(a.try_add(b).unwrap().magnitude(), 8.0);
    ///
    /// let m = Value::new(3.0, Dimension::MASS);
    /// assert!(a.try_add(m).is_err());
    /// ```
    pub fn try_add(self, rhs: Self) -> Result<Self> {
        self.ensure_same_dim("add", rhs)?;
        Ok(Self::new(self.magnitude + rhs.magnitude, self.dim))
    }

    /// Difference of two values of the same dimension.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when the dimensions differ.
    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        self.ensure_same_dim("subtract", rhs)?;
        Ok(Self::new(self.magnitude - rhs.magnitude, self.dim))
    }

    /// Multiplies the magnitude by a dimensionless scalar.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self::new(self.magnitude * scalar, self.dim)
    }

    /// Raises the value to an integer power; the dimension is scaled by `n`.
    ///
    /// ```rust
    /// use physq_core::{Dimension, Value};
    ///
    /// let side = Value::new(5.0, Dimension::LENGTH);
    /// assert_eq!(side.powi(3), Value::new(125.0, Dimension::VOLUME));
    /// ```
    pub fn powi(self, n: i32) -> Self {
        Self::new(math::powi(self.magnitude, n), self.dim.powi(n))
    }

    /// Square root; the dimension is halved.
    ///
    /// The magnitude sign is not checked: a negative magnitude yields NaN.
    ///
    /// # Errors
    ///
    /// [`Error::OddExponent`] when the dimension has an odd exponent.
    ///
    /// ```rust
    /// use physq_core::{Dimension, Value};
    ///
    /// let area = Value::new(25.0, Dimension::AREA);
    /// assert_eq!(area.sqrt(), Ok(Value::new(5.0, Dimension::LENGTH)));
    /// assert!(Value::new(5.0, Dimension::LENGTH).sqrt().is_err());
    /// ```
    pub fn sqrt(self) -> Result<Self> {
        let dim = self.dim.half()?;
        Ok(Self::new(math::sqrt(self.magnitude), dim))
    }

    /// Absolute value; the dimension is unchanged.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(math::abs(self.magnitude), self.dim)
    }

    /// Equality within [`Tolerance::DEFAULT`]; values of different dimensions are never equal.
    #[inline]
    pub fn approx_eq(&self, other: &Self) -> bool {
        self.approx_eq_with(other, Tolerance::DEFAULT)
    }

    /// Equality within the given tolerance; values of different dimensions are never equal.
    pub fn approx_eq_with(&self, other: &Self, tolerance: Tolerance) -> bool {
        self.dim == other.dim && tolerance.approx_eq(self.magnitude, other.magnitude)
    }

    #[inline]
    fn ensure_same_dim(self, op: &'static str, rhs: Self) -> Result<()> {
        if self.dim != rhs.dim {
            return Err(Error::mismatch(op, self.dim, rhs.dim));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl Mul for Value {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(self.magnitude * rhs.magnitude, self.dim.compose(rhs.dim))
    }
}

impl Div for Value {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self::new(self.magnitude / rhs.magnitude, self.dim.decompose(rhs.dim))
    }
}

impl Mul<f64> for Value {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Value> for f64 {
    type Output = Value;
    #[inline]
    fn mul(self, rhs: Value) -> Value {
        rhs.scale(self)
    }
}

impl Div<f64> for Value {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.magnitude / rhs, self.dim)
    }
}

impl Neg for Value {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.magnitude, self.dim)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(f, "{:.*} {}", precision, self.magnitude, self.dim),
            None => write!(f, "{} {}", self.magnitude, self.dim),
        }
    }
}
