//! Floating-point comparison tolerances.

use crate::math;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerances used when comparing magnitudes.
///
/// Two magnitudes `a` and `b` are considered equal when they are identical, when `|a - b| < absolute`, or, when
/// neither is exactly zero, when `|a - b| / (|a| + |b|) < relative`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Bound on the relative difference `|a - b| / (|a| + |b|)`.
    pub relative: f64,
    /// Bound on the absolute difference `|a - b|`.
    pub absolute: f64,
}

impl Tolerance {
    /// Tolerance used by [`Value::approx_eq`](crate::Value::approx_eq): `1e-14` relative and absolute.
    pub const DEFAULT: Self = Self::new(1e-14, 1e-14);

    /// Creates a tolerance from its relative and absolute bounds.
    #[inline]
    pub const fn new(relative: f64, absolute: f64) -> Self {
        Self { relative, absolute }
    }

    /// Compares two raw magnitudes under this tolerance.
    ///
    /// ```rust
    /// use physq_core::Tolerance;
    ///
    /// let tol = Tolerance::DEFAULT;
    /// assert!(tol.approx_eq(1.0, 1.0 + 1e-15));
    /// assert!(!tol.approx_eq(1.0, 1.001));
    /// ```
    pub fn approx_eq(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = math::abs(a - b);
        if a == 0.0 || b == 0.0 || diff < self.absolute {
            return diff < self.absolute;
        }
        diff / (math::abs(a) + math::abs(b)) < self.relative
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_values_are_equal() {
        assert!(Tolerance::DEFAULT.approx_eq(3.5, 3.5));
        assert!(Tolerance::DEFAULT.approx_eq(0.0, 0.0));
        assert!(Tolerance::DEFAULT.approx_eq(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn relative_difference_within_bound() {
        assert!(Tolerance::DEFAULT.approx_eq(1e20, 1e20 + 1e5));
        assert!(!Tolerance::DEFAULT.approx_eq(1e20, 1.001e20));
    }

    #[test]
    fn zero_operand_uses_absolute_bound() {
        assert!(Tolerance::DEFAULT.approx_eq(0.0, 1e-15));
        assert!(!Tolerance::DEFAULT.approx_eq(0.0, 1e-13));
    }

    #[test]
    fn nan_is_never_equal() {
        assert!(!Tolerance::DEFAULT.approx_eq(f64::NAN, f64::NAN));
        assert!(!Tolerance::DEFAULT.approx_eq(f64::NAN, 1.0));
    }

    #[test]
    fn looser_tolerance_accepts_more() {
        let loose = Tolerance::new(1e-3, 1e-3);
        assert!(loose.approx_eq(1.0, 1.0005));
        assert!(!Tolerance::DEFAULT.approx_eq(1.0, 1.0005));
    }

    #[test]
    fn default_matches_const() {
        assert_eq!(Tolerance::default(), Tolerance::DEFAULT);
    }
}
