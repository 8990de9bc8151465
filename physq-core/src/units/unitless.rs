//! Dimensionless quantities.
//!
//! [`Dimensionless`] is the kind of every same-kind ratio (`Quantity<K> / Quantity<K>`). It converts freely to and
//! from a bare `f64`.
//!
//! ```rust
//! use physq_core::length::{Kilometer, Meter};
//! use physq_core::unitless::Percent;
//! use physq_core::Unit;
//!
//! let ratio = Meter::of(250.0) / Kilometer::of(1.0);
//! assert_eq!(ratio.in_unit::<Percent>(), 25.0);
//! assert_eq!(f64::from(ratio), 0.25);
//! ```

use crate::{Dimension, Quantity};
use physq_derive::{Kind, Unit};

/// Pure number `[1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "", dimension = Dimension::DIMENSIONLESS)]
pub struct Dimensionless;

/// Plain ratio (`1`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "", kind = Dimensionless, ratio = 1.0)]
pub struct Unitless;

/// Percent (`1e-2`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "%", kind = Dimensionless, ratio = 1e-2)]
pub struct Percent;

/// Parts per million (`1e-6`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ppm", kind = Dimensionless, ratio = 1e-6)]
pub struct PartsPerMillion;

impl From<f64> for Quantity<Dimensionless> {
    #[inline]
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Quantity<Dimensionless>> for f64 {
    #[inline]
    fn from(ratio: Quantity<Dimensionless>) -> Self {
        ratio.value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unit;
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_and_into_f64() {
        let u: Quantity<Dimensionless> = 1.23456.into();
        assert_abs_diff_eq!(f64::from(u), 1.23456, epsilon = 1e-12);
    }

    #[test]
    fn display_is_bare_number() {
        assert_eq!(Quantity::<Dimensionless>::new(123.456).to_string(), "123.456");
        assert_eq!(Quantity::<Dimensionless>::new(42.0).to_string(), "42");
    }

    #[test]
    fn percent_and_ppm() {
        assert_eq!(Percent::of(50.0).value(), 0.5);
        assert_abs_diff_eq!(Unitless::of(0.002).in_unit::<PartsPerMillion>(), 2_000.0, epsilon = 1e-9);
    }
}
