//! Plane angles and angular velocity.
//!
//! [`Angle`] shares the dimensionless dimension `[1]` and [`AngularVelocity`] shares `[T^-1]` with frequency, but
//! both are distinct kinds: an angle cannot be added to a ratio without an explicit conversion.
//!
//! ```rust
//! use physq_core::angular::{Degree, Radian};
//! use physq_core::Unit;
//!
//! let right = Degree::of(90.0);
//! assert!((right.in_unit::<Radian>() - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! assert!((right.sin() - 1.0).abs() < 1e-15);
//! ```

use crate::math;
use crate::unitless::Dimensionless;
use crate::{Dimension, Quantity};
use core::f64::consts::PI;
use physq_derive::{Kind, Unit};

/// Plane angle `[1]`, in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "rad", dimension = Dimension::DIMENSIONLESS)]
pub struct Angle;

/// Angular velocity `[T^-1]`, in radians per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "rad/s", dimension = Dimension::FREQUENCY)]
pub struct AngularVelocity;

/// Radian.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad", kind = Angle, ratio = 1.0)]
pub struct Radian;

/// Degree (`π/180 rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°", kind = Angle, ratio = PI / 180.0)]
pub struct Degree;

/// Arcminute (`1/60 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "′", kind = Angle, ratio = PI / 10_800.0)]
pub struct Arcminute;

/// Arcsecond (`1/3600 °`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "″", kind = Angle, ratio = PI / 648_000.0)]
pub struct Arcsecond;

/// Full turn (`2π rad`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rev", kind = Angle, ratio = 2.0 * PI)]
pub struct Revolution;

/// Radian per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rad/s", kind = AngularVelocity, ratio = 1.0)]
pub struct RadianPerSecond;

/// Revolution per minute (`2π/60 rad/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "rpm", kind = AngularVelocity, ratio = 2.0 * PI / 60.0)]
pub struct RevolutionPerMinute;

impl Quantity<Angle> {
    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        math::sin(self.value())
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        math::cos(self.value())
    }

    /// Tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        math::tan(self.value())
    }
}

impl From<Quantity<Angle>> for Quantity<Dimensionless> {
    #[inline]
    fn from(angle: Quantity<Angle>) -> Self {
        Self::new(angle.value())
    }
}
