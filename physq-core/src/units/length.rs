//! Length, area and volume.
//!
//! The SI scaling units are [`Meter`], [`SquareMeter`] and [`CubicMeter`] (`RATIO == 1.0`). Other units are exact
//! or best-available ratios to them.
//!
//! Notes on definitions used here:
//!
//! - **Astronomical unit (au)** is **exactly** `149_597_870_700 m` (IAU 2012).
//! - **Parsec (pc)** is defined from au via `pc = au * 648000 / π`.
//! - **Light-year (ly)** is derived from the exact speed of light `c = 299_792_458 m/s` and one **Julian year**
//!   (`365.25 d`, `d = 86400 s`).
//! - The international inch is exactly `0.0254 m`.
//!
//! ```rust
//! use physq_core::length::{AstronomicalUnit, Kilometer};
//! use physq_core::Unit;
//!
//! let au = AstronomicalUnit::of(1.0);
//! assert_eq!(au.in_unit::<Kilometer>(), 149_597_870.7);
//! ```

use crate::Dimension;
use core::f64::consts::PI;
use physq_derive::{Kind, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Length `[L]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "m", dimension = Dimension::LENGTH)]
pub struct Length;

/// Area `[L^2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "m²", dimension = Dimension::AREA)]
pub struct Area;

/// Volume `[L^3]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "m³", dimension = Dimension::VOLUME)]
pub struct Volume;

// ─────────────────────────────────────────────────────────────────────────────
// SI ladder
// ─────────────────────────────────────────────────────────────────────────────

/// Metre (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m", kind = Length, ratio = 1.0)]
pub struct Meter;

/// Kilometre (`1000 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km", kind = Length, ratio = 1_000.0)]
pub struct Kilometer;

/// Centimetre (`1e-2 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cm", kind = Length, ratio = 1e-2)]
pub struct Centimeter;

/// Millimetre (`1e-3 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mm", kind = Length, ratio = 1e-3)]
pub struct Millimeter;

/// Micrometre (`1e-6 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µm", kind = Length, ratio = 1e-6)]
pub struct Micrometer;

/// Nanometre (`1e-9 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "nm", kind = Length, ratio = 1e-9)]
pub struct Nanometer;

/// Ångström (`1e-10 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Å", kind = Length, ratio = 1e-10)]
pub struct Angstrom;

// ─────────────────────────────────────────────────────────────────────────────
// Imperial
// ─────────────────────────────────────────────────────────────────────────────

/// International inch (`0.0254 m`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "in", kind = Length, ratio = 0.0254)]
pub struct Inch;

/// International foot (`12 in`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ft", kind = Length, ratio = 0.3048)]
pub struct Foot;

/// International statute mile (`5280 ft`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mi", kind = Length, ratio = 1_609.344)]
pub struct Mile;

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (exact, IAU 2012).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "au", kind = Length, ratio = 149_597_870_700.0)]
pub struct AstronomicalUnit;

/// Light-year (Julian year at the exact speed of light).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ly", kind = Length, ratio = 299_792_458.0 * 31_557_600.0)]
pub struct LightYear;

/// Parsec (`au * 648000 / π`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "pc", kind = Length, ratio = 149_597_870_700.0 * 648_000.0 / PI)]
pub struct Parsec;

// ─────────────────────────────────────────────────────────────────────────────
// Area and volume
// ─────────────────────────────────────────────────────────────────────────────

/// Square metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m²", kind = Area, ratio = 1.0)]
pub struct SquareMeter;

/// Square kilometre (`1e6 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km²", kind = Area, ratio = 1e6)]
pub struct SquareKilometer;

/// Hectare (`1e4 m²`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ha", kind = Area, ratio = 1e4)]
pub struct Hectare;

/// Cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m³", kind = Volume, ratio = 1.0)]
pub struct CubicMeter;

/// Litre (`1e-3 m³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "L", kind = Volume, ratio = 1e-3)]
pub struct Liter;

/// Millilitre (`1e-6 m³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mL", kind = Volume, ratio = 1e-6)]
pub struct Milliliter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Quantity, Unit};
    use approx::assert_relative_eq;

    #[test]
    fn metric_ladder() {
        let d = Meter::of(1.0);
        assert_eq!(d.in_unit::<Kilometer>(), 1e-3);
        assert_eq!(d.in_unit::<Centimeter>(), 100.0);
        assert_eq!(d.in_unit::<Millimeter>(), 1_000.0);
        assert_relative_eq!(d.in_unit::<Nanometer>(), 1e9, max_relative = 1e-15);
        assert_relative_eq!(d.in_unit::<Angstrom>(), 1e10, max_relative = 1e-15);
    }

    #[test]
    fn imperial_definitions() {
        assert_relative_eq!(Foot::of(1.0).in_unit::<Inch>(), 12.0, max_relative = 1e-15);
        assert_relative_eq!(Mile::of(1.0).in_unit::<Foot>(), 5_280.0, max_relative = 1e-12);
    }

    #[test]
    fn astronomical_lengths() {
        assert_relative_eq!(LightYear::of(1.0).value(), 9.460_730_472_580_8e15, max_relative = 1e-15);
        assert_relative_eq!(Parsec::of(1.0).value(), 3.085_677_581_491_367e16, max_relative = 1e-12);
        assert_relative_eq!(Parsec::of(1.0).in_unit::<LightYear>(), 3.261_563_777, max_relative = 1e-9);
    }

    #[test]
    fn area_and_volume_units() {
        assert_eq!(SquareKilometer::of(1.0).in_unit::<Hectare>(), 100.0);
        assert_eq!(CubicMeter::of(1.0).in_unit::<Liter>(), 1_000.0);
        assert_relative_eq!(Liter::of(1.0).in_unit::<Milliliter>(), 1_000.0, max_relative = 1e-12);
    }

    #[test]
    fn square_and_cube_of_length() {
        let side = Meter::of(3.0);
        let area: Quantity<Area> = side * side;
        let volume: Quantity<Volume> = area * side;
        assert_eq!(area.value(), 9.0);
        assert_eq!(volume.value(), 27.0);
        assert_eq!(volume.to_string(), "27 m³");
        let back: Quantity<Length> = volume / area;
        assert_eq!(back, side);
    }
}
