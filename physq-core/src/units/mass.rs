//! Mass units.
//!
//! The SI scaling unit is [`Kilogram`] (`Kilogram::RATIO == 1.0`). Astronomical masses use the nominal values the
//! constants module also exposes.

use crate::Dimension;
use physq_derive::{Kind, Unit};

/// Mass `[M]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "kg", dimension = Dimension::MASS)]
pub struct Mass;

/// Kilogram (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg", kind = Mass, ratio = 1.0)]
pub struct Kilogram;

/// Gram (`1e-3 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g", kind = Mass, ratio = 1e-3)]
pub struct Gram;

/// Milligram (`1e-6 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mg", kind = Mass, ratio = 1e-6)]
pub struct Milligram;

/// Metric tonne (`1000 kg`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "t", kind = Mass, ratio = 1_000.0)]
pub struct Tonne;

/// International avoirdupois pound (`0.45359237 kg`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lb", kind = Mass, ratio = 0.453_592_37)]
pub struct Pound;

/// Unified atomic mass unit (dalton, CODATA 2018).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "u", kind = Mass, ratio = 1.660_539_066_60e-27)]
pub struct Dalton;

/// Nominal solar mass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "M☉", kind = Mass, ratio = 1.988_92e30)]
pub struct SolarMass;

/// Nominal Earth mass.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "M⊕", kind = Mass, ratio = 5.972_2e24)]
pub struct EarthMass;
