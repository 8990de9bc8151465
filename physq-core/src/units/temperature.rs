//! Thermodynamic temperature.
//!
//! Quantities store kelvins. [`Celsius`] and [`Fahrenheit`] are affine scales: their `OFFSET` is the kelvin value
//! of their zero point, so `Celsius::of(0.0)` is `273.15 K`.
//!
//! Offsets only apply at the unit boundary. Adding two temperatures adds kelvins, which is what a temperature
//! difference needs; there is no separate "interval" kind.

use crate::Dimension;
use physq_derive::{Kind, Unit};

/// Thermodynamic temperature `[Θ]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "K", dimension = Dimension::TEMPERATURE)]
pub struct Temperature;

/// Kelvin (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "K", kind = Temperature, ratio = 1.0)]
pub struct Kelvin;

/// Degree Celsius (`K - 273.15`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°C", kind = Temperature, ratio = 1.0, offset = 273.15)]
pub struct Celsius;

/// Degree Fahrenheit (`K * 9/5 - 459.67`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°F", kind = Temperature, ratio = 5.0 / 9.0, offset = 459.67 * 5.0 / 9.0)]
pub struct Fahrenheit;

/// Degree Rankine (`K * 9/5`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "°R", kind = Temperature, ratio = 5.0 / 9.0)]
pub struct Rankine;
