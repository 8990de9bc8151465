//! Time and frequency units.
//!
//! The SI scaling units are [`Second`] and [`Hertz`]. A [`Year`] is the Julian year (`365.25 d`).

use crate::Dimension;
use physq_derive::{Kind, Unit};

/// Time `[T]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "s", dimension = Dimension::TIME)]
pub struct Time;

/// Frequency `[T^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "Hz", dimension = Dimension::FREQUENCY)]
pub struct Frequency;

// ─────────────────────────────────────────────────────────────────────────────
// Time
// ─────────────────────────────────────────────────────────────────────────────

/// Second (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "s", kind = Time, ratio = 1.0)]
pub struct Second;

/// Millisecond (`1e-3 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ms", kind = Time, ratio = 1e-3)]
pub struct Millisecond;

/// Microsecond (`1e-6 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µs", kind = Time, ratio = 1e-6)]
pub struct Microsecond;

/// Nanosecond (`1e-9 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "ns", kind = Time, ratio = 1e-9)]
pub struct Nanosecond;

/// Minute (`60 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "min", kind = Time, ratio = 60.0)]
pub struct Minute;

/// Hour (`3600 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "h", kind = Time, ratio = 3_600.0)]
pub struct Hour;

/// Day (`86400 s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "d", kind = Time, ratio = 86_400.0)]
pub struct Day;

/// Julian year (`365.25 d`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "yr", kind = Time, ratio = 31_557_600.0)]
pub struct Year;

// ─────────────────────────────────────────────────────────────────────────────
// Frequency
// ─────────────────────────────────────────────────────────────────────────────

/// Hertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Hz", kind = Frequency, ratio = 1.0)]
pub struct Hertz;

/// Kilohertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kHz", kind = Frequency, ratio = 1e3)]
pub struct Kilohertz;

/// Megahertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MHz", kind = Frequency, ratio = 1e6)]
pub struct Megahertz;

/// Gigahertz.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "GHz", kind = Frequency, ratio = 1e9)]
pub struct Gigahertz;
