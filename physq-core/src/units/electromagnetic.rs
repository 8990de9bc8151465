//! Electromagnetic kinds.
//!
//! [`Current`] is the SI base kind; everything else is derived through the relations table (`Q = I t`,
//! `P = V I`, `V = I R`, `Q = C V`, `Φ = B A`, `Φ = L I`).

use crate::Dimension;
use physq_derive::{Kind, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Electric current `[I]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "A", dimension = Dimension::CURRENT)]
pub struct Current;

/// Electric charge `[T I]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "C", dimension = Dimension::CHARGE)]
pub struct Charge;

/// Electric potential `[M L^2 T^-3 I^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "V", dimension = Dimension::VOLTAGE)]
pub struct Voltage;

/// Electrical resistance `[M L^2 T^-3 I^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "Ω", dimension = Dimension::RESISTANCE)]
pub struct Resistance;

/// Capacitance `[M^-1 L^-2 T^4 I^2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "F", dimension = Dimension::CAPACITANCE)]
pub struct Capacitance;

/// Inductance `[M L^2 T^-2 I^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "H", dimension = Dimension::INDUCTANCE)]
pub struct Inductance;

/// Magnetic flux density `[M T^-2 I^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "T", dimension = Dimension::MAGNETIC_FIELD)]
pub struct MagneticField;

/// Magnetic flux `[M L^2 T^-2 I^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "Wb", dimension = Dimension::MAGNETIC_FLUX)]
pub struct MagneticFlux;

// ─────────────────────────────────────────────────────────────────────────────
// Units
// ─────────────────────────────────────────────────────────────────────────────

/// Ampere (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "A", kind = Current, ratio = 1.0)]
pub struct Ampere;

/// Milliampere.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mA", kind = Current, ratio = 1e-3)]
pub struct Milliampere;

/// Coulomb.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "C", kind = Charge, ratio = 1.0)]
pub struct Coulomb;

/// Millicoulomb.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mC", kind = Charge, ratio = 1e-3)]
pub struct Millicoulomb;

/// Elementary charge (`1.602176634e-19 C`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "e", kind = Charge, ratio = 1.602_176_634e-19)]
pub struct ElementaryCharge;

/// Volt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "V", kind = Voltage, ratio = 1.0)]
pub struct Volt;

/// Millivolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mV", kind = Voltage, ratio = 1e-3)]
pub struct Millivolt;

/// Kilovolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kV", kind = Voltage, ratio = 1e3)]
pub struct Kilovolt;

/// Ohm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Ω", kind = Resistance, ratio = 1.0)]
pub struct Ohm;

/// Kiloohm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kΩ", kind = Resistance, ratio = 1e3)]
pub struct Kiloohm;

/// Megaohm.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MΩ", kind = Resistance, ratio = 1e6)]
pub struct Megaohm;

/// Farad.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "F", kind = Capacitance, ratio = 1.0)]
pub struct Farad;

/// Microfarad.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "µF", kind = Capacitance, ratio = 1e-6)]
pub struct Microfarad;

/// Henry.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "H", kind = Inductance, ratio = 1.0)]
pub struct Henry;

/// Tesla.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "T", kind = MagneticField, ratio = 1.0)]
pub struct Tesla;

/// Gauss (`1e-4 T`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "G", kind = MagneticField, ratio = 1e-4)]
pub struct Gauss;

/// Weber.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Wb", kind = MagneticFlux, ratio = 1.0)]
pub struct Weber;
