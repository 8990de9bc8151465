//! Mechanical kinds: kinematics, dynamics, energy and pressure.
//!
//! Every kind here is derived; the products and quotients linking them to the base kinds live in
//! [`relations`](crate::units::relations).
//!
//! ```rust
//! use physq_core::mass::Kilogram;
//! use physq_core::mechanics::{Energy, KilometerPerHour, Velocity};
//! use physq_core::{Quantity, Unit};
//!
//! let m = Kilogram::of(1_000.0);
//! let v: Quantity<Velocity> = KilometerPerHour::of(72.0);
//! let kinetic: Quantity<Energy> = 0.5 * m * (v * v);
//! assert!((kinetic.value() - 200_000.0).abs() < 1e-6);
//! ```

use crate::Dimension;
use physq_derive::{Kind, Unit};

// ─────────────────────────────────────────────────────────────────────────────
// Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// Velocity `[L T^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "m/s", dimension = Dimension::VELOCITY)]
pub struct Velocity;

/// Acceleration `[L T^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "m/s²", dimension = Dimension::ACCELERATION)]
pub struct Acceleration;

/// Momentum `[M L T^-1]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "kg·m/s", dimension = Dimension::MOMENTUM)]
pub struct Momentum;

/// Force `[M L T^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "N", dimension = Dimension::FORCE)]
pub struct Force;

/// Energy `[M L^2 T^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "J", dimension = Dimension::ENERGY)]
pub struct Energy;

/// Power `[M L^2 T^-3]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "W", dimension = Dimension::POWER)]
pub struct Power;

/// Pressure `[M L^-1 T^-2]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "Pa", dimension = Dimension::PRESSURE)]
pub struct Pressure;

/// Mass density `[M L^-3]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "kg/m³", dimension = Dimension::DENSITY)]
pub struct Density;

/// Specific energy `[L^2 T^-2]` (energy per unit mass, the square of a velocity).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "J/kg", dimension = Dimension::new(2, 0, -2, 0, 0, 0, 0))]
pub struct SpecificEnergy;

// ─────────────────────────────────────────────────────────────────────────────
// Velocity and acceleration
// ─────────────────────────────────────────────────────────────────────────────

/// Metre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s", kind = Velocity, ratio = 1.0)]
pub struct MeterPerSecond;

/// Kilometre per hour (`1/3.6 m/s`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "km/h", kind = Velocity, ratio = 1_000.0 / 3_600.0)]
pub struct KilometerPerHour;

/// Mile per hour (`0.44704 m/s`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mph", kind = Velocity, ratio = 0.447_04)]
pub struct MilePerHour;

/// Metre per second squared.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "m/s²", kind = Acceleration, ratio = 1.0)]
pub struct MeterPerSecondSquared;

/// Standard gravity (`9.80665 m/s²`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g₀", kind = Acceleration, ratio = 9.806_65)]
pub struct StandardGravity;

/// Kilogram metre per second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg·m/s", kind = Momentum, ratio = 1.0)]
pub struct KilogramMeterPerSecond;

// ─────────────────────────────────────────────────────────────────────────────
// Force
// ─────────────────────────────────────────────────────────────────────────────

/// Newton.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "N", kind = Force, ratio = 1.0)]
pub struct Newton;

/// Kilonewton.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kN", kind = Force, ratio = 1e3)]
pub struct Kilonewton;

/// Pound-force (`4.4482216152605 N`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "lbf", kind = Force, ratio = 4.448_221_615_260_5)]
pub struct PoundForce;

// ─────────────────────────────────────────────────────────────────────────────
// Energy
// ─────────────────────────────────────────────────────────────────────────────

/// Joule.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "J", kind = Energy, ratio = 1.0)]
pub struct Joule;

/// Kilojoule.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kJ", kind = Energy, ratio = 1e3)]
pub struct Kilojoule;

/// Thermochemical calorie (`4.184 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cal", kind = Energy, ratio = 4.184)]
pub struct Calorie;

/// Thermochemical kilocalorie (`4184 J`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kcal", kind = Energy, ratio = 4_184.0)]
pub struct Kilocalorie;

/// Kilowatt-hour (`3.6 MJ`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kWh", kind = Energy, ratio = 3.6e6)]
pub struct KilowattHour;

/// Electronvolt (`1.602176634e-19 J`, exact).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "eV", kind = Energy, ratio = 1.602_176_634e-19)]
pub struct ElectronVolt;

/// Kiloelectronvolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "keV", kind = Energy, ratio = 1.602_176_634e-16)]
pub struct KiloElectronVolt;

/// Megaelectronvolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MeV", kind = Energy, ratio = 1.602_176_634e-13)]
pub struct MegaElectronVolt;

/// Gigaelectronvolt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "GeV", kind = Energy, ratio = 1.602_176_634e-10)]
pub struct GigaElectronVolt;

// ─────────────────────────────────────────────────────────────────────────────
// Power
// ─────────────────────────────────────────────────────────────────────────────

/// Watt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "W", kind = Power, ratio = 1.0)]
pub struct Watt;

/// Kilowatt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kW", kind = Power, ratio = 1e3)]
pub struct Kilowatt;

/// Megawatt.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "MW", kind = Power, ratio = 1e6)]
pub struct Megawatt;

/// Mechanical horsepower (`745.69987158227022 W`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "hp", kind = Power, ratio = 745.699_871_582_270_22)]
pub struct Horsepower;

// ─────────────────────────────────────────────────────────────────────────────
// Pressure and density
// ─────────────────────────────────────────────────────────────────────────────

/// Pascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "Pa", kind = Pressure, ratio = 1.0)]
pub struct Pascal;

/// Kilopascal.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kPa", kind = Pressure, ratio = 1e3)]
pub struct Kilopascal;

/// Bar (`1e5 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "bar", kind = Pressure, ratio = 1e5)]
pub struct Bar;

/// Standard atmosphere (`101325 Pa`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "atm", kind = Pressure, ratio = 101_325.0)]
pub struct Atmosphere;

/// Pound per square inch.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "psi", kind = Pressure, ratio = 6_894.757_293_168)]
pub struct Psi;

/// Kilogram per cubic metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "kg/m³", kind = Density, ratio = 1.0)]
pub struct KilogramPerCubicMeter;

/// Gram per cubic centimetre (`1000 kg/m³`).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "g/cm³", kind = Density, ratio = 1_000.0)]
pub struct GramPerCubicCentimeter;
