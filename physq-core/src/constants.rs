//! Physical constants.
//!
//! Values are CODATA 2018 recommended values unless noted. Constants whose kind is one of the built-in kinds are
//! typed [`Quantity`] items; the others are dynamically dimensioned [`Value`] items. All of them are `const`, so the
//! table is frozen at compile time and has no initialization order.
//!
//! ```rust
//! use physq_core::constants::{GRAVITATIONAL_CONSTANT, SPEED_OF_LIGHT};
//! use physq_core::Dimension;
//!
//! assert_eq!(SPEED_OF_LIGHT.value(), 299_792_458.0);
//! assert_eq!(GRAVITATIONAL_CONSTANT.dim(), Dimension::new(3, -1, -2, 0, 0, 0, 0));
//! ```

use crate::dimension::Dimension;
use crate::units::electromagnetic::Charge;
use crate::units::length::Length;
use crate::units::mass::Mass;
use crate::units::mechanics::{Acceleration, Energy, Power, Velocity};
use crate::units::temperature::Temperature;
use crate::units::time::Time;
use crate::units::unitless::Dimensionless;
use crate::value::Value;
use crate::Quantity;

// ─────────────────────────────────────────────────────────────────────────────
// Universal constants
// ─────────────────────────────────────────────────────────────────────────────

/// Speed of light in vacuum, `c` (exact).
pub const SPEED_OF_LIGHT: Quantity<Velocity> = Quantity::new(299_792_458.0);

/// Planck constant, `h` (exact), in J·s.
pub const PLANCK: Value = Value::new(6.626_070_15e-34, Dimension::new(2, 1, -1, 0, 0, 0, 0));

/// Reduced Planck constant, `ħ = h / 2π`, in J·s.
pub const PLANCK_REDUCED: Value = Value::new(1.054_571_817e-34, Dimension::new(2, 1, -1, 0, 0, 0, 0));

/// Newtonian constant of gravitation, `G`, in m³·kg⁻¹·s⁻².
pub const GRAVITATIONAL_CONSTANT: Value = Value::new(6.674_30e-11, Dimension::new(3, -1, -2, 0, 0, 0, 0));

/// Boltzmann constant, `k_B` (exact), in J/K.
pub const BOLTZMANN: Value = Value::new(1.380_649e-23, Dimension::new(2, 1, -2, 0, -1, 0, 0));

/// Avogadro constant, `N_A` (exact), in mol⁻¹.
pub const AVOGADRO: Value = Value::new(6.022_140_76e23, Dimension::new(0, 0, 0, 0, 0, -1, 0));

/// Molar gas constant, `R = N_A k_B`, in J·mol⁻¹·K⁻¹.
pub const GAS_CONSTANT: Value = Value::new(8.314_462_618, Dimension::new(2, 1, -2, 0, -1, -1, 0));

/// Vacuum electric permittivity, `ε₀`, in F/m.
pub const VACUUM_PERMITTIVITY: Value = Value::new(8.854_187_812_8e-12, Dimension::new(-3, -1, 4, 2, 0, 0, 0));

/// Vacuum magnetic permeability, `μ₀`, in H/m.
pub const VACUUM_PERMEABILITY: Value = Value::new(1.256_637_062_12e-6, Dimension::new(1, 1, -2, -2, 0, 0, 0));

/// Elementary charge, `e` (exact).
pub const ELEMENTARY_CHARGE: Quantity<Charge> = Quantity::new(1.602_176_634e-19);

/// Coulomb constant, `k_e = 1 / 4πε₀`, in N·m²/C².
pub const COULOMB_CONSTANT: Value = Value::new(8.987_551_792_3e9, Dimension::new(3, 1, -4, -2, 0, 0, 0));

/// Stefan–Boltzmann constant, `σ`, in W·m⁻²·K⁻⁴.
pub const STEFAN_BOLTZMANN: Value = Value::new(5.670_374_419e-8, Dimension::new(0, 1, -3, 0, -4, 0, 0));

/// Wien wavelength displacement constant, `b`, in m·K.
pub const WIEN_DISPLACEMENT: Value = Value::new(2.897_771_955e-3, Dimension::new(1, 0, 0, 0, 1, 0, 0));

/// Rydberg constant, `R∞`, in m⁻¹.
pub const RYDBERG: Value = Value::new(10_973_731.568_160, Dimension::new(-1, 0, 0, 0, 0, 0, 0));

/// Fine-structure constant, `α`.
pub const FINE_STRUCTURE: Quantity<Dimensionless> = Quantity::new(7.297_352_569_3e-3);

/// Bohr radius, `a₀`.
pub const BOHR_RADIUS: Quantity<Length> = Quantity::new(5.291_772_109_03e-11);

/// Standard acceleration of gravity, `g₀` (exact, ISO 80000-3).
pub const STANDARD_GRAVITY: Quantity<Acceleration> = Quantity::new(9.806_65);

/// Unified atomic mass unit, `u`.
pub const ATOMIC_MASS_UNIT: Quantity<Mass> = Quantity::new(1.660_539_066_60e-27);

// ─────────────────────────────────────────────────────────────────────────────
// Particles
// ─────────────────────────────────────────────────────────────────────────────

/// Electron rest mass, `m_e`.
pub const ELECTRON_MASS: Quantity<Mass> = Quantity::new(9.109_383_701_5e-31);

/// Proton rest mass, `m_p`.
pub const PROTON_MASS: Quantity<Mass> = Quantity::new(1.672_621_923_69e-27);

/// Neutron rest mass, `m_n`.
pub const NEUTRON_MASS: Quantity<Mass> = Quantity::new(1.674_927_498_04e-27);

/// Electron rest energy, `m_e c²`.
pub const ELECTRON_REST_ENERGY: Quantity<Energy> = Quantity::new(8.187_105_776_9e-14);

/// Free neutron mean lifetime.
pub const NEUTRON_MEAN_LIFETIME: Quantity<Time> = Quantity::new(879.4);

// ─────────────────────────────────────────────────────────────────────────────
// Astronomy
// ─────────────────────────────────────────────────────────────────────────────

/// Astronomical unit (exact, IAU 2012).
pub const ASTRONOMICAL_UNIT: Quantity<Length> = Quantity::new(1.495_978_707e11);

/// Light-year (Julian year at `c`).
pub const LIGHT_YEAR: Quantity<Length> = Quantity::new(9.460_730_472_580_8e15);

/// Parsec.
pub const PARSEC: Quantity<Length> = Quantity::new(3.085_677_581_491_367_3e16);

/// Nominal solar mass.
pub const SOLAR_MASS: Quantity<Mass> = Quantity::new(1.988_92e30);

/// Nominal solar luminosity (IAU 2015).
pub const SOLAR_LUMINOSITY: Quantity<Power> = Quantity::new(3.828e26);

/// Nominal solar radius (IAU 2015).
pub const SOLAR_RADIUS: Quantity<Length> = Quantity::new(6.957e8);

/// Earth mass.
pub const EARTH_MASS: Quantity<Mass> = Quantity::new(5.972_2e24);

/// Mean Earth radius.
pub const EARTH_RADIUS: Quantity<Length> = Quantity::new(6.371e6);

/// Cosmic microwave background temperature.
pub const CMB_TEMPERATURE: Quantity<Temperature> = Quantity::new(2.725_5);
