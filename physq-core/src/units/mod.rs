//! Predefined kinds and units grouped by physical domain.
//!
//! `physq-core` ships the kinds and units below so that formatting and the relations table work out of the box
//! without downstream crates having to fight Rust's orphan rules. The set is representative, not exhaustive: any
//! crate can declare further kinds and units by implementing [`Kind`](crate::Kind) and [`Unit`](crate::Unit), and
//! link them with [`relations!`](crate::relations).
//!
//! ## Modules
//!
//! - [`length`]: length, area and volume (metre ladder, imperial and astronomical lengths).
//! - [`mass`]: mass (kilogram is the SI scaling unit).
//! - [`time`]: time and frequency.
//! - [`temperature`]: thermodynamic temperature with affine Celsius and Fahrenheit scales.
//! - [`amount`]: amount of substance.
//! - [`luminous`]: luminous intensity.
//! - [`electromagnetic`]: current and the derived electrical and magnetic kinds.
//! - [`mechanics`]: velocity, acceleration, momentum, force, energy, power, pressure, density.
//! - [`angular`]: plane angle and angular velocity, with trig helpers.
//! - [`unitless`]: dimensionless ratios.
//! - [`relations`]: the product and quotient table linking all of the above.

pub mod amount;
pub mod angular;
pub mod electromagnetic;
pub mod length;
pub mod luminous;
pub mod mass;
pub mod mechanics;
pub mod relations;
pub mod temperature;
pub mod time;
pub mod unitless;
