//! Dimensionally checked physical quantities and 3-vectors.
//!
//! `physq` is the user-facing crate in this workspace. It re-exports the full API from `physq-core` plus the
//! predefined kinds, units and constants, and adds TOML-backed tolerance settings.
//!
//! Two representations share one dimension model over the seven SI base dimensions:
//!
//! - [`Value`]: an `f64` in SI base units with a runtime [`Dimension`]. Use it when dimensions are only known at
//!   runtime; addition of mismatched dimensions returns an [`Error`].
//! - [`Quantity<K>`]: an `f64` tagged with a compile-time [`Kind`]. Use it when dimensions are known statically;
//!   adding metres to seconds does not compile.
//!
//! # Quick start
//!
//! Work with dynamically dimensioned values:
//!
//! ```rust
//! use physq::{Dimension, Value, Vector3};
//!
//! let r = Vector3::from_array([0.0, 2.0, 0.0], Dimension::LENGTH);
//! let f = Vector3::from_array([3.0, 0.0, 0.0], Dimension::FORCE);
//! let torque = r.cross(f);
//! assert_eq!(torque.dim(), Dimension::ENERGY);
//! assert_eq!(torque.z(), Value::new(-6.0, Dimension::ENERGY));
//! ```
//!
//! Convert between units of one kind:
//!
//! ```rust
//! use physq::mechanics::{KilometerPerHour, MeterPerSecond};
//! use physq::Unit;
//!
//! let v = MeterPerSecond::of(10.0);
//! assert!((v.in_unit::<KilometerPerHour>() - 36.0).abs() < 1e-12);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use physq::mass::Kilogram;
//! use physq::time::Second;
//! use physq::Unit;
//!
//! let _ = Kilogram::of(1.0) + Second::of(1.0); // cannot add different kinds
//! ```
//!
//! # Modules
//!
//! Kinds and units are grouped by domain (also re-exported at the crate root):
//!
//! - `physq::length` (metres, inches, AU, parsec, areas and volumes)
//! - `physq::mass` (kilograms, pounds, daltons, solar mass)
//! - `physq::time` (seconds to years, and frequency)
//! - `physq::angular` (radians, degrees, angular velocity)
//! - `physq::mechanics` (velocity, force, energy, power, pressure, …)
//! - `physq::electromagnetic` (current, charge, voltage, resistance, …)
//! - `physq::temperature` (kelvin, Celsius, Fahrenheit)
//! - `physq::amount`, `physq::luminous`, `physq::unitless`
//! - `physq::constants` (CODATA 2018)
//! - `physq::config` (tolerance settings, `config` feature)
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `physq-core`.
//! - `serde`: enables `serde` support for dimensions, values, vectors and quantities.
//! - `config` (default): enables [`config`], which implies `std` and `serde`.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! physq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Logging
//!
//! Diagnostics go through the `log` facade: exponent saturation is reported at `warn`, rejected operations at
//! `debug`, and settings loading at `info`/`warn`. Install any `log` backend to see them.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use physq_core::*;

/// Derive macros used by `physq-core` to define kind and unit marker types.
///
/// These macros expand in terms of `crate::Kind`, `crate::Unit`, `crate::Quantity` and `crate::Dimension`, so they
/// are intended for use inside `physq-core` (or crates exposing the same crate-root API). Most users should implement
/// [`Kind`] and [`Unit`] by hand instead.
pub use physq_derive::{Kind, Unit};

#[cfg(feature = "config")]
pub mod config;

#[cfg(feature = "config")]
pub use config::{ConfigError, Settings};
