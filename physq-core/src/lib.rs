//! Core dimension algebra for dimensionally checked physics code.
//!
//! `physq-core` has two layers that share one [`Dimension`] model:
//!
//! - A *dynamic* layer: a [`Value`] is an `f64` magnitude in SI base units paired with its dimension. Addition and
//!   subtraction check dimensions at runtime and return [`Result`]; multiplication, division and powers always
//!   succeed and derive the result dimension. [`Vector3`] is a triple of values sharing one dimension.
//! - A *typed* layer: a [`Quantity<K>`] is an `f64` tagged with a zero-sized [`Kind`] marker (length, force, …).
//!   Mixing kinds is a compile error, units enter and leave through [`Unit::of`] and [`Quantity::in_unit`], and
//!   products and quotients between kinds are declared with [`relations!`].
//!
//! Most users should depend on `physq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Tracking the dimensional formula of every result through `*`, `/`, `powi` and `sqrt`.
//! - Rejecting additions of incompatible dimensions, at runtime for [`Value`] and at compile time for [`Quantity`].
//! - Dimension-safe 3-vectors: dot products, cross products, projections and angles.
//!
//! # What this crate does not try to solve
//!
//! - Exact arithmetic: magnitudes are `f64`.
//! - Parsing unit strings, or a runtime registry of units.
//! - Non-SI dimension systems and tensors beyond 3-vectors.
//!
//! # Quick start
//!
//! Dynamic values:
//!
//! ```rust
//! use physq_core::{Dimension, Value};
//!
//! let distance = Value::new(100.0, Dimension::LENGTH);
//! let time = Value::new(9.58, Dimension::TIME);
//! let speed = distance / time;
//! assert_eq!(speed.dim(), Dimension::VELOCITY);
//!
//! let err = distance.try_add(time).unwrap_err();
//! assert_eq!(err.to_string(), "cannot add quantities of dimension [L^1] and [T^1]");
//! ```
//!
//! Typed quantities:
//!
//! ```rust
//! use physq_core::length::Kilometer;
//! use physq_core::mechanics::Velocity;
//! use physq_core::time::Hour;
//! use physq_core::{Quantity, Unit};
//!
//! let v: Quantity<Velocity> = Kilometer::of(90.0) / Hour::of(1.0);
//! assert_eq!(v.value(), 25.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use physq_core::length::Meter;
//! use physq_core::time::Second;
//! use physq_core::Unit;
//!
//! let _ = Meter::of(1.0) + Second::of(1.0); // cannot add different kinds
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `physq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! physq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for [`Dimension`], [`Value`], [`Vector3`] and [`Quantity<K>`].
//!
//! # Panics and errors
//!
//! Fallible operations return [`Result`] with an [`Error`] naming the operation and the offending dimensions. No
//! operation panics on its own; magnitudes follow IEEE-754 behavior (NaN and infinities propagate). Exponents that
//! would leave the `i8` range saturate and are reported through `log::warn!`.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
mod error;
mod macros;
mod math;
mod quantity;
mod tolerance;
mod unit;
mod value;
mod vector;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{BaseDimension, Dimension};
pub use error::{Error, Result};
pub use quantity::Quantity;
pub use tolerance::Tolerance;
pub use unit::{Kind, KindDiv, KindMul, Unit};
pub use value::Value;
pub use vector::Vector3;

#[cfg(feature = "serde")]
pub use quantity::serde_with_dimension;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined kinds, units and constants
// ─────────────────────────────────────────────────────────────────────────────

/// Physical constants (CODATA 2018).
pub mod constants;

/// Predefined kinds and units (grouped by dimension).
///
/// These are defined in `physq-core` so they can implement formatting and the kind relations without running into
/// Rust's orphan rules.
pub mod units;

pub use units::amount;
pub use units::angular;
pub use units::electromagnetic;
pub use units::length;
pub use units::luminous;
pub use units::mass;
pub use units::mechanics;
pub use units::temperature;
pub use units::time;
pub use units::unitless;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mechanics::Acceleration;
    use crate::relations;
    use crate::time::Time;
    use approx::assert_relative_eq;

    // ─────────────────────────────────────────────────────────────────────────────
    // Test kind and unit for lib.rs tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum Jerk {}
    impl Kind for Jerk {
        const DIM: Dimension = Dimension::new(1, 0, -3, 0, 0, 0, 0);
        const SYMBOL: &'static str = "m/s³";
    }

    #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
    pub enum GPerSecond {}
    impl Unit for GPerSecond {
        type Kind = Jerk;
        const RATIO: f64 = 9.806_65;
        const SYMBOL: &'static str = "g/s";
    }

    relations! {
        Jerk * Time = Acceleration;
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Hand-written kinds
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn hand_written_unit_round_trip() {
        let j = GPerSecond::of(2.0);
        assert_relative_eq!(j.value(), 19.613_3, max_relative = 1e-12);
        assert_relative_eq!(j.in_unit::<GPerSecond>(), 2.0, max_relative = 1e-15);
        assert_eq!(j.dim(), Dimension::new(1, 0, -3, 0, 0, 0, 0));
    }

    #[test]
    fn hand_written_relation_multiplies() {
        let j = Quantity::<Jerk>::new(3.0);
        let t = Quantity::<Time>::new(2.0);
        let a: Quantity<Acceleration> = j * t;
        assert_eq!(a.value(), 6.0);
        let a2: Quantity<Acceleration> = t * j;
        assert_eq!(a2, a);
    }

    #[test]
    fn typed_and_dynamic_layers_agree() {
        let j = Quantity::<Jerk>::new(3.0);
        let t = Quantity::<Time>::new(2.0);
        let typed = Value::from(j * t);
        let dynamic = Value::from(j) * Value::from(t);
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn same_kind_division_is_dimensionless() {
        let ratio = Quantity::<Jerk>::new(6.0) / Quantity::<Jerk>::new(3.0);
        assert_eq!(ratio.value(), 2.0);
        assert!(ratio.dim().is_dimensionless());
    }
}
