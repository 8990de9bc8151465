//! Luminous intensity.

use crate::Dimension;
use physq_derive::{Kind, Unit};

/// Luminous intensity `[J]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "cd", dimension = Dimension::LUMINOUS_INTENSITY)]
pub struct LuminousIntensity;

/// Candela (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "cd", kind = LuminousIntensity, ratio = 1.0)]
pub struct Candela;
