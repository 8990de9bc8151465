//! Amount of substance.

use crate::Dimension;
use physq_derive::{Kind, Unit};

/// Amount of substance `[N]`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
#[kind(symbol = "mol", dimension = Dimension::AMOUNT)]
pub struct Amount;

/// Mole (SI base unit).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mol", kind = Amount, ratio = 1.0)]
pub struct Mole;

/// Millimole.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(symbol = "mmol", kind = Amount, ratio = 1e-3)]
pub struct Millimole;
