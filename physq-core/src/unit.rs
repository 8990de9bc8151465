//! Kind and unit marker traits.

use crate::dimension::Dimension;
use crate::units::unitless::Dimensionless;
use crate::Quantity;
use core::fmt::Debug;

/// Trait implemented by every **kind** of physical quantity (length, force, …).
///
/// A kind is a zero-sized marker that pins a [`Quantity`] to one [`Dimension`]. Many kinds may share a dimension
/// (frequency and angular velocity are both `[T^-1]`); they stay distinct at the type level.
///
/// * `DIM` is the dimensional formula of every quantity of this kind.
/// * `SYMBOL` is the SI symbol printed by [`core::fmt::Display`] (e.g. `"N"`), empty for pure numbers.
///
/// Kinds are normally declared with `#[derive(Kind)]`:
///
/// ```rust,ignore
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Kind)]
/// #[kind(symbol = "N", dimension = Dimension::FORCE)]
/// pub struct Force;
/// ```
pub trait Kind: Copy + PartialEq + Debug + 'static {
    /// Dimensional formula shared by every quantity of this kind.
    const DIM: Dimension;

    /// SI symbol, shown by [`core::fmt::Display`].
    const SYMBOL: &'static str;
}

/// Trait implemented by every **unit**: a named scale for one [`Kind`].
///
/// Quantities always store SI base-unit magnitudes; units only matter at the boundary, when a number enters
/// ([`Unit::of`]) or leaves ([`Quantity::in_unit`]) the typed world.
///
/// * `RATIO` is the SI magnitude of one unit (`Kilometer::RATIO == 1000.0`).
/// * `OFFSET` is the SI magnitude of the unit's zero point; it is `0.0` except for affine temperature scales
///   (`Celsius::OFFSET == 273.15`).
///
/// # Invariants
///
/// - Implementations should be zero-sized marker types.
/// - `RATIO` should be finite and non-zero.
pub trait Unit: Copy + PartialEq + Debug + 'static {
    /// Kind measured by this unit.
    type Kind: Kind;

    /// SI magnitude of one unit.
    const RATIO: f64;

    /// SI magnitude of this unit's zero point.
    const OFFSET: f64 = 0.0;

    /// Printable symbol (e.g. `"km"`).
    const SYMBOL: &'static str;

    /// Builds a quantity from a number expressed in this unit.
    ///
    /// ```rust
    /// use physq_core::length::Kilometer;
    /// use physq_core::Unit;
    ///
    /// let d = Kilometer::of(1.25);
    /// assert_eq!(d.value(), 1250.0);
    /// ```
    #[inline]
    fn of(value: f64) -> Quantity<Self::Kind> {
        Quantity::new(value * Self::RATIO + Self::OFFSET)
    }
}

/// Product relation between kinds: `Self * Rhs = Output`.
///
/// Implementations are generated by [`relations!`](crate::relations), which also checks at compile time that the
/// output kind's dimension is the composition of the operand dimensions.
pub trait KindMul<Rhs: Kind>: Kind {
    /// Kind of the product.
    type Output: Kind;
}

/// Quotient relation between kinds: `Self / Rhs = Output`.
///
/// Implementations are generated by [`relations!`](crate::relations). Every kind divided by itself is
/// [`Dimensionless`].
pub trait KindDiv<Rhs: Kind>: Kind {
    /// Kind of the quotient.
    type Output: Kind;
}

impl<K: Kind> KindDiv<K> for K {
    type Output = Dimensionless;
}
