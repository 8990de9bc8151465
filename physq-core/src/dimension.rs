//! Dimensional formulas over the seven SI base dimensions.
//!
//! A [`Dimension`] is a vector of seven small signed exponents, one per [`BaseDimension`]. Multiplying quantities
//! adds exponents, dividing subtracts them, integer powers scale them and square roots halve them.
//!
//! Exponents are stored as `i8`. Composition and powers saturate at the `i8` bounds instead of wrapping; a saturated
//! result is reported through `log::warn!`. The `const` [`Dimension::checked_compose`] and
//! [`Dimension::checked_decompose`] variants return `None` instead.

use crate::error::{Error, Result};
use core::fmt;
use core::ops::{Div, Mul};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the seven SI base dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BaseDimension {
    /// Length (metre).
    Length,
    /// Mass (kilogram).
    Mass,
    /// Time (second).
    Time,
    /// Electric current (ampere).
    Current,
    /// Thermodynamic temperature (kelvin).
    Temperature,
    /// Amount of substance (mole).
    Amount,
    /// Luminous intensity (candela).
    LuminousIntensity,
}

impl BaseDimension {
    /// All base dimensions in canonical rendering order.
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Length,
        BaseDimension::Mass,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::Amount,
        BaseDimension::LuminousIntensity,
    ];

    /// Conventional dimension symbol (`L`, `M`, `T`, `I`, `Θ`, `N`, `J`).
    pub const fn symbol(self) -> &'static str {
        match self {
            BaseDimension::Length => "L",
            BaseDimension::Mass => "M",
            BaseDimension::Time => "T",
            BaseDimension::Current => "I",
            BaseDimension::Temperature => "Θ",
            BaseDimension::Amount => "N",
            BaseDimension::LuminousIntensity => "J",
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// Exponents of the seven SI base dimensions.
///
/// ```rust
/// use physq_core::Dimension;
///
/// let velocity = Dimension::LENGTH / Dimension::TIME;
/// assert_eq!(velocity, Dimension::VELOCITY);
/// assert_eq!(velocity.to_string(), "[L^1 T^-1]");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Dimension([i8; 7]);

impl Dimension {
    /// All exponents zero: a pure number.
    pub const DIMENSIONLESS: Self = Self([0; 7]);

    /// `[L]`
    pub const LENGTH: Self = Self::new(1, 0, 0, 0, 0, 0, 0);
    /// `[M]`
    pub const MASS: Self = Self::new(0, 1, 0, 0, 0, 0, 0);
    /// `[T]`
    pub const TIME: Self = Self::new(0, 0, 1, 0, 0, 0, 0);
    /// `[I]`
    pub const CURRENT: Self = Self::new(0, 0, 0, 1, 0, 0, 0);
    /// `[Θ]`
    pub const TEMPERATURE: Self = Self::new(0, 0, 0, 0, 1, 0, 0);
    /// `[N]`
    pub const AMOUNT: Self = Self::new(0, 0, 0, 0, 0, 1, 0);
    /// `[J]`
    pub const LUMINOUS_INTENSITY: Self = Self::new(0, 0, 0, 0, 0, 0, 1);

    /// `[L²]`
    pub const AREA: Self = Self::new(2, 0, 0, 0, 0, 0, 0);
    /// `[L³]`
    pub const VOLUME: Self = Self::new(3, 0, 0, 0, 0, 0, 0);
    /// `[T⁻¹]`
    pub const FREQUENCY: Self = Self::new(0, 0, -1, 0, 0, 0, 0);
    /// `[L T⁻¹]`
    pub const VELOCITY: Self = Self::new(1, 0, -1, 0, 0, 0, 0);
    /// `[L T⁻²]`
    pub const ACCELERATION: Self = Self::new(1, 0, -2, 0, 0, 0, 0);
    /// `[L M T⁻¹]`
    pub const MOMENTUM: Self = Self::new(1, 1, -1, 0, 0, 0, 0);
    /// `[L M T⁻²]`
    pub const FORCE: Self = Self::new(1, 1, -2, 0, 0, 0, 0);
    /// `[L² M T⁻²]`
    pub const ENERGY: Self = Self::new(2, 1, -2, 0, 0, 0, 0);
    /// `[L² M T⁻³]`
    pub const POWER: Self = Self::new(2, 1, -3, 0, 0, 0, 0);
    /// `[L⁻¹ M T⁻²]`
    pub const PRESSURE: Self = Self::new(-1, 1, -2, 0, 0, 0, 0);
    /// `[L⁻³ M]`
    pub const DENSITY: Self = Self::new(-3, 1, 0, 0, 0, 0, 0);
    /// `[T I]`
    pub const CHARGE: Self = Self::new(0, 0, 1, 1, 0, 0, 0);
    /// `[L² M T⁻³ I⁻¹]`
    pub const VOLTAGE: Self = Self::new(2, 1, -3, -1, 0, 0, 0);
    /// `[L² M T⁻³ I⁻²]`
    pub const RESISTANCE: Self = Self::new(2, 1, -3, -2, 0, 0, 0);
    /// `[L⁻² M⁻¹ T⁴ I²]`
    pub const CAPACITANCE: Self = Self::new(-2, -1, 4, 2, 0, 0, 0);
    /// `[L² M T⁻² I⁻²]`
    pub const INDUCTANCE: Self = Self::new(2, 1, -2, -2, 0, 0, 0);
    /// `[M T⁻² I⁻¹]`
    pub const MAGNETIC_FIELD: Self = Self::new(0, 1, -2, -1, 0, 0, 0);
    /// `[L² M T⁻² I⁻¹]`
    pub const MAGNETIC_FLUX: Self = Self::new(2, 1, -2, -1, 0, 0, 0);

    /// Creates a dimension from its exponents, in `L M T I Θ N J` order.
    #[inline]
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self([
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminous_intensity,
        ])
    }

    /// Creates a dimension from an exponent array in `L M T I Θ N J` order.
    #[inline]
    pub const fn from_exponents(exponents: [i8; 7]) -> Self {
        Self(exponents)
    }

    /// Returns the exponent array in `L M T I Θ N J` order.
    #[inline]
    pub const fn exponents(self) -> [i8; 7] {
        self.0
    }

    /// Returns the exponent of a single base dimension.
    #[inline]
    pub const fn exponent(self, base: BaseDimension) -> i8 {
        self.0[base.index()]
    }

    /// Returns a copy with the exponent of `base` replaced.
    ///
    /// ```rust
    /// use physq_core::{BaseDimension, Dimension};
    ///
    /// let d = Dimension::LENGTH.with(BaseDimension::Time, -1);
    /// assert_eq!(d, Dimension::VELOCITY);
    /// ```
    #[inline]
    pub const fn with(self, base: BaseDimension, exponent: i8) -> Self {
        let mut exponents = self.0;
        exponents[base.index()] = exponent;
        Self(exponents)
    }

    /// `true` when every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::DIMENSIONLESS)
    }

    /// Structural equality usable in `const` contexts.
    pub const fn equals(self, other: Self) -> bool {
        let mut i = 0;
        while i < 7 {
            if self.0[i] != other.0[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Adds exponents, returning `None` if any exponent leaves the `i8` range.
    pub const fn checked_compose(self, other: Self) -> Option<Self> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            match self.0[i].checked_add(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self(out))
    }

    /// Subtracts exponents, returning `None` if any exponent leaves the `i8` range.
    pub const fn checked_decompose(self, other: Self) -> Option<Self> {
        let mut out = [0i8; 7];
        let mut i = 0;
        while i < 7 {
            match self.0[i].checked_sub(other.0[i]) {
                Some(e) => out[i] = e,
                None => return None,
            }
            i += 1;
        }
        Some(Self(out))
    }

    /// Dimension of a product: exponents are added (saturating).
    pub fn compose(self, other: Self) -> Self {
        self.map_exponents("compose", |i, e| e + i64::from(other.0[i]))
    }

    /// Dimension of a quotient: exponents are subtracted (saturating).
    pub fn decompose(self, other: Self) -> Self {
        self.map_exponents("decompose", |i, e| e - i64::from(other.0[i]))
    }

    /// Dimension of an integer power: exponents are multiplied by `n` (saturating).
    ///
    /// `n == 0` yields [`Dimension::DIMENSIONLESS`]; negative `n` yields the inverse dimension.
    pub fn powi(self, n: i32) -> Self {
        self.map_exponents("power", |_, e| e * i64::from(n))
    }

    /// Dimension of a square root: exponents are halved.
    ///
    /// # Errors
    ///
    /// [`Error::OddExponent`] when any exponent is odd.
    ///
    /// ```rust
    /// use physq_core::{Dimension, Error};
    ///
    /// assert_eq!(Dimension::AREA.half(), Ok(Dimension::LENGTH));
    /// assert!(matches!(Dimension::LENGTH.half(), Err(Error::OddExponent { .. })));
    /// ```
    pub fn half(self) -> Result<Self> {
        if self.0.iter().any(|e| e % 2 != 0) {
            return Err(Error::odd_exponent(self));
        }
        Ok(Self(self.0.map(|e| e / 2)))
    }

    fn map_exponents(self, op: &'static str, f: impl Fn(usize, i64) -> i64) -> Self {
        let mut out = [0i8; 7];
        let mut saturated = false;
        for (i, slot) in out.iter_mut().enumerate() {
            let wide = f(i, i64::from(self.0[i]));
            let clamped = wide.clamp(i64::from(i8::MIN), i64::from(i8::MAX));
            saturated |= clamped != wide;
            *slot = clamped as i8;
        }
        let result = Self(out);
        if saturated {
            log::warn!("exponent overflow in dimension {op} of {self}; saturated to {result}");
        }
        result
    }
}

impl Mul for Dimension {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.compose(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.decompose(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_dimensionless() {
            return f.write_str("[1]");
        }
        f.write_str("[")?;
        let mut first = true;
        for base in BaseDimension::ALL {
            let exponent = self.exponent(base);
            if exponent == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}^{}", base.symbol(), exponent)?;
            first = false;
        }
        f.write_str("]")
    }
}
