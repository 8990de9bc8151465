//! Statically typed quantities.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::math;
use crate::tolerance::Tolerance;
use crate::unit::{Kind, KindDiv, KindMul, Unit};
use crate::value::Value;
use core::marker::PhantomData;
use core::ops::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A quantity of a specific kind.
///
/// `Quantity<K>` wraps an `f64` magnitude in SI base units together with phantom type information about its kind
/// `K`. The dimension is known at compile time (`K::DIM`), so same-kind addition is an ordinary operator and
/// cross-kind products are resolved through the [`KindMul`] / [`KindDiv`] relations.
///
/// # Examples
///
/// ```rust
/// use physq_core::length::{Kilometer, Length};
/// use physq_core::time::{Hour, Time};
/// use physq_core::mechanics::{KilometerPerHour, Velocity};
/// use physq_core::{Quantity, Unit};
///
/// let distance: Quantity<Length> = Kilometer::of(180.0);
/// let duration: Quantity<Time> = Hour::of(2.0);
/// let speed: Quantity<Velocity> = distance / duration;
/// assert_eq!(speed.value(), 25.0);
/// assert!((speed.in_unit::<KilometerPerHour>() - 90.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Quantity<K: Kind>(f64, PhantomData<K>);

impl<K: Kind> Quantity<K> {
    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use physq_core::length::Length;
    /// use physq_core::Quantity;
    /// assert!(Quantity::<Length>::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(f64::NAN);

    /// The zero quantity.
    pub const ZERO: Self = Self::new(0.0);

    /// Creates a quantity from a magnitude in SI base units.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value, PhantomData)
    }

    /// Returns the magnitude in SI base units.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns the dimension of this kind.
    #[inline]
    pub const fn dim(self) -> Dimension {
        K::DIM
    }

    /// Returns the magnitude expressed in unit `U`.
    ///
    /// ```rust
    /// use physq_core::temperature::{Celsius, Fahrenheit, Kelvin};
    /// use physq_core::Unit;
    ///
    /// let boiling = Celsius::of(100.0);
    /// assert_eq!(boiling.in_unit::<Kelvin>(), 373.15);
    /// assert!((boiling.in_unit::<Fahrenheit>() - 212.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn in_unit<U: Unit<Kind = K>>(self) -> f64 {
        (self.0 - U::OFFSET) / U::RATIO
    }

    /// Returns the absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(math::abs(self.0))
    }

    /// Returns the minimum of this quantity and another.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(self.0.min(other.0))
    }

    /// Returns the maximum of this quantity and another.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(self.0.max(other.0))
    }

    /// Equality within [`Tolerance::DEFAULT`].
    #[inline]
    pub fn approx_eq(self, other: Self) -> bool {
        Tolerance::DEFAULT.approx_eq(self.0, other.0)
    }

    /// Equality within the given tolerance.
    #[inline]
    pub fn approx_eq_with(self, other: Self, tolerance: Tolerance) -> bool {
        tolerance.approx_eq(self.0, other.0)
    }

    /// Erases the kind, keeping magnitude and dimension.
    #[inline]
    pub const fn to_value(self) -> Value {
        Value::new(self.0, K::DIM)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> Add for Quantity<K> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl<K: Kind> AddAssign for Quantity<K> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<K: Kind> Sub for Quantity<K> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl<K: Kind> SubAssign for Quantity<K> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<K: Kind> Neg for Quantity<K> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

impl<K: Kind> Mul<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.0 * rhs)
    }
}

impl<K: Kind> Mul<Quantity<K>> for f64 {
    type Output = Quantity<K>;
    #[inline]
    fn mul(self, rhs: Quantity<K>) -> Self::Output {
        rhs * self
    }
}

impl<K: Kind> Div<f64> for Quantity<K> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.0 / rhs)
    }
}

impl<A: KindMul<B>, B: Kind> Mul<Quantity<B>> for Quantity<A> {
    type Output = Quantity<A::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<B>) -> Self::Output {
        Quantity::new(self.0 * rhs.0)
    }
}

impl<A: KindDiv<B>, B: Kind> Div<Quantity<B>> for Quantity<A> {
    type Output = Quantity<A::Output>;
    #[inline]
    fn div(self, rhs: Quantity<B>) -> Self::Output {
        Quantity::new(self.0 / rhs.0)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions to and from dynamically dimensioned values
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Kind> From<Quantity<K>> for Value {
    #[inline]
    fn from(quantity: Quantity<K>) -> Self {
        quantity.to_value()
    }
}

impl<K: Kind> TryFrom<Value> for Quantity<K> {
    type Error = Error;

    /// Fails with [`Error::DimensionMismatch`] when the value's dimension is not `K::DIM`.
    fn try_from(value: Value) -> Result<Self> {
        if value.dim() != K::DIM {
            return Err(Error::mismatch("convert", K::DIM, value.dim()));
        }
        Ok(Self::new(value.magnitude()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<K: Kind> Serialize for Quantity<K> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, K: Kind> Deserialize<'de> for Quantity<K> {
    fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Ok(Quantity::new(value))
    }
}

/// Serde helper module for serializing quantities together with their dimension.
///
/// By default a `Quantity<K>` serializes as its bare SI magnitude. With `#[serde(with = "...")]` it serializes as
/// `{"value": 9.81, "dim": [1, 0, -2, 0, 0, 0, 0]}` instead, and deserialization rejects a stored dimension that
/// differs from `K::DIM`. The `dim` field is optional on input.
///
/// # Examples
///
/// ```rust
/// use physq_core::mechanics::Acceleration;
/// use physq_core::Quantity;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Probe {
///     #[serde(with = "physq_core::serde_with_dimension")]
///     gravity: Quantity<Acceleration>,
/// }
///
/// let json = serde_json::to_string(&Probe { gravity: Quantity::new(9.81) }).unwrap();
/// assert_eq!(json, r#"{"gravity":{"value":9.81,"dim":[1,0,-2,0,0,0,0]}}"#);
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_dimension {
    use super::*;
    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeStruct;

    /// Serializes a `Quantity<K>` as a struct with `value` and `dim` fields.
    pub fn serialize<K, S>(quantity: &Quantity<K>, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        K: Kind,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value())?;
        state.serialize_field("dim", &K::DIM)?;
        state.end()
    }

    /// Deserializes a `Quantity<K>` from a struct with `value` and optionally `dim` fields.
    pub fn deserialize<'de, K, D>(deserializer: D) -> core::result::Result<Quantity<K>, D::Error>
    where
        K: Kind,
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Dim,
        }

        struct QuantityVisitor<K>(PhantomData<K>);

        impl<'de, K: Kind> Visitor<'de> for QuantityVisitor<K> {
            type Value = Quantity<K>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("struct Quantity with value and dim fields")
            }

            fn visit_map<V>(self, mut map: V) -> core::result::Result<Quantity<K>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<f64> = None;
                let mut dim: Option<Dimension> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Dim => {
                            if dim.is_some() {
                                return Err(de::Error::duplicate_field("dim"));
                            }
                            dim = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;
                let value = Value::new(value, dim.unwrap_or(K::DIM));
                Quantity::try_from(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_struct("Quantity", &["value", "dim"], QuantityVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::length::{Kilometer, Length, Meter};
    use crate::mass::{Kilogram, Mass};
    use crate::mechanics::{Acceleration, Energy, Force, Velocity};
    use crate::time::{Minute, Second, Time};
    use crate::unitless::Dimensionless;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────────────
    // Basic construction and units
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_and_value() {
        let q = Quantity::<Length>::new(42.0);
        assert_eq!(q.value(), 42.0);
        assert_eq!(q.dim(), Dimension::LENGTH);
    }

    #[test]
    fn nan_and_zero_constants() {
        assert!(Quantity::<Mass>::NAN.value().is_nan());
        assert_eq!(Quantity::<Mass>::ZERO.value(), 0.0);
    }

    #[test]
    fn unit_round_trip() {
        let d = Kilometer::of(1.5);
        assert_eq!(d.value(), 1500.0);
        assert_eq!(d.in_unit::<Meter>(), 1500.0);
        assert_eq!(d.in_unit::<Kilometer>(), 1.5);
        assert_eq!(Minute::of(2.0).in_unit::<Second>(), 120.0);
    }

    #[test]
    fn abs_min_max() {
        let a = Quantity::<Length>::new(-3.0);
        let b = Quantity::<Length>::new(5.0);
        assert_eq!(a.abs().value(), 3.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert!(a < b);
    }

    #[test]
    fn approximate_equality() {
        let a = Quantity::<Length>::new(0.1 + 0.2);
        let b = Quantity::<Length>::new(0.3);
        assert_ne!(a, b);
        assert!(a.approx_eq(b));
        assert!(!a.approx_eq_with(Quantity::new(0.31), Tolerance::new(1e-3, 0.0)));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Same-kind arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_sub_and_assign() {
        let mut q = Meter::of(5.0) + Meter::of(3.0);
        assert_eq!(q.value(), 8.0);
        q -= Meter::of(2.0);
        assert_eq!(q.value(), 6.0);
        q += Meter::of(1.0);
        assert_eq!((q - Meter::of(7.0)).value(), 0.0);
        assert_eq!((-q).value(), -7.0);
    }

    #[test]
    fn scalar_multiplication_and_division() {
        let q = Quantity::<Force>::new(4.0);
        assert_eq!((q * 2.5).value(), 10.0);
        assert_eq!((2.5 * q).value(), 10.0);
        assert_eq!((q / 4.0).value(), 1.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Cross-kind arithmetic
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn length_over_time_is_velocity() {
        let v: Quantity<Velocity> = Meter::of(10.0) / Second::of(2.0);
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.dim(), Dimension::VELOCITY);
    }

    #[test]
    fn newtons_second_law() {
        let f: Quantity<Force> = Kilogram::of(2.0) * Quantity::<Acceleration>::new(9.0);
        assert_eq!(f.value(), 18.0);
        let f2: Quantity<Force> = Quantity::<Acceleration>::new(9.0) * Kilogram::of(2.0);
        assert_eq!(f, f2);
    }

    #[test]
    fn work_is_force_times_distance() {
        let w: Quantity<Energy> = Quantity::<Force>::new(10.0) * Meter::of(3.0);
        assert_eq!(w.value(), 30.0);
        assert_eq!(w.to_string(), "30 J");
    }

    #[test]
    fn same_kind_ratio_is_dimensionless() {
        let r: Quantity<Dimensionless> = Kilometer::of(1.0) / Meter::of(250.0);
        assert_eq!(r.value(), 4.0);
        assert!(r.dim().is_dimensionless());
        assert_eq!(r.to_string(), "4");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Value interop
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn into_value_keeps_dimension() {
        let v: Value = Quantity::<Time>::new(3.0).into();
        assert_eq!(v, Value::new(3.0, Dimension::TIME));
    }

    #[test]
    fn try_from_value_checks_dimension() {
        let ok = Quantity::<Length>::try_from(Value::new(2.0, Dimension::LENGTH));
        assert_eq!(ok, Ok(Meter::of(2.0)));

        let err = Quantity::<Length>::try_from(Value::new(2.0, Dimension::TIME)).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                op: "convert",
                lhs: Dimension::LENGTH,
                rhs: Dimension::TIME,
            }
        );
    }

    #[test]
    fn typed_and_dynamic_products_agree() {
        let m = Kilogram::of(3.0);
        let a = Quantity::<Acceleration>::new(2.0);
        let typed: Value = (m * a).into();
        let dynamic = Value::from(m) * Value::from(a);
        assert_eq!(typed, dynamic);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_uses_si_symbol_and_precision() {
        let v = Quantity::<Velocity>::new(12.3456);
        assert_eq!(format!("{}", v), "12.3456 m/s");
        assert_eq!(format!("{:.2}", v), "12.35 m/s");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serializes_as_bare_magnitude() {
            let json = serde_json::to_string(&Kilometer::of(1.0)).unwrap();
            assert_eq!(json, "1000.0");
            let back: Quantity<Length> = serde_json::from_str(&json).unwrap();
            assert_eq!(back.value(), 1000.0);
        }

        #[derive(Debug, Serialize, Deserialize)]
        struct Sample {
            #[serde(with = "crate::serde_with_dimension")]
            speed: Quantity<Velocity>,
        }

        #[test]
        fn with_dimension_round_trip() {
            let s = Sample {
                speed: Quantity::new(3.5),
            };
            let json = serde_json::to_string(&s).unwrap();
            assert_eq!(json, r#"{"speed":{"value":3.5,"dim":[1,0,-1,0,0,0,0]}}"#);
            let back: Sample = serde_json::from_str(&json).unwrap();
            assert_eq!(back.speed.value(), 3.5);
        }

        #[test]
        fn with_dimension_accepts_missing_dim() {
            let back: Sample = serde_json::from_str(r#"{"speed":{"value":2.0}}"#).unwrap();
            assert_eq!(back.speed.value(), 2.0);
        }

        #[test]
        fn with_dimension_rejects_wrong_dim() {
            let err =
                serde_json::from_str::<Sample>(r#"{"speed":{"value":2.0,"dim":[1,0,0,0,0,0,0]}}"#)
                    .unwrap_err();
            assert!(err.to_string().contains("cannot convert"));
        }

        #[test]
        fn with_dimension_rejects_duplicates_and_missing_value() {
            assert!(serde_json::from_str::<Sample>(r#"{"speed":{"dim":[1,0,-1,0,0,0,0]}}"#).is_err());
            assert!(serde_json::from_str::<Sample>(r#"{"speed":{"value":1.0,"value":2.0}}"#).is_err());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────────

    proptest! {
        #[test]
        fn unit_conversion_round_trips(x in -1e9..1e9f64) {
            let q = Kilometer::of(x);
            assert_relative_eq!(q.in_unit::<Kilometer>(), x, max_relative = 1e-12, epsilon = 1e-12);
        }

        #[test]
        fn addition_commutes(a in -1e9..1e9f64, b in -1e9..1e9f64) {
            let qa = Quantity::<Mass>::new(a);
            let qb = Quantity::<Mass>::new(b);
            prop_assert_eq!(qa + qb, qb + qa);
        }

        #[test]
        fn velocity_times_time_recovers_length(d in 1e-3..1e6f64, t in 1e-3..1e6f64) {
            let dist = Meter::of(d);
            let v = dist / Second::of(t);
            let back: Quantity<Length> = v * Second::of(t);
            prop_assert!(back.approx_eq_with(dist, Tolerance::new(1e-12, 1e-12)));
        }
    }
}
