//! Three-component vectors of dimensioned values.
//!
//! A [`Vector3`] holds three [`Value`]s that share one [`Dimension`]. The invariant is checked once, at
//! construction; every operation afterwards preserves it, so the vector's dimension is simply the dimension of its
//! components.

use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::math;
use crate::unit::Kind;
use crate::value::Value;
use crate::Quantity;
use core::fmt;
use core::ops::{Mul, Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 3D vector whose components share one dimension.
///
/// ```rust
/// use physq_core::{Dimension, Vector3};
///
/// let r = Vector3::from_array([0.0, 2.0, 0.0], Dimension::LENGTH);
/// let f = Vector3::from_array([3.0, 0.0, 0.0], Dimension::FORCE);
///
/// let torque = r.cross(f);
/// assert_eq!(torque.dim(), Dimension::ENERGY);
/// assert_eq!(torque.to_array(), [0.0, 0.0, -6.0]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "[Value; 3]", into = "[Value; 3]")
)]
pub struct Vector3 {
    x: Value,
    y: Value,
    z: Value,
}

impl Vector3 {
    /// Builds a vector from three values.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] unless all three components share one dimension.
    pub fn new(x: Value, y: Value, z: Value) -> Result<Self> {
        for other in [y, z] {
            if other.dim() != x.dim() {
                return Err(Error::mismatch("build vector from", x.dim(), other.dim()));
            }
        }
        Ok(Self { x, y, z })
    }

    /// Builds a vector from SI magnitudes and one dimension.
    #[inline]
    pub const fn from_array(components: [f64; 3], dim: Dimension) -> Self {
        Self {
            x: Value::new(components[0], dim),
            y: Value::new(components[1], dim),
            z: Value::new(components[2], dim),
        }
    }

    /// Builds a vector from three quantities of the same kind; cannot fail.
    pub fn from_quantities<K: Kind>(x: Quantity<K>, y: Quantity<K>, z: Quantity<K>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    /// The zero vector of the given dimension.
    #[inline]
    pub const fn zero(dim: Dimension) -> Self {
        Self::from_array([0.0, 0.0, 0.0], dim)
    }

    /// `(1, 0, 0)` in the given dimension.
    #[inline]
    pub const fn unit_x(dim: Dimension) -> Self {
        Self::from_array([1.0, 0.0, 0.0], dim)
    }

    /// `(0, 1, 0)` in the given dimension.
    #[inline]
    pub const fn unit_y(dim: Dimension) -> Self {
        Self::from_array([0.0, 1.0, 0.0], dim)
    }

    /// `(0, 0, 1)` in the given dimension.
    #[inline]
    pub const fn unit_z(dim: Dimension) -> Self {
        Self::from_array([0.0, 0.0, 1.0], dim)
    }

    /// X component.
    #[inline]
    pub const fn x(&self) -> Value {
        self.x
    }

    /// Y component.
    #[inline]
    pub const fn y(&self) -> Value {
        self.y
    }

    /// Z component.
    #[inline]
    pub const fn z(&self) -> Value {
        self.z
    }

    /// Shared dimension of the components.
    #[inline]
    pub const fn dim(&self) -> Dimension {
        self.x.dim()
    }

    /// Components as values.
    #[inline]
    pub const fn components(&self) -> [Value; 3] {
        [self.x, self.y, self.z]
    }

    /// Component magnitudes in SI base units.
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.x.magnitude(), self.y.magnitude(), self.z.magnitude()]
    }

    /// Componentwise sum.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when the vectors have different dimensions.
    pub fn try_add(self, rhs: Self) -> Result<Self> {
        Ok(Self {
            x: self.x.try_add(rhs.x)?,
            y: self.y.try_add(rhs.y)?,
            z: self.z.try_add(rhs.z)?,
        })
    }

    /// Componentwise difference.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] when the vectors have different dimensions.
    pub fn try_sub(self, rhs: Self) -> Result<Self> {
        Ok(Self {
            x: self.x.try_sub(rhs.x)?,
            y: self.y.try_sub(rhs.y)?,
            z: self.z.try_sub(rhs.z)?,
        })
    }

    /// Multiplies every component by a dimensionless scalar.
    #[inline]
    pub fn scale(self, scalar: f64) -> Self {
        Self {
            x: self.x.scale(scalar),
            y: self.y.scale(scalar),
            z: self.z.scale(scalar),
        }
    }

    /// Dot product; its dimension is the composition of both operand dimensions.
    pub fn dot(self, rhs: Self) -> Value {
        let [x, y, z] = [self.x * rhs.x, self.y * rhs.y, self.z * rhs.z];
        let dim = x.dim();
        debug_assert!(y.dim() == dim && z.dim() == dim);
        Value::new(x.magnitude() + y.magnitude() + z.magnitude(), dim)
    }

    /// Cross product; its dimension is the composition of both operand dimensions.
    pub fn cross(self, rhs: Self) -> Self {
        Self {
            x: difference(self.y * rhs.z, self.z * rhs.y),
            y: difference(self.z * rhs.x, self.x * rhs.z),
            z: difference(self.x * rhs.y, self.y * rhs.x),
        }
    }

    /// Squared length, `v · v`.
    #[inline]
    pub fn magnitude_squared(self) -> Value {
        self.dot(self)
    }

    /// Length of the vector, in the vector's own dimension.
    ///
    /// # Errors
    ///
    /// Propagates [`Error::OddExponent`] from the square root. The squared dimension always has even exponents
    /// unless an exponent saturated while squaring.
    pub fn magnitude(self) -> Result<Value> {
        self.magnitude_squared().sqrt()
    }

    /// Dimensionless vector of unit length pointing the same way.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroVector`] when the length is exactly zero.
    ///
    /// ```rust
    /// use physq_core::{Dimension, Vector3};
    ///
    /// let v = Vector3::from_array([3.0, 0.0, 4.0], Dimension::VELOCITY);
    /// let n = v.normalize().unwrap();
    /// assert!(n.dim().is_dimensionless());
    /// assert_eq!(n.to_array(), [0.6, 0.0, 0.8]);
    ///
    /// assert!(Vector3::zero(Dimension::VELOCITY).normalize().is_err());
    /// ```
    pub fn normalize(self) -> Result<Self> {
        let length = self.magnitude()?;
        if length.magnitude() == 0.0 {
            return Err(Error::zero_vector("normalize"));
        }
        Ok(Self {
            x: self.x / length,
            y: self.y / length,
            z: self.z / length,
        })
    }

    /// Projection of `self` onto the direction of `onto`, in the dimension of `self`.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroVector`] when `onto` has zero length.
    pub fn project_onto(self, onto: Self) -> Result<Self> {
        let length_squared = onto.magnitude_squared();
        if length_squared.magnitude() == 0.0 {
            return Err(Error::zero_vector("project onto"));
        }
        let factor = self.dot(onto) / length_squared;
        Ok(Self {
            x: factor * onto.x,
            y: factor * onto.y,
            z: factor * onto.z,
        })
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The operands may have different dimensions.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`Vector3::magnitude`]; [`Error::ZeroVector`] when either vector has zero length.
    pub fn angle_between(self, other: Self) -> Result<f64> {
        let lengths = self.magnitude()?.magnitude() * other.magnitude()?.magnitude();
        if lengths == 0.0 {
            return Err(Error::zero_vector("take the angle of"));
        }
        let cosine = (self.dot(other).magnitude() / lengths).clamp(-1.0, 1.0);
        Ok(math::acos(cosine))
    }

    /// `true` when every component magnitude is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.to_array().iter().all(|c| *c == 0.0)
    }

    /// `true` when the squared length of `self × other` is below `tolerance`.
    pub fn is_parallel(self, other: Self, tolerance: f64) -> bool {
        math::abs(self.cross(other).magnitude_squared().magnitude()) < tolerance
    }

    /// `true` when `|self · other|` is below `tolerance`.
    pub fn is_perpendicular(self, other: Self, tolerance: f64) -> bool {
        math::abs(self.dot(other).magnitude()) < tolerance
    }
}

/// `a - b` for two values already known to share a dimension.
#[inline]
fn difference(a: Value, b: Value) -> Value {
    debug_assert!(a.dim() == b.dim());
    Value::new(a.magnitude() - b.magnitude(), a.dim())
}

impl Neg for Vector3 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs.scale(self)
    }
}

impl TryFrom<[Value; 3]> for Vector3 {
    type Error = Error;

    fn try_from([x, y, z]: [Value; 3]) -> Result<Self> {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [Value; 3] {
    fn from(v: Vector3) -> Self {
        v.components()
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.x, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.y, f)?;
        f.write_str(", ")?;
        fmt::Display::fmt(&self.z, f)?;
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use core::f64::consts::{FRAC_PI_2, PI};
    use proptest::prelude::*;

    fn meters(v: [f64; 3]) -> Vector3 {
        Vector3::from_array(v, Dimension::LENGTH)
    }

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_eq!(a.dim(), b.dim());
        for (l, r) in a.to_array().iter().zip(b.to_array().iter()) {
            assert_abs_diff_eq!(*l, *r, epsilon = 1e-9);
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_accepts_matching_dimensions() {
        let v = Vector3::new(
            Value::new(1.0, Dimension::LENGTH),
            Value::new(2.0, Dimension::LENGTH),
            Value::new(3.0, Dimension::LENGTH),
        )
        .unwrap();
        assert_eq!(v.dim(), Dimension::LENGTH);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn new_rejects_mixed_dimensions() {
        let err = Vector3::new(
            Value::new(1.0, Dimension::LENGTH),
            Value::new(2.0, Dimension::LENGTH),
            Value::new(3.0, Dimension::MASS),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::DimensionMismatch {
                lhs: Dimension::LENGTH,
                rhs: Dimension::MASS,
                ..
            }
        ));
    }

    #[test]
    fn basis_vectors_point_along_their_axes() {
        assert_eq!(Vector3::unit_x(Dimension::LENGTH).to_array(), [1.0, 0.0, 0.0]);
        assert_eq!(Vector3::unit_y(Dimension::LENGTH).to_array(), [0.0, 1.0, 0.0]);
        assert_eq!(Vector3::unit_z(Dimension::LENGTH).to_array(), [0.0, 0.0, 1.0]);
        assert!(Vector3::zero(Dimension::FORCE).is_zero());
        assert!(!Vector3::unit_x(Dimension::FORCE).is_zero());
    }

    #[test]
    fn components_and_array_conversion() {
        let v = meters([1.0, 2.0, 3.0]);
        let [x, y, z] = v.components();
        assert_eq!(x, v.x());
        assert_eq!(y, v.y());
        assert_eq!(z, v.z());
        let back: [Value; 3] = v.into();
        assert_eq!(Vector3::try_from(back), Ok(v));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Linear operations
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub_componentwise() {
        let a = meters([1.0, 2.0, 3.0]);
        let b = meters([4.0, 5.0, 6.0]);
        assert_eq!(a.try_add(b).unwrap().to_array(), [5.0, 7.0, 9.0]);
        assert_eq!(b.try_sub(a).unwrap().to_array(), [3.0, 3.0, 3.0]);
    }

    #[test]
    fn add_rejects_different_dimensions() {
        let a = meters([1.0, 2.0, 3.0]);
        let b = Vector3::from_array([1.0, 2.0, 3.0], Dimension::TIME);
        assert!(matches!(a.try_add(b), Err(Error::DimensionMismatch { op: "add", .. })));
        assert!(matches!(a.try_sub(b), Err(Error::DimensionMismatch { op: "subtract", .. })));
    }

    #[test]
    fn scale_and_negate() {
        let v = meters([1.0, -2.0, 3.0]);
        assert_eq!(v.scale(2.0).to_array(), [2.0, -4.0, 6.0]);
        assert_eq!((v * 2.0), 2.0 * v);
        assert_eq!((-v).to_array(), [-1.0, 2.0, -3.0]);
        assert_eq!((-v).dim(), Dimension::LENGTH);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Products
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn dot_of_orthogonal_axes_is_zero() {
        let i = Vector3::unit_x(Dimension::LENGTH);
        let j = Vector3::unit_y(Dimension::LENGTH);
        let d = i.dot(j);
        assert_eq!(d.magnitude(), 0.0);
        assert_eq!(d.dim(), Dimension::AREA);
    }

    #[test]
    fn orthonormal_basis_cross_products() {
        let i = Vector3::unit_x(Dimension::LENGTH);
        let j = Vector3::unit_y(Dimension::LENGTH);
        let k = Vector3::unit_z(Dimension::LENGTH);

        assert_eq!(i.cross(j).to_array(), k.to_array());
        assert_eq!(j.cross(k).to_array(), i.to_array());
        assert_eq!(k.cross(i).to_array(), j.to_array());
        assert_eq!(i.cross(j).dim(), Dimension::AREA);
    }

    #[test]
    fn torque_is_r_cross_f() {
        let r = meters([0.0, 2.0, 0.0]);
        let f = Vector3::from_array([3.0, 0.0, 0.0], Dimension::FORCE);
        let torque = r.cross(f);
        assert_eq!(torque.dim(), Dimension::ENERGY);
        assert_eq!(torque.to_array(), [0.0, 0.0, -6.0]);
    }

    #[test]
    fn work_is_f_dot_d() {
        let f = Vector3::from_array([10.0, 0.0, 0.0], Dimension::FORCE);
        let d = meters([5.0, 3.0, 0.0]);
        let work = f.dot(d);
        assert_eq!(work, Value::new(50.0, Dimension::ENERGY));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Magnitude, normalization and projection
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn magnitude_keeps_dimension() {
        let v = meters([3.0, 4.0, 12.0]);
        assert_eq!(v.magnitude_squared(), Value::new(169.0, Dimension::AREA));
        assert_eq!(v.magnitude(), Ok(Value::new(13.0, Dimension::LENGTH)));
        assert_eq!(
            Vector3::zero(Dimension::LENGTH).magnitude(),
            Ok(Value::new(0.0, Dimension::LENGTH))
        );
    }

    #[test]
    fn magnitude_reports_saturated_odd_exponent() {
        let v = Vector3::from_array([1.0, 0.0, 0.0], Dimension::new(100, 0, 0, 0, 0, 0, 0));
        assert_eq!(v.magnitude_squared().dim(), Dimension::new(127, 0, 0, 0, 0, 0, 0));
        assert_eq!(
            v.magnitude(),
            Err(Error::OddExponent {
                dim: Dimension::new(127, 0, 0, 0, 0, 0, 0)
            })
        );
    }

    #[test]
    fn normalize_is_dimensionless_unit_length() {
        let n = meters([1.0, 2.0, 2.0]).normalize().unwrap();
        assert!(n.dim().is_dimensionless());
        assert_relative_eq!(n.magnitude().unwrap().magnitude(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n.x().magnitude(), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_zero_vector_fails() {
        assert_eq!(
            Vector3::zero(Dimension::LENGTH).normalize(),
            Err(Error::ZeroVector { op: "normalize" })
        );
    }

    #[test]
    fn project_onto_axis() {
        let v = Vector3::from_array([3.0, 4.0, 5.0], Dimension::VELOCITY);
        let axis = meters([2.0, 0.0, 0.0]);
        let p = v.project_onto(axis).unwrap();
        assert_eq!(p.dim(), Dimension::VELOCITY);
        assert_vec_eq(p, Vector3::from_array([3.0, 0.0, 0.0], Dimension::VELOCITY));
    }

    #[test]
    fn project_onto_zero_vector_fails() {
        let v = meters([1.0, 1.0, 1.0]);
        assert_eq!(
            v.project_onto(Vector3::zero(Dimension::LENGTH)),
            Err(Error::ZeroVector { op: "project onto" })
        );
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Angles and orientation predicates
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn angle_between_axes_is_right_angle() {
        let i = Vector3::unit_x(Dimension::LENGTH);
        let j = Vector3::unit_y(Dimension::LENGTH);
        assert_abs_diff_eq!(i.angle_between(j).unwrap(), FRAC_PI_2, epsilon = 1e-12);
    }

    #[test]
    fn angle_between_opposite_and_same_direction() {
        let v = meters([3.0, 4.0, 0.0]);
        assert_abs_diff_eq!(v.angle_between(-v).unwrap(), PI, epsilon = 1e-12);
        assert_abs_diff_eq!(v.angle_between(v.scale(3.0)).unwrap(), 0.0, epsilon = 1e-12);

        let w = meters([1.0, 1.0, 0.0]);
        assert_abs_diff_eq!(w.angle_between(-w).unwrap(), PI, epsilon = 1e-7);
    }

    #[test]
    fn angle_between_mixed_dimensions() {
        let r = meters([1.0, 0.0, 0.0]);
        let f = Vector3::from_array([1.0, 1.0, 0.0], Dimension::FORCE);
        assert_abs_diff_eq!(r.angle_between(f).unwrap(), PI / 4.0, epsilon = 1e-12);
    }

    #[test]
    fn angle_with_zero_vector_fails() {
        let v = meters([1.0, 0.0, 0.0]);
        assert!(matches!(
            v.angle_between(Vector3::zero(Dimension::LENGTH)),
            Err(Error::ZeroVector { .. })
        ));
    }

    #[test]
    fn parallel_and_perpendicular() {
        let a = meters([1.0, 2.0, 3.0]);
        let b = meters([2.0, 4.0, 6.0]);
        let c = meters([3.0, 0.0, -1.0]);
        assert!(a.is_parallel(b, 1e-10));
        assert!(!a.is_parallel(c, 1e-10));
        assert!(a.is_perpendicular(c, 1e-10));
        assert!(!a.is_perpendicular(b, 1e-10));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Formatting
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_lists_components() {
        let v = meters([1.0, 2.5, -3.0]);
        assert_eq!(v.to_string(), "(1 [L^1], 2.5 [L^1], -3 [L^1])");
        assert_eq!(format!("{:.1}", v), "(1.0 [L^1], 2.5 [L^1], -3.0 [L^1])");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_array_of_values() {
            let v = meters([1.0, 2.0, 3.0]);
            let json = serde_json::to_value(v).unwrap();
            assert!(json.is_array());
            assert_eq!(json.as_array().unwrap().len(), 3);
            let back: Vector3 = serde_json::from_value(json).unwrap();
            assert_eq!(back, v);
        }

        #[test]
        fn deserialization_rejects_mixed_dimensions() {
            let json = r#"[
                {"magnitude": 1.0, "dim": [1, 0, 0, 0, 0, 0, 0]},
                {"magnitude": 2.0, "dim": [1, 0, 0, 0, 0, 0, 0]},
                {"magnitude": 3.0, "dim": [0, 1, 0, 0, 0, 0, 0]}
            ]"#;
            let err = serde_json::from_str::<Vector3>(json).unwrap_err();
            assert!(err.to_string().contains("cannot build vector from"));
        }
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Algebraic laws
    // ─────────────────────────────────────────────────────────────────────────────

    fn component() -> impl Strategy<Value = f64> {
        -1e3..1e3f64
    }

    fn vector(dim: Dimension) -> impl Strategy<Value = Vector3> {
        [component(), component(), component()].prop_map(move |c| Vector3::from_array(c, dim))
    }

    proptest! {
        #[test]
        fn cross_is_anticommutative(u in vector(Dimension::LENGTH), v in vector(Dimension::FORCE)) {
            assert_vec_eq(u.cross(v), -v.cross(u));
        }

        #[test]
        fn dot_is_bilinear_in_scale(
            u in vector(Dimension::LENGTH),
            v in vector(Dimension::LENGTH),
            k in -1e3..1e3f64,
        ) {
            let lhs = u.scale(k).dot(v);
            let rhs = u.dot(v).scale(k);
            prop_assert_eq!(lhs.dim(), rhs.dim());
            let scale = 1.0 + k.abs() * u.magnitude().unwrap().magnitude() * v.magnitude().unwrap().magnitude();
            prop_assert!((lhs.magnitude() - rhs.magnitude()).abs() <= 1e-9 * scale);
        }

        #[test]
        fn cross_is_perpendicular_to_operands(u in vector(Dimension::LENGTH), v in vector(Dimension::LENGTH)) {
            let w = u.cross(v);
            let scale = 1.0 + u.magnitude_squared().magnitude() * v.magnitude_squared().magnitude();
            prop_assert!(w.dot(u).magnitude().abs() <= 1e-9 * scale);
            prop_assert!(w.dot(v).magnitude().abs() <= 1e-9 * scale);
        }
    }
}
