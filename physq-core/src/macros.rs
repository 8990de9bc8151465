//! Macros for declaring relations between kinds.

/// Declares product and quotient relations between kinds.
///
/// Each row generates a [`KindMul`](crate::KindMul) or [`KindDiv`](crate::KindDiv) impl, which in turn enables
/// `*` or `/` between the corresponding [`Quantity`](crate::Quantity) types. Every row is checked at compile time
/// against the generic dimension algebra, so a row whose output kind has the wrong dimension fails to build.
///
/// - `A * B = C;` declares both `A * B` and `B * A` (`A` and `B` must differ).
/// - `A ^ 2 = C;` declares `A * A`.
/// - `A / B = C;` declares `A / B`. Same-kind division always yields `Dimensionless` and must not be listed.
///
/// Downstream crates can use it for their own kinds, as long as every row names at least one local kind:
///
/// ```rust
/// use physq_core::length::Length;
/// use physq_core::time::{Frequency, Time};
/// use physq_core::{relations, Dimension, Kind, Quantity};
///
/// #[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
/// pub struct Absement;
/// impl Kind for Absement {
///     const DIM: Dimension = Dimension::new(1, 0, 1, 0, 0, 0, 0);
///     const SYMBOL: &'static str = "m s";
/// }
///
/// relations! {
///     Absement / Time = Length;
///     Absement * Frequency = Length;
/// }
///
/// let a = Quantity::<Absement>::new(6.0);
/// let d: Quantity<Length> = a / Quantity::<Time>::new(3.0);
/// assert_eq!(d.value(), 2.0);
/// let d2: Quantity<Length> = Quantity::<Frequency>::new(0.5) * a;
/// assert_eq!(d2.value(), 3.0);
/// ```
#[macro_export]
macro_rules! relations {
    () => {};

    ($a:ident ^ 2 = $out:ident; $($rest:tt)*) => {
        impl $crate::KindMul<$a> for $a {
            type Output = $out;
        }
        $crate::relations!(@check checked_compose, $a, $a, $out, $a ^ 2 = $out);
        $crate::relations!($($rest)*);
    };

    ($a:ident * $b:ident = $out:ident; $($rest:tt)*) => {
        impl $crate::KindMul<$b> for $a {
            type Output = $out;
        }
        impl $crate::KindMul<$a> for $b {
            type Output = $out;
        }
        $crate::relations!(@check checked_compose, $a, $b, $out, $a * $b = $out);
        $crate::relations!($($rest)*);
    };

    ($a:ident / $b:ident = $out:ident; $($rest:tt)*) => {
        impl $crate::KindDiv<$b> for $a {
            type Output = $out;
        }
        $crate::relations!(@check checked_decompose, $a, $b, $out, $a / $b = $out);
        $crate::relations!($($rest)*);
    };

    (@check $method:ident, $a:ident, $b:ident, $out:ident, $($row:tt)*) => {
        const _: () = assert!(
            match <$a as $crate::Kind>::DIM.$method(<$b as $crate::Kind>::DIM) {
                Some(dim) => dim.equals(<$out as $crate::Kind>::DIM),
                None => false,
            },
            concat!("relation `", stringify!($($row)*), "` has inconsistent dimensions")
        );
    };
}
