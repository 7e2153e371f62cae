//! Unit marker types and literal construction.

use crate::dimension::{DimPow, Dimension};
use crate::format::{DefaultFormat, UnitFormat};
use crate::real::{const_powi, Real};
use crate::Quantity;
use core::marker::PhantomData;
use typenum::Integer;

/// Trait implemented by every **unit** marker type.
///
/// * `RATIO` is the coherent value of one of this unit: metres are coherent (`Meter::RATIO == 1.0`), kilometres use
///   `Kilo::<Meter>::RATIO == 1000.0` and grams `Gram::RATIO == 1e-3` because the kilogram is the coherent mass unit.
///
/// * `Dim` ties the unit to its dimension vector.
///
/// * `Format` is the formatter given to quantities built from this unit (`Newton` prints as `N`, `Meter` uses the
///   [`DefaultFormat`]).
///
/// Marker types are never instantiated; they are declared with the `Unit` derive, or composed from
/// [`prefix`](crate::prefix) markers and [`Pow`].
///
/// # Invariants
///
/// - `RATIO` should be finite and non-zero.
pub trait Unit: 'static {
    /// Coherent value of one unit.
    const RATIO: f64;

    /// Dimension to which this unit belongs.
    type Dim: Dimension;

    /// Formatter attached to quantities created from this unit.
    type Format: UnitFormat<Self::Dim>;

    /// One of this unit, stored as `f64`.
    ///
    /// ```rust
    /// use dimq_core::units::Kilometer;
    /// use dimq_core::Unit;
    /// assert_eq!(Kilometer::ONE.value(), 1000.0);
    /// ```
    const ONE: Quantity<Self::Dim, f64, Self::Format> = Quantity::new(Self::RATIO);

    /// Builds a quantity from a number expressed in this unit. The stored magnitude is coherent.
    ///
    /// ```rust
    /// use dimq_core::units::{Gram, Kilometer};
    /// use dimq_core::Unit;
    ///
    /// assert_eq!(Kilometer::of(5.0).value(), 5000.0);
    /// assert_eq!(Gram::of(250.0).value(), 0.25);
    /// ```
    #[inline]
    fn of<T: Real>(value: T) -> Quantity<Self::Dim, T, Self::Format> {
        Quantity::new(value * T::from_f64(Self::RATIO))
    }
}

/// Unit `U` raised to the integer power `E` (a [`typenum`] integer).
///
/// This is the `_p<N>` / `_n<N>` family: `Pow<Meter, P2>` is the square metre and `Pow<Kilo<Meter>, P2>` the square
/// kilometre. Quantities built from a power use the [`DefaultFormat`].
///
/// ```rust
/// use dimq_core::prefix::Kilo;
/// use dimq_core::units::Meter;
/// use dimq_core::{Pow, Unit};
/// use typenum::{N1, P2};
///
/// assert_eq!(Pow::<Kilo<Meter>, P2>::of(1.0).value(), 1_000_000.0);
/// assert_eq!(Pow::<Kilo<Meter>, N1>::of(1.0).value(), 1e-3);
/// ```
pub struct Pow<U, E>(PhantomData<(U, E)>);

impl<U, E> Unit for Pow<U, E>
where
    U: Unit,
    U::Dim: DimPow<E>,
    E: Integer + 'static,
{
    const RATIO: f64 = const_powi(U::RATIO, E::I32);
    type Dim = <U::Dim as DimPow<E>>::Output;
    type Format = DefaultFormat;
}
