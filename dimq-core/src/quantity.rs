//! Quantity type and its implementations.

use crate::dimension::{dim, DimDiv, DimMul, DimPow, Dimension};
use crate::format::{self, DefaultFormat, UnitFormat, UnitSymbol};
use crate::real::{Promote, Real};
use crate::unit::Unit;
use core::cmp::Ordering;
use core::fmt;
use core::iter::Sum;
use core::marker::PhantomData;
use core::ops::*;
use typenum::Integer;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A magnitude tagged with its dimension vector and formatter.
///
/// `Quantity<D, T, F>` wraps a value of representation `T` (`f64` by default) expressed in coherent SI units,
/// together with phantom type information about its dimension `D` and formatter `F`. This enables compile-time
/// dimensional analysis while keeping the runtime layout of a bare `T`.
///
/// # Examples
///
/// ```rust
/// use dimq_core::units::{meters, seconds};
///
/// let x = meters(5.0);
/// let y = meters(3.0);
/// assert_eq!((x + y).value(), 8.0);
///
/// let v = x / seconds(2.0);
/// assert_eq!(v.to_string(), "2.5 m/s");
/// ```
///
/// Quantities of different dimensions cannot be added:
///
/// ```compile_fail,E0308
/// use dimq_core::{Length, Time};
/// let d: Length = Length::new(1.0);
/// let t: Time = Time::new(1.0);
/// let _ = d + t;
/// ```
#[repr(transparent)]
pub struct Quantity<D, T = f64, F = DefaultFormat> {
    value: T,
    _marker: PhantomData<(D, F)>,
}

impl<D: Dimension, T: Real, F> Quantity<D, T, F> {
    /// A constant representing zero for this quantity type.
    pub const ZERO: Self = Self::new(T::ZERO);

    /// A constant representing NaN for this quantity type.
    ///
    /// ```rust
    /// use dimq_core::Length;
    /// assert!(Length::NAN.value().is_nan());
    /// ```
    pub const NAN: Self = Self::new(T::NAN);

    /// Length exponent of this quantity's dimension.
    pub const LENGTH: i32 = D::LENGTH;
    /// Mass exponent of this quantity's dimension.
    pub const MASS: i32 = D::MASS;
    /// Time exponent of this quantity's dimension.
    pub const TIME: i32 = D::TIME;
    /// Current exponent of this quantity's dimension.
    pub const CURRENT: i32 = D::CURRENT;
    /// Temperature exponent of this quantity's dimension.
    pub const TEMPERATURE: i32 = D::TEMPERATURE;
    /// Amount exponent of this quantity's dimension.
    pub const AMOUNT: i32 = D::AMOUNT;
    /// Luminosity exponent of this quantity's dimension.
    pub const LUMINOSITY: i32 = D::LUMINOSITY;
    /// All seven exponents in canonical order.
    ///
    /// ```rust
    /// use dimq_core::Force;
    /// assert_eq!(Force::EXPONENTS, [1, 1, -2, 0, 0, 0, 0]);
    /// ```
    pub const EXPONENTS: [i32; 7] = D::EXPONENTS;

    /// Creates a quantity from a magnitude already expressed in coherent units.
    ///
    /// ```rust
    /// use dimq_core::Length;
    /// let d = Length::new(3.0);
    /// assert_eq!(d.value(), 3.0);
    /// ```
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Returns the magnitude in coherent units.
    ///
    /// ```rust
    /// use dimq_core::units::kilometers;
    /// assert_eq!(kilometers(2.5).value(), 2500.0);
    /// ```
    #[inline]
    pub fn value(self) -> T {
        self.value
    }

    /// Returns the magnitude expressed in unit `U` of the same dimension.
    ///
    /// ```rust
    /// use dimq_core::units::{meters, Kilometer};
    /// assert_eq!(meters(1500.0).value_in::<Kilometer>(), 1.5);
    /// ```
    #[inline]
    pub fn value_in<U: Unit<Dim = D>>(self) -> T {
        self.value / T::from_f64(U::RATIO)
    }

    /// Returns the absolute value.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// assert_eq!(meters(-10.0).abs().value(), 10.0);
    /// ```
    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns the minimum of this quantity and another.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// assert_eq!(meters(3.0).min(meters(5.0)).value(), 3.0);
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        if other.value < self.value {
            other
        } else {
            self
        }
    }

    /// Returns the maximum of this quantity and another.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// assert_eq!(meters(3.0).max(meters(5.0)).value(), 5.0);
    /// ```
    #[inline]
    pub fn max(self, other: Self) -> Self {
        if other.value > self.value {
            other
        } else {
            self
        }
    }

    /// Relabels this quantity with another formatter. The magnitude is untouched.
    ///
    /// ```rust
    /// use dimq_core::units::newtons;
    /// use dimq_core::DefaultFormat;
    ///
    /// let f = newtons(1.0);
    /// assert_eq!(f.to_string(), "1 N");
    /// assert_eq!(f.with_format::<DefaultFormat>().to_string(), "1 m·kg/s²");
    /// ```
    #[inline]
    pub fn with_format<F2: UnitFormat<D>>(self) -> Quantity<D, T, F2> {
        Quantity::new(self.value)
    }

    /// Changes the numeric representation, rounding when the target is narrower.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// let m32 = meters(1.5).cast::<f32>();
    /// assert_eq!(m32.value(), 1.5_f32);
    /// ```
    #[inline]
    pub fn cast<T2: Real>(self) -> Quantity<D, T2, F> {
        Quantity::new(T2::from_f64(self.value.to_f64()))
    }

    /// Changes both representation and formatter.
    #[inline]
    pub fn convert<T2: Real, F2: UnitFormat<D>>(self) -> Quantity<D, T2, F2> {
        self.cast::<T2>().with_format::<F2>()
    }

    /// Approximate equality.
    ///
    /// True when both magnitudes are equal, or when the lower one plus `epsilon` reaches the higher one. The bound
    /// is inclusive and symmetric in `self` and `other`.
    ///
    /// ```rust
    /// use dimq_core::units::{meters, millimeters};
    ///
    /// assert!(meters(1.0).within(millimeters(1.0), &meters(1.0009)));
    /// assert!(!meters(1.0).within(millimeters(1.0), &meters(1.002)));
    /// ```
    pub fn within<E, G>(&self, epsilon: Quantity<D, T, E>, other: &Quantity<D, T, G>) -> bool {
        let (a, b, eps) = (self.value, other.value, epsilon.value);
        a == b || (a < b && a + eps >= b) || (b < a && b + eps >= a)
    }

    /// Adds one coherent unit in place and returns the mutated quantity.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// let mut d = meters(1.0);
    /// d.inc().inc();
    /// assert_eq!(d, meters(3.0));
    /// ```
    #[inline]
    pub fn inc(&mut self) -> &mut Self {
        self.value = self.value + T::ONE;
        self
    }

    /// Subtracts one coherent unit in place and returns the mutated quantity.
    #[inline]
    pub fn dec(&mut self) -> &mut Self {
        self.value = self.value - T::ONE;
        self
    }

    /// Adds one coherent unit in place and returns the previous value.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// let mut d = meters(1.0);
    /// let before = d.post_inc();
    /// assert_eq!((before, d), (meters(1.0), meters(2.0)));
    /// ```
    #[inline]
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    /// Subtracts one coherent unit in place and returns the previous value.
    #[inline]
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    /// Raises the quantity to the integer power `E`; every exponent of the dimension is multiplied by `E`.
    ///
    /// `x.powi::<Z0>()` has magnitude one for every `x`, zero included.
    ///
    /// ```rust
    /// use dimq_core::units::meters;
    /// use typenum::P3;
    ///
    /// let v = meters(2.0).powi::<P3>();
    /// assert_eq!(v.value(), 8.0);
    /// assert_eq!(v.to_string(), "8 m³");
    /// ```
    #[inline]
    pub fn powi<E: Integer>(self) -> Quantity<<D as DimPow<E>>::Output, T>
    where
        D: DimPow<E>,
    {
        Quantity::new(self.value.powi(E::I32))
    }

    /// Unit text of this quantity's formatter, without the magnitude.
    ///
    /// ```rust
    /// use dimq_core::units::{meters, seconds};
    /// let a = meters(1.0) / seconds(1.0) / seconds(1.0);
    /// assert_eq!(a.unit().to_string(), "m/s²");
    /// ```
    #[inline]
    pub fn unit(&self) -> UnitSymbol<D, F>
    where
        F: UnitFormat<D>,
    {
        UnitSymbol::new()
    }
}

macro_rules! power_shortcuts {
    ($($name:ident => $exp:ident),+ $(,)?) => {
        impl<D: Dimension, T: Real, F> Quantity<D, T, F> {
            $(
                #[doc = concat!("Shorthand for `powi::<", stringify!($exp), ">()`.")]
                #[inline]
                pub fn $name(self) -> Quantity<<D as DimPow<typenum::$exp>>::Output, T>
                where
                    D: DimPow<typenum::$exp>,
                {
                    self.powi::<typenum::$exp>()
                }
            )+
        }
    };
}

power_shortcuts! {
    p0 => Z0, p1 => P1, p2 => P2, p3 => P3, p4 => P4, p5 => P5, p6 => P6, p7 => P7, p8 => P8, p9 => P9,
    n1 => N1, n2 => N2, n3 => N3, n4 => N4, n5 => N5, n6 => N6, n7 => N7, n8 => N8, n9 => N9,
}

// ─────────────────────────────────────────────────────────────────────────────
// Core trait implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<D, T: Copy, F> Clone for Quantity<D, T, F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<D, T: Copy, F> Copy for Quantity<D, T, F> {}

impl<D: Dimension, T: Real, F> Default for Quantity<D, T, F> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<D: Dimension, T: fmt::Debug, F> fmt::Debug for Quantity<D, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quantity")
            .field("value", &self.value)
            .field("dimension", &D::EXPONENTS)
            .finish()
    }
}

impl<D: Dimension, T: Real, F: UnitFormat<D>> fmt::Display for Quantity<D, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format::write_quantity::<D, T, F>(f, self.value)
    }
}

// Comparisons and arithmetic across representations go through `Promote`, so `f32` meets `f64` as `f64`.

impl<D, T1, T2, F1, F2> PartialEq<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: Promote<T2>,
    T2: Real,
{
    #[inline]
    fn eq(&self, other: &Quantity<D, T2, F2>) -> bool {
        let (a, b) = self.value.promote_with(other.value);
        a == b
    }
}

impl<D, T1, T2, F1, F2> PartialOrd<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: Promote<T2>,
    T2: Real,
{
    #[inline]
    fn partial_cmp(&self, other: &Quantity<D, T2, F2>) -> Option<Ordering> {
        let (a, b) = self.value.promote_with(other.value);
        a.partial_cmp(&b)
    }
}

impl<D: Dimension, F1, F2> From<Quantity<D, f32, F1>> for Quantity<D, f64, F2>
where
    F2: UnitFormat<D>,
{
    #[inline]
    fn from(value: Quantity<D, f32, F1>) -> Self {
        Self::new(f64::from(value.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Additive operators (same dimension)
// ─────────────────────────────────────────────────────────────────────────────

// Sums and differences are new quantities: they print with the default format whatever the operands carried.

impl<D, T1, T2, F1, F2> Add<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: Promote<T2>,
    T2: Real,
{
    type Output = Quantity<D, <T1 as Promote<T2>>::Output>;
    #[inline]
    fn add(self, rhs: Quantity<D, T2, F2>) -> Self::Output {
        let (a, b) = self.value.promote_with(rhs.value);
        Quantity {
            value: a + b,
            _marker: PhantomData,
        }
    }
}

impl<D, T1, T2, F1, F2> AddAssign<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: AddAssign<T2>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Quantity<D, T2, F2>) {
        self.value += rhs.value;
    }
}

impl<D, T1, T2, F1, F2> Sub<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: Promote<T2>,
    T2: Real,
{
    type Output = Quantity<D, <T1 as Promote<T2>>::Output>;
    #[inline]
    fn sub(self, rhs: Quantity<D, T2, F2>) -> Self::Output {
        let (a, b) = self.value.promote_with(rhs.value);
        Quantity {
            value: a - b,
            _marker: PhantomData,
        }
    }
}

impl<D, T1, T2, F1, F2> SubAssign<Quantity<D, T2, F2>> for Quantity<D, T1, F1>
where
    T1: SubAssign<T2>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Quantity<D, T2, F2>) {
        self.value -= rhs.value;
    }
}

impl<D, T: Neg<Output = T>, F> Neg for Quantity<D, T, F> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Quantity {
            value: -self.value,
            _marker: PhantomData,
        }
    }
}

impl<D: Dimension, T: Real, F> Sum for Quantity<D, T, F> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, q| Self::new(acc.value + q.value))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Multiplicative operators (dimension algebra)
// ─────────────────────────────────────────────────────────────────────────────

impl<D1, D2, T1, T2, F1, F2> Mul<Quantity<D2, T2, F2>> for Quantity<D1, T1, F1>
where
    D1: DimMul<D2>,
    D2: Dimension,
    T1: Promote<T2>,
    T2: Real,
{
    type Output = Quantity<<D1 as DimMul<D2>>::Output, <T1 as Promote<T2>>::Output>;
    #[inline]
    fn mul(self, rhs: Quantity<D2, T2, F2>) -> Self::Output {
        let (a, b) = self.value.promote_with(rhs.value);
        Quantity {
            value: a * b,
            _marker: PhantomData,
        }
    }
}

impl<D1, D2, T1, T2, F1, F2> Div<Quantity<D2, T2, F2>> for Quantity<D1, T1, F1>
where
    D1: DimDiv<D2>,
    D2: Dimension,
    T1: Promote<T2>,
    T2: Real,
{
    type Output = Quantity<<D1 as DimDiv<D2>>::Output, <T1 as Promote<T2>>::Output>;
    #[inline]
    fn div(self, rhs: Quantity<D2, T2, F2>) -> Self::Output {
        let (a, b) = self.value.promote_with(rhs.value);
        Quantity {
            value: a / b,
            _marker: PhantomData,
        }
    }
}

impl<D, T: MulAssign, F, G> MulAssign<Quantity<dim::Dimensionless, T, G>> for Quantity<D, T, F> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quantity<dim::Dimensionless, T, G>) {
        self.value *= rhs.value;
    }
}

impl<D, T: DivAssign, F, G> DivAssign<Quantity<dim::Dimensionless, T, G>> for Quantity<D, T, F> {
    #[inline]
    fn div_assign(&mut self, rhs: Quantity<dim::Dimensionless, T, G>) {
        self.value /= rhs.value;
    }
}

// Scalar operands are concrete so they cannot overlap with the quantity impls above.
macro_rules! impl_scalar_ops {
    ($($t:ty),+) => {
        $(
            impl<D, F> Mul<$t> for Quantity<D, $t, F> {
                type Output = Self;
                #[inline]
                fn mul(self, rhs: $t) -> Self {
                    Quantity { value: self.value * rhs, _marker: PhantomData }
                }
            }

            impl<D, F> Mul<Quantity<D, $t, F>> for $t {
                type Output = Quantity<D, $t, F>;
                #[inline]
                fn mul(self, rhs: Quantity<D, $t, F>) -> Self::Output {
                    rhs * self
                }
            }

            impl<D, F> Div<$t> for Quantity<D, $t, F> {
                type Output = Self;
                #[inline]
                fn div(self, rhs: $t) -> Self {
                    Quantity { value: self.value / rhs, _marker: PhantomData }
                }
            }

            impl<D, F> Div<Quantity<D, $t, F>> for $t
            where
                dim::Dimensionless: DimDiv<D>,
                D: Dimension,
            {
                type Output = Quantity<<dim::Dimensionless as DimDiv<D>>::Output, $t>;
                #[inline]
                fn div(self, rhs: Quantity<D, $t, F>) -> Self::Output {
                    Quantity { value: self / rhs.value, _marker: PhantomData }
                }
            }

            impl<D, F> Rem<$t> for Quantity<D, $t, F> {
                type Output = Self;
                #[inline]
                fn rem(self, rhs: $t) -> Self {
                    Quantity { value: self.value % rhs, _marker: PhantomData }
                }
            }

            impl<D, F> MulAssign<$t> for Quantity<D, $t, F> {
                #[inline]
                fn mul_assign(&mut self, rhs: $t) {
                    self.value *= rhs;
                }
            }

            impl<D, F> DivAssign<$t> for Quantity<D, $t, F> {
                #[inline]
                fn div_assign(&mut self, rhs: $t) {
                    self.value /= rhs;
                }
            }

            impl<D, F> RemAssign<$t> for Quantity<D, $t, F> {
                #[inline]
                fn rem_assign(&mut self, rhs: $t) {
                    self.value %= rhs;
                }
            }
        )+
    };
}

impl_scalar_ops!(f32, f64);

// ─────────────────────────────────────────────────────────────────────────────
// Serde support
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl<D, T: Serialize, F> Serialize for Quantity<D, T, F> {
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, D, T: Deserialize<'de>, F> Deserialize<'de> for Quantity<D, T, F> {
    fn deserialize<De>(deserializer: De) -> core::result::Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let value = T::deserialize(deserializer)?;
        Ok(Quantity {
            value,
            _marker: PhantomData,
        })
    }
}

/// Serde helper module for serializing quantities with unit information.
///
/// Use this with the `#[serde(with = "...")]` attribute to keep the unit string of the quantity's formatter in
/// serialized data. The value is always the coherent magnitude.
///
/// # Examples
///
/// ```rust
/// use dimq_core::{Force, Length};
/// use serde::{Serialize, Deserialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Config {
///     #[serde(with = "dimq_core::serde_with_unit")]
///     max_load: Force,     // Serializes as {"value": 100.0, "unit": "N"}
///
///     min_distance: Length, // Serializes as 50.0 (default, compact)
/// }
/// ```
#[cfg(feature = "serde")]
pub mod serde_with_unit {
    use super::*;
    use alloc::string::{String, ToString};
    use serde::de::{self, Deserializer, MapAccess, Visitor};
    use serde::ser::{SerializeStruct, Serializer};

    /// Serializes a quantity as a struct with `value` and `unit` fields.
    ///
    /// # Example JSON Output
    /// ```json
    /// {"value": 42.5, "unit": "m/s"}
    /// ```
    pub fn serialize<D, T, F, S>(quantity: &Quantity<D, T, F>, serializer: S) -> Result<S::Ok, S::Error>
    where
        D: Dimension,
        T: Real + Serialize,
        F: UnitFormat<D>,
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Quantity", 2)?;
        state.serialize_field("value", &quantity.value)?;
        state.serialize_field("unit", &quantity.unit().to_string())?;
        state.end()
    }

    /// Deserializes a quantity from a struct with `value` and optionally `unit` fields.
    ///
    /// The `unit` field is validated against the formatter's unit string when present.
    pub fn deserialize<'de, D, T, F, De>(deserializer: De) -> Result<Quantity<D, T, F>, De::Error>
    where
        D: Dimension,
        T: Real + Deserialize<'de>,
        F: UnitFormat<D>,
        De: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(field_identifier, rename_all = "lowercase")]
        enum Field {
            Value,
            Unit,
        }

        struct QuantityVisitor<D, T, F>(PhantomData<(D, T, F)>);

        impl<'de, D, T, F> Visitor<'de> for QuantityVisitor<D, T, F>
        where
            D: Dimension,
            T: Real + Deserialize<'de>,
            F: UnitFormat<D>,
        {
            type Value = Quantity<D, T, F>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("struct Quantity with value and unit fields")
            }

            fn visit_map<V>(self, mut map: V) -> Result<Quantity<D, T, F>, V::Error>
            where
                V: MapAccess<'de>,
            {
                let mut value: Option<T> = None;
                let mut unit: Option<String> = None;

                while let Some(key) = map.next_key()? {
                    match key {
                        Field::Value => {
                            if value.is_some() {
                                return Err(de::Error::duplicate_field("value"));
                            }
                            value = Some(map.next_value()?);
                        }
                        Field::Unit => {
                            if unit.is_some() {
                                return Err(de::Error::duplicate_field("unit"));
                            }
                            unit = Some(map.next_value()?);
                        }
                    }
                }

                let value = value.ok_or_else(|| de::Error::missing_field("value"))?;

                if let Some(unit) = unit {
                    let expected = UnitSymbol::<D, F>::new().to_string();
                    if unit != expected {
                        return Err(de::Error::custom(format_args!(
                            "unit mismatch: expected '{}', found '{}'",
                            expected, unit
                        )));
                    }
                }

                Ok(Quantity::new(value))
            }
        }

        deserializer.deserialize_struct(
            "Quantity",
            &["value", "unit"],
            QuantityVisitor(PhantomData),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::*;
    use crate::{Area, Energy, Force, Frequency, Length, Pow, Velocity};
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;
    use typenum::{P2, Z0};

    // ─────────────────────────────────────────────────────────────────────────────
    // Construction and accessors
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn new_stores_coherent_value() {
        let q = Length::new(42.0);
        assert_eq!(q.value(), 42.0);
    }

    #[test]
    fn meters_literal_keeps_value() {
        assert_eq!(meters(10.0).value(), 10.0);
    }

    #[test]
    fn prefixed_literal_is_coherent() {
        assert_eq!(kilometers(5.0).value(), 5000.0);
        assert_eq!(kilograms(2.0).value(), 2.0);
        assert_eq!(grams(500.0).value(), 0.5);
    }

    #[test]
    fn exponent_constants() {
        assert_eq!(Velocity::LENGTH, 1);
        assert_eq!(Velocity::TIME, -1);
        assert_eq!(Force::MASS, 1);
        assert_eq!(Frequency::EXPONENTS, [0, 0, -1, 0, 0, 0, 0]);
    }

    #[test]
    fn value_in_other_unit() {
        assert_abs_diff_eq!(grams(1500.0).value_in::<Kilogram>(), 1.5, epsilon = 1e-12);
        assert_abs_diff_eq!(seconds(0.25).value_in::<Millisecond>(), 250.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_nan_default() {
        assert_eq!(Length::ZERO.value(), 0.0);
        assert!(Length::NAN.value().is_nan());
        assert_eq!(Length::default(), Length::ZERO);
    }

    #[test]
    fn min_max_abs() {
        let a = meters(-3.0);
        let b = meters(2.0);
        assert_eq!(a.min(b), a);
        assert_eq!(a.max(b), b);
        assert_eq!(a.abs(), meters(3.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Additive operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn add_and_sub() {
        assert_eq!(meters(3.0) + meters(7.0), meters(10.0));
        assert_eq!(meters(10.0) - meters(3.0), meters(7.0));
    }

    #[test]
    fn sum_and_difference_use_default_format() {
        let sum = newtons(1.0) + newtons(2.0);
        assert_eq!(sum.to_string(), "3 m·kg/s²");
        let difference = joules(5.0) - newtons(2.0).with_format::<DefaultFormat>() * meters(1.0);
        assert_eq!(difference.to_string(), "3 m²·kg/s²");
        let back: Force = sum.with_format();
        assert_eq!(back.to_string(), "3 N");
    }

    #[test]
    fn mixed_representations_promote() {
        let narrow = Meter::of(1.0_f32);
        let sum = narrow + meters(2.0);
        assert_eq!(sum.value(), 3.0_f64);
        let difference = meters(2.0) - Meter::of(0.5_f32);
        assert_eq!(difference.value(), 1.5_f64);
        let area = Meter::of(2.0_f32) * meters(3.0);
        assert_eq!(area.value(), 6.0_f64);
        let speed = meters(3.0) / Second::of(2.0_f32);
        assert_eq!(speed.value(), 1.5_f64);
        let same: Quantity<crate::dim::Length, f32> = Meter::of(1.0_f32) + Meter::of(2.0_f32);
        assert_eq!(same.value(), 3.0_f32);
    }

    #[test]
    fn comparisons_across_representations() {
        assert_eq!(Meter::of(1.5_f32), meters(1.5));
        assert!(Meter::of(1.0_f32) < meters(1.5));
        assert!(kilometers(1.0) > Meter::of(999.0_f32));
    }

    #[test]
    fn add_assign_and_sub_assign() {
        let mut q = meters(5.0);
        q += meters(3.0);
        assert_eq!(q.value(), 8.0);
        q -= meters(10.0);
        assert_eq!(q.value(), -2.0);
    }

    #[test]
    fn neg() {
        assert_eq!((-meters(5.0)).value(), -5.0);
        assert_eq!((-(-meters(5.0))).value(), 5.0);
    }

    #[test]
    fn sum_of_iterator() {
        let total: Length = [meters(1.0), meters(2.0), kilometers(0.5)].into_iter().sum();
        assert_eq!(total, meters(503.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Multiplicative operators
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn scalar_mul_div_rem() {
        let q = meters(5.0);
        assert_eq!((q * 3.0).value(), 15.0);
        assert_eq!((3.0 * q).value(), 15.0);
        assert_eq!((q / 2.0).value(), 2.5);
        assert_eq!((meters(10.0) % 3.0).value(), 1.0);
    }

    #[test]
    fn scalar_ops_keep_format() {
        assert_eq!((newtons(2.0) * 3.0).to_string(), "6 N");
        assert_eq!((2.0 * newtons(2.0)).to_string(), "4 N");
    }

    #[test]
    fn quantity_product_adds_exponents() {
        let area = meters(3.0) * meters(4.0);
        assert_eq!(area.value(), 12.0);
        assert_eq!(area.to_string(), "12 m²");

        let work: Quantity<crate::dim::Energy> = newtons(2.0) * meters(3.0);
        assert_eq!(work.value(), 6.0);
    }

    #[test]
    fn quantity_quotient_subtracts_exponents() {
        let v = meters(100.0) / seconds(20.0);
        assert_eq!(v.value(), 5.0);
        assert_eq!(v.to_string(), "5 m/s");

        let back = (meters(2.0) * meters(3.0)) / meters(3.0);
        assert_eq!(back, meters(2.0));
    }

    #[test]
    fn scalar_over_quantity_inverts_dimension() {
        let f = 10.0 / seconds(2.0);
        assert_eq!(f.value(), 5.0);
        assert_eq!(f.to_string(), "5 s⁻¹");
    }

    #[test]
    fn same_dimension_quotient_is_dimensionless() {
        let ratio = meters(1.0) / meters(4.0);
        assert_eq!(ratio.to_string(), "0.25");
    }

    #[test]
    fn compound_scalar_assign() {
        let mut q = meters(4.0);
        q *= 2.5;
        assert_eq!(q.value(), 10.0);
        q /= 4.0;
        assert_eq!(q.value(), 2.5);
        q %= 1.0;
        assert_eq!(q.value(), 0.5);
    }

    #[test]
    fn compound_dimensionless_assign() {
        let mut q = meters(4.0);
        q *= meters(3.0) / meters(1.0);
        assert_eq!(q, meters(12.0));
        q /= seconds(6.0) / seconds(1.0);
        assert_eq!(q, meters(2.0));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Increment and decrement
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn pre_increment_and_decrement() {
        let mut q = meters(1.0);
        assert_eq!(*q.inc(), meters(2.0));
        assert_eq!(*q.dec().dec(), meters(0.0));
    }

    #[test]
    fn post_increment_returns_previous() {
        let mut q = seconds(1.0);
        let before = q.post_inc();
        assert_eq!(before, seconds(1.0));
        assert_eq!(q, seconds(2.0));
        let before = q.post_dec();
        assert_eq!(before, seconds(2.0));
        assert_eq!(q, seconds(1.0));
    }

    #[test]
    fn increment_is_one_coherent_unit() {
        let mut q = kilometers(1.0);
        q.inc();
        assert_eq!(q.value(), 1001.0);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Powers
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn powi_scales_dimension_and_value() {
        let a: Area = meters(3.0).p2().with_format();
        assert_eq!(a.value(), 9.0);
        let inv = meters(4.0).n1();
        assert_eq!(inv.value(), 0.25);
        assert_eq!(inv.to_string(), "0.25 m⁻¹");
        assert_eq!(meters(2.0).powi::<P2>(), meters(2.0).p2());
    }

    #[test]
    fn zeroth_power_is_one() {
        assert_eq!(meters(0.0).powi::<Z0>().value(), 1.0);
        assert_eq!(newtons(7.0).p0().value(), 1.0);
        assert_eq!(newtons(7.0).p0().to_string(), "1");
    }

    #[test]
    fn high_powers() {
        assert_eq!(meters(2.0).p9().value(), 512.0);
        assert_eq!(meters(2.0).n9().value(), 1.0 / 512.0);
        assert_eq!(meters(2.0).p9().to_string(), "512 m⁹");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Comparison and approximate equality
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn comparisons() {
        assert!(meters(1.0) < meters(2.0));
        assert!(meters(2.0) >= meters(2.0));
        assert!(meters(3.0) > centimeters(299.0));
        assert!(meters(1.0) != meters(1.5));
        assert_eq!(newtons(1.0), newtons(1.0).with_format::<DefaultFormat>());
    }

    #[test]
    fn within_is_symmetric_and_inclusive() {
        let eps = meters(0.5);
        assert!(meters(1.0).within(eps, &meters(1.0)));
        assert!(meters(1.0).within(eps, &meters(1.5)));
        assert!(meters(1.5).within(eps, &meters(1.0)));
        assert!(!meters(1.0).within(eps, &meters(1.6)));
        assert!(!meters(1.6).within(eps, &meters(1.0)));
    }

    #[test]
    fn within_nan_is_false() {
        assert!(!Length::NAN.within(meters(1.0), &Length::NAN));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Representation and formatter conversions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn widening_from_f32() {
        let narrow: Quantity<crate::dim::Length, f32> = Meter::of(2.5_f32);
        let wide: Length = narrow.into();
        assert_eq!(wide.value(), 2.5);
    }

    #[test]
    fn cast_and_convert() {
        let e: Energy = joules(1500.0);
        assert_eq!(e.cast::<f32>().value(), 1500.0_f32);
        let moment: Quantity<crate::dim::Energy, f32, NewtonMeters> = e.convert();
        assert_eq!(moment.to_string(), "1500 N·m");
    }

    #[test]
    fn with_format_is_pure_relabeling() {
        let f = newtons(3.0);
        let g = f.with_format::<DefaultFormat>();
        assert_eq!(f.value(), g.value());
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Display and Debug
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn display_precision_applies_to_magnitude() {
        assert_eq!(format!("{:.2}", meters(1.0 / 3.0)), "0.33 m");
        assert_eq!(format!("{:.1}", kilonewtons(1.25)), "1250.0 N");
    }

    #[test]
    fn debug_shows_value_and_dimension() {
        let s = format!("{:?}", meters(1.5));
        assert_eq!(s, "Quantity { value: 1.5, dimension: [1, 0, 0, 0, 0, 0, 0] }");
    }

    #[test]
    fn display_negative_value() {
        assert_eq!(meters(-99.9).to_string(), "-99.9 m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Edge cases
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn edge_case_infinity_and_nan_propagate() {
        let inf = meters(1.0) / 0.0;
        assert!(inf.value().is_infinite());
        let nan = inf - inf;
        assert!(nan.value().is_nan());
    }

    #[test]
    fn edge_case_large_values() {
        let large = meters(1e100);
        let small = meters(1e-100);
        assert_eq!((large * small).value(), 1.0);
    }

    proptest! {
        #[test]
        fn prop_double_is_sum(x in -1e9..1e9f64) {
            let q = meters(x);
            prop_assert_eq!(q + q, q * 2.0);
            prop_assert_eq!((q - q).value(), 0.0);
        }

        #[test]
        fn prop_mul_then_div_roundtrips(x in -1e6..1e6f64, y in 1e-3..1e6f64) {
            let a = kilograms(x);
            let b = seconds(y);
            let back = (a * b) / b;
            prop_assert!(a.within(kilograms(1e-9 * x.abs().max(1.0)), &back));
        }

        #[test]
        fn prop_power_of_literal(k in 1e-3..1e3f64) {
            let lhs = meters(k).p3();
            let rhs = Pow::<Meter, typenum::P3>::of(1.0) * k.powi(3);
            prop_assert!((lhs.value() - rhs.value()).abs() <= 1e-12 * rhs.value());
        }
    }

    #[test]
    fn relative_precision_of_prefix_powers() {
        let km2 = Pow::<Kilometer, P2>::of(1.0);
        assert_relative_eq!(km2.value(), 1e6, max_relative = 1e-15);
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Serde tests
    // ─────────────────────────────────────────────────────────────────────────────

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;
        use serde::{Deserialize, Serialize};

        #[test]
        fn serialize_quantity() {
            let json = serde_json::to_string(&meters(42.5)).unwrap();
            assert_eq!(json, "42.5");
        }

        #[test]
        fn deserialize_quantity() {
            let q: Length = serde_json::from_str("42.5").unwrap();
            assert_eq!(q.value(), 42.5);
        }

        #[derive(Serialize, Deserialize, Debug)]
        struct TestStruct {
            #[serde(with = "crate::serde_with_unit")]
            speed: Velocity,
            #[serde(with = "crate::serde_with_unit")]
            load: Force,
        }

        #[test]
        fn serde_with_unit_serialize() {
            let data = TestStruct {
                speed: meters(3.0) / seconds(2.0),
                load: kilonewtons(1.0),
            };
            let json = serde_json::to_string(&data).unwrap();
            assert_eq!(
                json,
                r#"{"speed":{"value":1.5,"unit":"m/s"},"load":{"value":1000.0,"unit":"N"}}"#
            );
        }

        #[test]
        fn serde_with_unit_deserialize() {
            let json = r#"{"speed":{"value":1.5,"unit":"m/s"},"load":{"value":10.0}}"#;
            let data: TestStruct = serde_json::from_str(json).unwrap();
            assert_eq!(data.speed.value(), 1.5);
            assert_eq!(data.load.value(), 10.0);
        }

        #[test]
        fn serde_with_unit_wrong_unit() {
            let json = r#"{"speed":{"value":1.5,"unit":"km/h"},"load":{"value":10.0}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("unit mismatch"));
        }

        #[test]
        fn serde_with_unit_missing_value() {
            let json = r#"{"speed":{"unit":"m/s"},"load":{"value":10.0}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("missing field"));
        }

        #[test]
        fn serde_with_unit_duplicate_value() {
            let json = r#"{"speed":{"value":1.5,"value":2.0},"load":{"value":10.0}}"#;
            let err = serde_json::from_str::<TestStruct>(json).unwrap_err();
            assert!(err.to_string().contains("duplicate field"));
        }

        #[test]
        fn serde_with_unit_invalid_format() {
            let json = r#"{"speed":"fast","load":{"value":10.0}}"#;
            assert!(serde_json::from_str::<TestStruct>(json).is_err());
        }
    }
}
