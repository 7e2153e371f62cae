//! Dimension vectors and their compile-time algebra.

use core::marker::PhantomData;
use core::ops::{Add, Mul, Sub};
use typenum::{Diff, Integer, Prod, Sum};

/// Marker trait for **dimension vectors**.
///
/// A dimension is the exponent of each of the seven SI base quantities, in the canonical order
/// Length, Mass, Time, Current, Temperature, Amount, Luminosity. The only implementor is [`Dim`], whose
/// exponents are type-level integers, so two quantities share a dimension exactly when their types are equal.
///
/// ```rust
/// use dimq_core::{dim, Dimension};
///
/// assert_eq!(dim::Force::EXPONENTS, [1, 1, -2, 0, 0, 0, 0]);
/// assert_eq!(dim::Frequency::TIME, -1);
/// ```
pub trait Dimension: 'static {
    /// Length exponent (metre).
    const LENGTH: i32;
    /// Mass exponent (kilogram).
    const MASS: i32;
    /// Time exponent (second).
    const TIME: i32;
    /// Electric current exponent (ampere).
    const CURRENT: i32;
    /// Thermodynamic temperature exponent (kelvin).
    const TEMPERATURE: i32;
    /// Amount of substance exponent (mole).
    const AMOUNT: i32;
    /// Luminous intensity exponent (candela).
    const LUMINOSITY: i32;

    /// All seven exponents in canonical order.
    const EXPONENTS: [i32; 7] = [
        Self::LENGTH,
        Self::MASS,
        Self::TIME,
        Self::CURRENT,
        Self::TEMPERATURE,
        Self::AMOUNT,
        Self::LUMINOSITY,
    ];

    /// `true` when every exponent is zero.
    const IS_DIMENSIONLESS: bool = Self::LENGTH == 0
        && Self::MASS == 0
        && Self::TIME == 0
        && Self::CURRENT == 0
        && Self::TEMPERATURE == 0
        && Self::AMOUNT == 0
        && Self::LUMINOSITY == 0;
}

/// Dimension vector with one [`typenum`] integer per base quantity.
///
/// Usually spelled through the aliases in [`dim`](crate::dim) rather than directly.
pub struct Dim<L, M, T, I, Th, N, J>(PhantomData<(L, M, T, I, Th, N, J)>);

impl<L, M, T, I, Th, N, J> Dimension for Dim<L, M, T, I, Th, N, J>
where
    L: Integer + 'static,
    M: Integer + 'static,
    T: Integer + 'static,
    I: Integer + 'static,
    Th: Integer + 'static,
    N: Integer + 'static,
    J: Integer + 'static,
{
    const LENGTH: i32 = L::I32;
    const MASS: i32 = M::I32;
    const TIME: i32 = T::I32;
    const CURRENT: i32 = I::I32;
    const TEMPERATURE: i32 = Th::I32;
    const AMOUNT: i32 = N::I32;
    const LUMINOSITY: i32 = J::I32;
}

// ─────────────────────────────────────────────────────────────────────────────
// Type-level operators
// ─────────────────────────────────────────────────────────────────────────────

/// Dimension of a product: exponents add element-wise.
pub trait DimMul<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension of a quotient: exponents subtract element-wise.
pub trait DimDiv<Rhs: Dimension>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Dimension raised to the integer power `E`: every exponent is multiplied by `E`.
pub trait DimPow<E: Integer>: Dimension {
    /// Resulting dimension.
    type Output: Dimension;
}

/// Shorthand for the dimension of `A * B`.
pub type MulDim<A, B> = <A as DimMul<B>>::Output;
/// Shorthand for the dimension of `A / B`.
pub type DivDim<A, B> = <A as DimDiv<B>>::Output;
/// Shorthand for the dimension of `A^E`.
pub type PowDim<A, E> = <A as DimPow<E>>::Output;

macro_rules! impl_dim_binary {
    ($trait:ident, $op:ident, $out:ident) => {
        impl<L1, M1, T1, I1, Th1, N1, J1, L2, M2, T2, I2, Th2, N2, J2>
            $trait<Dim<L2, M2, T2, I2, Th2, N2, J2>> for Dim<L1, M1, T1, I1, Th1, N1, J1>
        where
            L1: Integer + $op<L2> + 'static,
            M1: Integer + $op<M2> + 'static,
            T1: Integer + $op<T2> + 'static,
            I1: Integer + $op<I2> + 'static,
            Th1: Integer + $op<Th2> + 'static,
            N1: Integer + $op<N2> + 'static,
            J1: Integer + $op<J2> + 'static,
            L2: Integer + 'static,
            M2: Integer + 'static,
            T2: Integer + 'static,
            I2: Integer + 'static,
            Th2: Integer + 'static,
            N2: Integer + 'static,
            J2: Integer + 'static,
            $out<L1, L2>: Integer + 'static,
            $out<M1, M2>: Integer + 'static,
            $out<T1, T2>: Integer + 'static,
            $out<I1, I2>: Integer + 'static,
            $out<Th1, Th2>: Integer + 'static,
            $out<N1, N2>: Integer + 'static,
            $out<J1, J2>: Integer + 'static,
        {
            type Output = Dim<
                $out<L1, L2>,
                $out<M1, M2>,
                $out<T1, T2>,
                $out<I1, I2>,
                $out<Th1, Th2>,
                $out<N1, N2>,
                $out<J1, J2>,
            >;
        }
    };
}

impl_dim_binary!(DimMul, Add, Sum);
impl_dim_binary!(DimDiv, Sub, Diff);

impl<L, M, T, I, Th, N, J, E> DimPow<E> for Dim<L, M, T, I, Th, N, J>
where
    E: Integer,
    L: Integer + Mul<E> + 'static,
    M: Integer + Mul<E> + 'static,
    T: Integer + Mul<E> + 'static,
    I: Integer + Mul<E> + 'static,
    Th: Integer + Mul<E> + 'static,
    N: Integer + Mul<E> + 'static,
    J: Integer + Mul<E> + 'static,
    Prod<L, E>: Integer + 'static,
    Prod<M, E>: Integer + 'static,
    Prod<T, E>: Integer + 'static,
    Prod<I, E>: Integer + 'static,
    Prod<Th, E>: Integer + 'static,
    Prod<N, E>: Integer + 'static,
    Prod<J, E>: Integer + 'static,
{
    type Output = Dim<
        Prod<L, E>,
        Prod<M, E>,
        Prod<T, E>,
        Prod<I, E>,
        Prod<Th, E>,
        Prod<N, E>,
        Prod<J, E>,
    >;
}

/// Named dimension vectors.
///
/// Energy and moment of force share [`Energy`](dim::Energy); they are told apart only by their formatter.
pub mod dim {
    use super::Dim;
    use typenum::{N1, N2, P1, P2, P3, Z0};

    /// All exponents zero.
    pub type Dimensionless = Dim<Z0, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m`
    pub type Length = Dim<P1, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `kg`
    pub type Mass = Dim<Z0, P1, Z0, Z0, Z0, Z0, Z0>;
    /// `s`
    pub type Time = Dim<Z0, Z0, P1, Z0, Z0, Z0, Z0>;
    /// `A`
    pub type Current = Dim<Z0, Z0, Z0, P1, Z0, Z0, Z0>;
    /// `K`
    pub type Temperature = Dim<Z0, Z0, Z0, Z0, P1, Z0, Z0>;
    /// `mol`
    pub type Amount = Dim<Z0, Z0, Z0, Z0, Z0, P1, Z0>;
    /// `cd`
    pub type Luminosity = Dim<Z0, Z0, Z0, Z0, Z0, Z0, P1>;

    /// `m²`
    pub type Area = Dim<P2, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m³`
    pub type Volume = Dim<P3, Z0, Z0, Z0, Z0, Z0, Z0>;
    /// `m/s`
    pub type Velocity = Dim<P1, Z0, N1, Z0, Z0, Z0, Z0>;
    /// `m/s²`
    pub type Acceleration = Dim<P1, Z0, N2, Z0, Z0, Z0, Z0>;
    /// `m·kg/s²`
    pub type Force = Dim<P1, P1, N2, Z0, Z0, Z0, Z0>;
    /// `m²·kg/s²`
    pub type Energy = Dim<P2, P1, N2, Z0, Z0, Z0, Z0>;
    /// `s⁻¹`
    pub type Frequency = Dim<Z0, Z0, N1, Z0, Z0, Z0, Z0>;
}
