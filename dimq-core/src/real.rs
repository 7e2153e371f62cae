//! Numeric representations a quantity can be stored in.

use core::fmt::{Debug, Display};
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Floating-point representation of a quantity's magnitude.
///
/// Implemented for `f32` and `f64`. With the `std` feature disabled, the operations that are not available in
/// `core` go through `libm`.
pub trait Real:
    Copy
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
    + Debug
    + Display
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Not-a-number.
    const NAN: Self;

    /// Converts from `f64`, rounding if the representation is narrower.
    fn from_f64(value: f64) -> Self;

    /// Widens to `f64`.
    fn to_f64(self) -> f64;

    /// Raises to an integer power. `x.powi(0)` is one for every `x`, zero included.
    fn powi(self, n: i32) -> Self;

    /// Absolute value.
    fn abs(self) -> Self;
}

impl Real for f64 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAN: Self = f64::NAN;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        #[cfg(feature = "std")]
        {
            f64::powi(self, n)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::pow(self, n as f64)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f64::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabs(self)
        }
    }
}

impl Real for f32 {
    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NAN: Self = f32::NAN;

    #[inline]
    fn from_f64(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn powi(self, n: i32) -> Self {
        #[cfg(feature = "std")]
        {
            f32::powi(self, n)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::powf(self, n as f32)
        }
    }

    #[inline]
    fn abs(self) -> Self {
        #[cfg(feature = "std")]
        {
            f32::abs(self)
        }
        #[cfg(not(feature = "std"))]
        {
            libm::fabsf(self)
        }
    }
}

/// Common representation of two operands, used when quantities of different representations meet.
///
/// Mixing `f32` and `f64` promotes to `f64`; same-representation pairs keep their type.
///
/// ```rust
/// use dimq_core::Promote;
/// let (a, b) = 1.5_f32.promote_with(2.0_f64);
/// assert_eq!(a + b, 3.5_f64);
/// ```
pub trait Promote<Rhs: Real>: Real {
    /// Representation both operands are converted to.
    type Output: Real;

    /// Converts both operands to the common representation.
    #[inline]
    fn promote_with(self, rhs: Rhs) -> (<Self as Promote<Rhs>>::Output, <Self as Promote<Rhs>>::Output) {
        (
            <<Self as Promote<Rhs>>::Output as Real>::from_f64(self.to_f64()),
            <<Self as Promote<Rhs>>::Output as Real>::from_f64(rhs.to_f64()),
        )
    }
}

macro_rules! impl_promote {
    ($($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl Promote<$rhs> for $lhs {
                type Output = $out;
            }
        )+
    };
}

impl_promote! {
    f32, f32 => f32;
    f32, f64 => f64;
    f64, f32 => f64;
    f64, f64 => f64;
}

/// `base^n` usable in constant expressions, for unit ratios.
pub(crate) const fn const_powi(base: f64, n: i32) -> f64 {
    let mut result = 1.0;
    let mut i = 0;
    let count = n.unsigned_abs();
    while i < count {
        result *= base;
        i += 1;
    }
    if n < 0 {
        1.0 / result
    } else {
        result
    }
}

/// `10^exponent` usable in constant expressions.
pub(crate) const fn ten_to(exponent: i32) -> f64 {
    const_powi(10.0, exponent)
}
