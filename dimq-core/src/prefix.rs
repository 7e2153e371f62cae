//! Metric prefixes.
//!
//! The prefix table is declared once and expands into:
//!
//! - one generic unit marker per prefix (`Kilo<Meter>`, `Milli<Second>`, ...), whose ratio is the wrapped unit's
//!   ratio times `10^exponent`;
//! - the [`Prefix`] enum for working with prefixes as values.
//!
//! ```rust
//! use dimq_core::prefix::{Centi, Kilo, Prefix};
//! use dimq_core::units::Meter;
//! use dimq_core::Unit;
//!
//! assert_eq!(Kilo::<Meter>::of(1.0).value(), 1000.0);
//! assert_eq!(Centi::<Meter>::of(250.0).value(), 2.5);
//! assert_eq!(Prefix::Kilo.of::<Meter, f64>(1.0), Kilo::<Meter>::of(1.0));
//! ```

use crate::real::{ten_to, Real};
use crate::{Quantity, Unit};
use core::marker::PhantomData;

macro_rules! prefixes {
    ($( $(#[$meta:meta])* $name:ident => ($symbol:literal, $exponent:literal) ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[doc = concat!("\n\nScales the wrapped unit by `10^", stringify!($exponent), "` (symbol `", $symbol, "`).")]
            pub struct $name<U>(PhantomData<U>);

            impl<U: Unit> Unit for $name<U> {
                const RATIO: f64 = U::RATIO * ten_to($exponent);
                type Dim = U::Dim;
                type Format = U::Format;
            }
        )+

        /// A metric prefix as a value.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum Prefix {
            $(
                $(#[$meta])*
                $name,
            )+
        }

        impl Prefix {
            /// Every prefix, from the largest scale to the smallest.
            pub const ALL: &'static [Prefix] = &[$(Prefix::$name),+];

            /// Power of ten this prefix stands for.
            pub const fn exponent(self) -> i32 {
                match self {
                    $(Prefix::$name => $exponent,)+
                }
            }

            /// SI symbol (`k`, `m`, `da`, ...).
            pub const fn symbol(self) -> &'static str {
                match self {
                    $(Prefix::$name => $symbol,)+
                }
            }
        }
    };
}

prefixes! {
    /// Tera.
    Tera => ("T", 12),
    /// Giga.
    Giga => ("G", 9),
    /// Mega.
    Mega => ("M", 6),
    /// Kilo.
    Kilo => ("k", 3),
    /// Hecto.
    Hecto => ("h", 2),
    /// Deca.
    Deca => ("da", 1),
    /// Deci.
    Deci => ("d", -1),
    /// Centi.
    Centi => ("c", -2),
    /// Milli.
    Milli => ("m", -3),
    /// Micro.
    Micro => ("u", -6),
    /// Nano.
    Nano => ("n", -9),
    /// Pico.
    Pico => ("p", -12),
}

impl Prefix {
    /// `10^exponent`.
    ///
    /// ```rust
    /// use dimq_core::prefix::Prefix;
    /// assert_eq!(Prefix::Mega.scale(), 1e6);
    /// assert_eq!(Prefix::Milli.scale(), 1e-3);
    /// ```
    pub const fn scale(self) -> f64 {
        ten_to(self.exponent())
    }

    /// Builds a quantity from a number expressed in unit `U` carrying this prefix.
    ///
    /// Produces the same magnitude as the matching generic marker, `Prefix::Kilo.of::<Meter, _>(x)` equals
    /// `Kilo::<Meter>::of(x)`.
    #[inline]
    pub fn of<U: Unit, T: Real>(self, value: T) -> Quantity<U::Dim, T, U::Format> {
        Quantity::new(value * T::from_f64(U::RATIO * self.scale()))
    }
}

impl core::fmt::Display for Prefix {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.symbol())
    }
}
