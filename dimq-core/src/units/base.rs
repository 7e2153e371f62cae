//! SI base units.
//!
//! Every base quantity is stored in its coherent SI unit. Mass is the only one whose named unit is not coherent:
//! [`Gram`] has `RATIO == 1e-3`, so [`Kilogram`] (`Kilo<Gram>`) is exactly one.
//!
//! ```rust
//! use dimq_core::units::{grams, kilograms, kilometers, KM};
//!
//! assert_eq!(kilometers(5.0).value(), 5000.0);
//! assert_eq!(KM.value(), 1000.0);
//! assert_eq!(kilograms(2.0).value(), 2.0);
//! assert_eq!(grams(500.0).value(), 0.5);
//! ```

use crate::prefix::{Centi, Kilo, Micro, Milli, Nano};
use crate::{dim, Quantity, Unit};
use dimq_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Unit markers
// ─────────────────────────────────────────────────────────────────────────────

/// Metre.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Length, ratio = 1.0)]
pub struct Meter;

/// Gram. One thousandth of the coherent mass unit.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Mass, ratio = 1e-3)]
pub struct Gram;

/// Second.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Time, ratio = 1.0)]
pub struct Second;

/// Ampere.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Current, ratio = 1.0)]
pub struct Ampere;

/// Kelvin.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Temperature, ratio = 1.0)]
pub struct Kelvin;

/// Mole.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Amount, ratio = 1.0)]
pub struct Mole;

/// Candela.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Luminosity, ratio = 1.0)]
pub struct Candela;

/// Kilometre.
pub type Kilometer = Kilo<Meter>;
/// Centimetre.
pub type Centimeter = Centi<Meter>;
/// Millimetre.
pub type Millimeter = Milli<Meter>;
/// Micrometre.
pub type Micrometer = Micro<Meter>;
/// Nanometre.
pub type Nanometer = Nano<Meter>;
/// Kilogram, the coherent mass unit.
pub type Kilogram = Kilo<Gram>;
/// Milligram.
pub type Milligram = Milli<Gram>;
/// Millisecond.
pub type Millisecond = Milli<Second>;
/// Microsecond.
pub type Microsecond = Micro<Second>;
/// Nanosecond.
pub type Nanosecond = Nano<Second>;
/// Milliampere.
pub type Milliampere = Milli<Ampere>;

// ─────────────────────────────────────────────────────────────────────────────
// Quantity aliases
// ─────────────────────────────────────────────────────────────────────────────

/// A quantity with every exponent zero.
pub type Dimensionless = Quantity<dim::Dimensionless, f64>;
/// A length.
pub type Length = Quantity<dim::Length, f64>;
/// A mass.
pub type Mass = Quantity<dim::Mass, f64>;
/// A duration.
pub type Time = Quantity<dim::Time, f64>;
/// An electric current.
pub type Current = Quantity<dim::Current, f64>;
/// A thermodynamic temperature.
pub type Temperature = Quantity<dim::Temperature, f64>;
/// An amount of substance.
pub type Amount = Quantity<dim::Amount, f64>;
/// A luminous intensity.
pub type Luminosity = Quantity<dim::Luminosity, f64>;

// ─────────────────────────────────────────────────────────────────────────────
// Constants and constructors
// ─────────────────────────────────────────────────────────────────────────────

/// One metre.
pub const M: Length = Meter::ONE;
/// One kilometre.
pub const KM: Length = Kilometer::ONE;
/// One centimetre.
pub const CM: Length = Centimeter::ONE;
/// One millimetre.
pub const MM: Length = Millimeter::ONE;
/// One gram.
pub const G: Mass = Gram::ONE;
/// One kilogram.
pub const KG: Mass = Kilogram::ONE;
/// One second.
pub const S: Time = Second::ONE;
/// One millisecond.
pub const MS: Time = Millisecond::ONE;
/// One ampere.
pub const A: Current = Ampere::ONE;
/// One kelvin.
pub const K: Temperature = Kelvin::ONE;
/// One mole.
pub const MOL: Amount = Mole::ONE;
/// One candela.
pub const CD: Luminosity = Candela::ONE;

crate::unit_constructors! {
    /// Length in metres.
    meters => Meter,
    /// Length in kilometres.
    kilometers => Kilometer,
    /// Length in centimetres.
    centimeters => Centimeter,
    /// Length in millimetres.
    millimeters => Millimeter,
    /// Length in micrometres.
    micrometers => Micrometer,
    /// Length in nanometres.
    nanometers => Nanometer,
    /// Mass in grams.
    grams => Gram,
    /// Mass in kilograms.
    kilograms => Kilogram,
    /// Mass in milligrams.
    milligrams => Milligram,
    /// Time in seconds.
    seconds => Second,
    /// Time in milliseconds.
    milliseconds => Millisecond,
    /// Time in microseconds.
    microseconds => Microsecond,
    /// Time in nanoseconds.
    nanoseconds => Nanosecond,
    /// Current in amperes.
    amperes => Ampere,
    /// Current in milliamperes.
    milliamperes => Milliampere,
    /// Temperature in kelvins.
    kelvins => Kelvin,
    /// Amount of substance in moles.
    moles => Mole,
    /// Luminous intensity in candelas.
    candelas => Candela,
}
