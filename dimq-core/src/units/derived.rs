//! Derived units and their formats.
//!
//! [`Newton`], [`Joule`] and [`Hertz`] are named units: each is its own formatter and prints its symbol after the
//! magnitude. Area, volume and moment have no symbol of their own; their formatters render a composite expression
//! instead.
//!
//! ```rust
//! use dimq_core::units::{kilograms, meters, seconds, Newton};
//! use dimq_core::Force;
//!
//! let f: Force = (kilograms(2.0) * meters(3.0) / seconds(1.0) / seconds(1.0)).with_format::<Newton>();
//! assert_eq!(f.to_string(), "6 N");
//! ```

use crate::prefix::{Kilo, Mega};
use crate::{dim, Quantity, Unit};
use dimq_derive::{Unit, UnitFormat};

// ─────────────────────────────────────────────────────────────────────────────
// Named units
// ─────────────────────────────────────────────────────────────────────────────

/// Newton, `kg·m/s²`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Force, ratio = 1.0, symbol = "N")]
pub struct Newton;

/// Joule, `N·m`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Energy, ratio = 1.0, symbol = "J")]
pub struct Joule;

/// Hertz, `s⁻¹`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Unit)]
#[unit(dimension = dim::Frequency, ratio = 1.0, symbol = "Hz")]
pub struct Hertz;

/// Kilonewton. Prints in newtons.
pub type Kilonewton = Kilo<Newton>;
/// Kilojoule. Prints in joules.
pub type Kilojoule = Kilo<Joule>;
/// Kilohertz. Prints in hertz.
pub type Kilohertz = Kilo<Hertz>;
/// Megahertz. Prints in hertz.
pub type Megahertz = Mega<Hertz>;

// ─────────────────────────────────────────────────────────────────────────────
// Composite formats
// ─────────────────────────────────────────────────────────────────────────────

/// Prints areas as `m²`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, UnitFormat)]
#[format(dimension = dim::Area, composite = "m[p2]")]
pub struct SquareMeters;

/// Prints volumes as `m³`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, UnitFormat)]
#[format(dimension = dim::Volume, composite = "m[p3]")]
pub struct CubicMeters;

/// Prints moments of force as `N·m`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, UnitFormat)]
#[format(dimension = dim::Energy, composite = "N*m")]
pub struct NewtonMeters;

// ─────────────────────────────────────────────────────────────────────────────
// Quantity aliases
// ─────────────────────────────────────────────────────────────────────────────

/// An area, printed as `m²`.
pub type Area = Quantity<dim::Area, f64, SquareMeters>;
/// A volume, printed as `m³`.
pub type Volume = Quantity<dim::Volume, f64, CubicMeters>;
/// A velocity.
pub type Velocity = Quantity<dim::Velocity, f64>;
/// An acceleration.
pub type Acceleration = Quantity<dim::Acceleration, f64>;
/// A force, printed in newtons.
pub type Force = Quantity<dim::Force, f64, Newton>;
/// An energy, printed in joules.
pub type Energy = Quantity<dim::Energy, f64, Joule>;
/// A frequency, printed in hertz.
pub type Frequency = Quantity<dim::Frequency, f64, Hertz>;
/// A moment of force. Same dimension as [`Energy`], printed as `N·m`.
pub type Moment = Quantity<dim::Energy, f64, NewtonMeters>;

// ─────────────────────────────────────────────────────────────────────────────
// Constants and constructors
// ─────────────────────────────────────────────────────────────────────────────

/// One newton.
pub const N: Force = Newton::ONE;
/// One kilonewton.
pub const KN: Force = Kilonewton::ONE;
/// One joule.
pub const J: Energy = Joule::ONE;
/// One kilojoule.
pub const KJ: Energy = Kilojoule::ONE;
/// One hertz.
pub const HZ: Frequency = Hertz::ONE;
/// One kilohertz.
pub const KHZ: Frequency = Kilohertz::ONE;

crate::unit_constructors! {
    /// Force in newtons.
    newtons => Newton,
    /// Force in kilonewtons.
    kilonewtons => Kilonewton,
    /// Energy in joules.
    joules => Joule,
    /// Energy in kilojoules.
    kilojoules => Kilojoule,
    /// Frequency in hertz.
    hertz => Hertz,
    /// Frequency in kilohertz.
    kilohertz => Kilohertz,
    /// Frequency in megahertz.
    megahertz => Megahertz,
}
