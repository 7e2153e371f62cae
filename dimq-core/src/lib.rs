//! Core type system for compile-time dimensional analysis.
//!
//! `dimq-core` models a physical quantity as a number tagged with its dimension vector, the exponents of the seven
//! SI base quantities (length, mass, time, current, temperature, amount, luminosity):
//!
//! - A *dimension* is a [`Dim`] of seven [`typenum`] integers; common ones are named in [`dim`].
//! - A value tagged with a dimension is a [`Quantity<D, T, F>`], backed by `T` (`f64` by default) holding the
//!   magnitude in coherent SI units, with a formatter `F` deciding how it prints.
//! - A *unit* is a zero-sized marker implementing [`Unit`]: a dimension, a formatter and the coherent value of one
//!   unit. Metric [`prefix`]es and integer powers ([`Pow`]) compose with any unit.
//!
//! Most users should depend on `dimq` (the facade crate) unless they need direct access to these primitives.
//!
//! # What this crate solves
//!
//! - Adding, subtracting or comparing quantities of different dimensions is a compile error.
//! - Multiplication, division and integer powers compute the result dimension at compile time.
//! - Zero runtime overhead: a quantity has the layout of its magnitude.
//! - SI rendering of any dimension (`m·kg/s²`, `m/(s·A)`, `s⁻¹`) and named formats (`N`, `J`, `Hz`, `N·m`).
//!
//! # What this crate does not try to solve
//!
//! - Conversion to non-coherent display units beyond the formatters provided; magnitudes are always coherent SI.
//! - Affine quantities (degrees Celsius) or logarithmic units.
//! - Rational exponents.
//!
//! # Quick start
//!
//! ```rust
//! use dimq_core::units::{kilograms, meters, seconds};
//!
//! let d = meters(100.0);
//! let t = seconds(20.0);
//! let v = d / t;
//! assert_eq!(v.value(), 5.0);
//! assert_eq!(v.to_string(), "5 m/s");
//!
//! let f = kilograms(2.0) * v / t;
//! assert_eq!(f.to_string(), "0.5 m·kg/s²");
//! ```
//!
//! Dimension mismatches are rejected by the compiler:
//!
//! ```compile_fail,E0308
//! use dimq_core::{Length, Mass};
//! let d: Length = Length::new(1.0);
//! let m: Mass = Mass::new(1.0);
//! let _ = d < m;
//! ```
//!
//! # `no_std`
//!
//! Disable default features to build `dimq-core` without `std`:
//!
//! ```toml
//! [dependencies]
//! dimq-core = { version = "0.1.0", default-features = false }
//! ```
//!
//! When `std` is disabled, floating-point math that isn't available in `core` is provided via `libm`.
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support.
//! - `serde`: enables `serde` support for `Quantity`; plain serialization is the raw magnitude, and
//!   [`serde_with_unit`] keeps the unit string alongside it.
//! - `mathematical-space`: named formats separate magnitude and symbol with U+205F MEDIUM MATHEMATICAL SPACE.
//!
//! # Logging
//!
//! The crate logs through the [`log`] facade and never installs a logger. The only message is a warning when a
//! composite unit expression has an unterminated exponent token.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Arithmetic is
//! plain floating-point computation; it does not panic on its own, and NaN and infinities propagate per IEEE-754.
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(not(feature = "std"))]
extern crate libm;

#[cfg(feature = "serde")]
extern crate alloc;

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

mod dimension;
pub mod format;
mod macros;
pub mod prefix;
mod quantity;
mod real;
mod unit;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::{dim, Dim, DimDiv, DimMul, DimPow, Dimension, DivDim, MulDim, PowDim};
pub use format::{DefaultFormat, UnitFormat, UnitSymbol};
pub use prefix::Prefix;
pub use quantity::Quantity;
pub use real::{Promote, Real};
pub use unit::{Pow, Unit};

#[cfg(feature = "serde")]
pub use quantity::serde_with_unit;

// ─────────────────────────────────────────────────────────────────────────────
// Predefined units
// ─────────────────────────────────────────────────────────────────────────────

/// Predefined units, constants and constructors.
///
/// These live in `dimq-core` so the derives can implement the crate-root traits for them.
pub mod units;

pub use units::{
    Acceleration, Amount, Area, Current, Dimensionless, Energy, Force, Frequency, Length, Luminosity, Mass, Moment,
    Temperature, Time, Velocity, Volume,
};
