//! Compile-time checked physical quantities with SI unit formatting.
//!
//! `dimq` is the user-facing crate in this workspace. It re-exports the full API from `dimq-core` together with the
//! predefined units, their constants and constructors, and the metric prefixes.
//!
//! The core idea is: a value is always a `Quantity<D>`, where `D` lists the exponents of the seven SI base quantities
//! as type-level integers. Arithmetic computes the dimension of its result at compile time, and the magnitude is a
//! plain `f64` in coherent SI units (`f32` through `Unit::of`).
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible dimensions (you can't add metres to seconds).
//! - Derives the dimension of products, quotients and integer powers without declaring each one.
//! - Renders any quantity with SI symbols: `9.81 m/s²`, `3 m·kg/s²`, `2 N`, `5 s⁻¹`.
//!
//! # What this crate does not try to solve
//!
//! - Display in non-coherent units: `kilometers(5.0)` prints as `5000 m`.
//! - Rational exponents, affine temperature scales, logarithmic units.
//! - Exact arithmetic: quantities are backed by floating point.
//!
//! # Quick start
//!
//! ```rust
//! use dimq::{kilograms, meters, seconds, Newton, Force};
//!
//! let a = meters(9.81) / seconds(1.0).p2();
//! assert_eq!(a.to_string(), "9.81 m/s²");
//!
//! let w: Force = (kilograms(2.0) * a).with_format::<Newton>();
//! assert_eq!(w.to_string(), "19.62 N");
//! ```
//!
//! Literals with prefixes and powers:
//!
//! ```rust
//! use dimq::{Kilo, Meter, Pow, Unit};
//! use dimq::typenum::{P2, N1};
//!
//! assert_eq!(Meter::of(10.0).value(), 10.0);
//! assert_eq!(Pow::<Kilo<Meter>, P2>::of(1.0).value(), 1_000_000.0);
//! assert_eq!(Pow::<Meter, N1>::of(4.0).to_string(), "4 m⁻¹");
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail,E0308
//! use dimq::{meters, seconds, Length, Time};
//!
//! let d: Length = meters(1.0);
//! let t: Time = seconds(1.0);
//! let _ = d + t; // cannot add different dimensions
//! ```
//!
//! ```compile_fail,E0308
//! use dimq::{meters, seconds, Length};
//!
//! let _: Length = meters(1.0) * seconds(1.0); // m·s is not a length
//! ```
//!
//! ```compile_fail,E0308
//! use dimq::{meters, seconds};
//!
//! let _ = meters(1.0).within(seconds(0.1), &meters(1.0)); // epsilon must share the dimension
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support in `dimq-core`.
//! - `serde`: enables `serde` support for `Quantity`; plain serialization is the raw magnitude only, and
//!   `serde_with_unit` adds the unit string.
//! - `mathematical-space`: named formats (`N`, `J`, `Hz`, `N·m`) use U+205F between magnitude and symbol.
//!
//! Disable default features for `no_std`:
//!
//! ```toml
//! [dependencies]
//! dimq = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result` from its core operations. Arithmetic is
//! plain floating-point computation; it does not panic on its own, and NaN and infinities propagate per IEEE-754.
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub use dimq_core::*;

/// Derive macros used by `dimq-core` to define unit markers and named formats.
///
/// They expand in terms of `crate::Unit`, `crate::UnitFormat` and `crate::format`, so they are intended for use
/// inside `dimq-core` (or crates exposing the same crate-root API). Most users should not need them.
pub use dimq_derive::{Unit, UnitFormat};

pub use dimq_core::prefix::*;
pub use dimq_core::units::*;

/// Type-level integers used as dimension exponents and power arguments.
pub use typenum;
