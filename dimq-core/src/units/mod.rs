//! Predefined units, grouped by how they are defined.
//!
//! ## Modules
//!
//! - [`base`]: the seven SI base units, their prefixed variants and the matching quantity aliases.
//! - [`derived`]: named derived units (newton, joule, hertz), composite formats (`m²`, `m³`, `N·m`) and the
//!   derived quantity aliases.
//!
//! Both modules are glob re-exported here, so `dimq_core::units::{meters, Newton, KM}` works.

pub mod base;
pub mod derived;

pub use base::*;
pub use derived::*;
