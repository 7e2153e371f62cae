//! Macros for declaring unit constructors.

/// Declares constructor functions that build a quantity from a number expressed in a given unit.
///
/// Each entry `name => Unit` expands to `pub fn name(value: f64)` forwarding to [`Unit::of`](crate::Unit::of), so
/// the stored magnitude is coherent. Quantities in another representation come from `Unit::of` directly.
///
/// ```rust
/// use dimq_core::prefix::Milli;
/// use dimq_core::units::Ampere;
///
/// dimq_core::unit_constructors! {
///     /// Milliamperes.
///     milliamps => Milli<Ampere>,
/// }
///
/// assert_eq!(milliamps(250.0).value(), 0.25);
/// ```
#[macro_export]
macro_rules! unit_constructors {
    ($( $(#[$meta:meta])* $name:ident => $unit:ty ),+ $(,)?) => {
        $(
            $(#[$meta])*
            #[inline]
            pub fn $name(
                value: f64,
            ) -> $crate::Quantity<<$unit as $crate::Unit>::Dim, f64, <$unit as $crate::Unit>::Format> {
                <$unit as $crate::Unit>::of(value)
            }
        )+
    };
}
