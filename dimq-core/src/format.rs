//! Text rendering of quantities.
//!
//! Every [`Quantity`](crate::Quantity) carries a formatter type implementing [`UnitFormat`] for its dimension.
//! `Display` writes `<magnitude><separator><unit>`:
//!
//! - [`DefaultFormat`] builds the unit from the dimension vector using SI base symbols
//!   (`m·kg/s²`, `m/(s·A)`, `s⁻¹`, ...).
//! - Named formats (`N`, `J`, `Hz`, `N·m`, ...) are declared with the `Unit` and `UnitFormat` derives and divide
//!   the magnitude by the coherent value of their reference unit before printing it.
//!
//! ```rust
//! use dimq_core::units::{meters, seconds, newtons};
//!
//! assert_eq!(format!("{}", meters(3.0) / seconds(2.0)), "1.5 m/s");
//! assert_eq!(format!("{}", newtons(2.0)), "2 N");
//! ```

use crate::dimension::Dimension;
use crate::real::Real;
use core::fmt::{self, Display, Formatter, Write};
use core::marker::PhantomData;

/// Separator between magnitude and symbol for named formats.
#[cfg(not(feature = "mathematical-space"))]
pub const NAMED_SEPARATOR: &str = " ";

/// Separator between magnitude and symbol for named formats (U+205F MEDIUM MATHEMATICAL SPACE).
#[cfg(feature = "mathematical-space")]
pub const NAMED_SEPARATOR: &str = "\u{205F}";

/// Strategy that renders quantities of dimension `D`.
///
/// Formatters are zero-sized tags; all methods are associated functions.
pub trait UnitFormat<D: Dimension>: 'static {
    /// Coherent value of one displayed unit. The magnitude is divided by it before printing.
    const REFERENCE: f64 = 1.0;

    /// Text between the magnitude and the unit.
    const SEPARATOR: &'static str = " ";

    /// Whether a unit is written at all.
    fn has_unit() -> bool {
        true
    }

    /// Writes the unit text that follows the separator.
    fn write_unit<W: Write>(w: &mut W) -> fmt::Result;
}

// ─────────────────────────────────────────────────────────────────────────────
// Default (dimension-driven) format
// ─────────────────────────────────────────────────────────────────────────────

/// Formatter deriving the unit string from the dimension vector.
///
/// Base symbols are written in canonical order (m, kg, s, A, K, mol, cd):
///
/// - only positive exponents: `m·kg`, `m³`;
/// - only negative exponents: `s⁻¹`, `m⁻¹·s⁻²`;
/// - one negative exponent: `m/s`, `m·kg/s²`;
/// - several negative exponents: `kg/(s²·A)`.
///
/// A dimensionless quantity prints its bare magnitude.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultFormat;

const SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

// Denominator spelling of the amount unit is `mole`, matching the established output of this format.
const DENOMINATOR_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mole", "cd"];

impl<D: Dimension> UnitFormat<D> for DefaultFormat {
    fn has_unit() -> bool {
        !D::IS_DIMENSIONLESS
    }

    fn write_unit<W: Write>(w: &mut W) -> fmt::Result {
        write_base_units(w, D::EXPONENTS)
    }
}

/// Writes the SI base-unit string for a dimension vector, as [`DefaultFormat`] does.
///
/// ```rust
/// let mut s = String::new();
/// dimq_core::format::write_base_units(&mut s, [1, 0, -1, -1, 0, 0, 0]).unwrap();
/// assert_eq!(s, "m/(s·A)");
/// ```
pub fn write_base_units<W: Write>(w: &mut W, exponents: [i32; 7]) -> fmt::Result {
    let positives = exponents.map(|e| e.max(0));
    if positives.iter().all(|&e| e == 0) {
        return write_terms(w, &SYMBOLS, exponents.map(|e| e.min(0)));
    }

    write_terms(w, &SYMBOLS, positives)?;
    let denominator = exponents.map(|e| (-e).max(0));
    match denominator.iter().filter(|&&e| e > 0).count() {
        0 => Ok(()),
        1 => {
            w.write_char('/')?;
            write_terms(w, &DENOMINATOR_SYMBOLS, denominator)
        }
        _ => {
            w.write_str("/(")?;
            write_terms(w, &DENOMINATOR_SYMBOLS, denominator)?;
            w.write_char(')')
        }
    }
}

fn write_terms<W: Write>(w: &mut W, symbols: &[&str; 7], exponents: [i32; 7]) -> fmt::Result {
    let mut first = true;
    for (symbol, exponent) in symbols.iter().zip(exponents) {
        if exponent == 0 {
            continue;
        }
        if !first {
            w.write_char('·')?;
        }
        w.write_str(symbol)?;
        if exponent != 1 {
            write!(Superscript(&mut *w), "{exponent}")?;
        }
        first = false;
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Superscripts and composite expressions
// ─────────────────────────────────────────────────────────────────────────────

/// Superscript glyph for a sign, parenthesis or decimal digit.
///
/// ```rust
/// use dimq_core::format::superscript;
/// assert_eq!(superscript('2'), Some('²'));
/// assert_eq!(superscript('-'), Some('⁻'));
/// assert_eq!(superscript('x'), None);
/// ```
pub const fn superscript(c: char) -> Option<char> {
    Some(match c {
        '(' => '⁽',
        ')' => '⁾',
        '+' => '⁺',
        '-' => '⁻',
        '0' => '⁰',
        '1' => '¹',
        '2' => '²',
        '3' => '³',
        '4' => '⁴',
        '5' => '⁵',
        '6' => '⁶',
        '7' => '⁷',
        '8' => '⁸',
        '9' => '⁹',
        _ => return None,
    })
}

/// Writer adapter that replaces every character by its superscript glyph, dropping unmapped ones.
///
/// ```rust
/// use core::fmt::Write;
/// use dimq_core::format::Superscript;
///
/// let mut s = String::new();
/// write!(Superscript(&mut s), "{}", -12).unwrap();
/// assert_eq!(s, "⁻¹²");
/// ```
pub struct Superscript<'a, W: Write>(pub &'a mut W);

impl<W: Write> Write for Superscript<'_, W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars()
            .filter_map(superscript)
            .try_for_each(|c| self.0.write_char(c))
    }
}

/// Renders a composite unit expression.
///
/// `*` becomes `·`; a bracketed token `[p<digits>]` or `[n<digits>]` becomes a superscript exponent, negative for
/// `n`. The first character inside the brackets is always read as the sign marker. Everything else is copied as is.
/// An unterminated token is logged and ends the output.
///
/// ```rust
/// let mut s = String::new();
/// dimq_core::format::write_composite(&mut s, "kg*m*s[n2]").unwrap();
/// assert_eq!(s, "kg·m·s⁻²");
/// ```
pub fn write_composite<W: Write>(w: &mut W, expression: &str) -> fmt::Result {
    let mut chars = expression.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' => w.write_char('·')?,
            '[' => {
                if chars.next() == Some('n') {
                    w.write_char('⁻')?;
                }
                let mut terminated = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        terminated = true;
                        break;
                    }
                    if let Some(glyph) = superscript(c) {
                        w.write_char(glyph)?;
                    }
                }
                if !terminated {
                    log::warn!("unterminated exponent in unit expression `{expression}`");
                    return Ok(());
                }
            }
            other => w.write_char(other)?,
        }
    }
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Quantity rendering
// ─────────────────────────────────────────────────────────────────────────────

/// Writes a coherent magnitude with formatter `F`: `<value / REFERENCE><SEPARATOR><unit>`.
///
/// A precision requested on `f` applies to the magnitude. Width, fill and alignment apply to the whole text, which
/// is left-aligned by default.
///
/// ```rust
/// use dimq_core::units::meters;
/// assert_eq!(format!("{:>8}|", meters(2.0)), "     2 m|");
/// assert_eq!(format!("{:<6.1}|", meters(2.0)), "2.0 m |");
/// ```
pub fn write_quantity<D, T, F>(f: &mut Formatter<'_>, value: T) -> fmt::Result
where
    D: Dimension,
    T: Real,
    F: UnitFormat<D>,
{
    let shown = if F::REFERENCE == 1.0 {
        value
    } else {
        value / T::from_f64(F::REFERENCE)
    };
    let precision = f.precision();
    let Some(width) = f.width() else {
        return write_body::<D, T, F, _>(f, shown, precision);
    };

    let mut counter = CharCount(0);
    write_body::<D, T, F, _>(&mut counter, shown, precision)?;
    let padding = width.saturating_sub(counter.0);
    let (before, after) = match f.align() {
        Some(fmt::Alignment::Right) => (padding, 0),
        Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
        Some(fmt::Alignment::Left) | None => (0, padding),
    };
    let fill = f.fill();
    for _ in 0..before {
        f.write_char(fill)?;
    }
    write_body::<D, T, F, _>(f, shown, precision)?;
    for _ in 0..after {
        f.write_char(fill)?;
    }
    Ok(())
}

fn write_body<D, T, F, W>(w: &mut W, shown: T, precision: Option<usize>) -> fmt::Result
where
    D: Dimension,
    T: Real,
    F: UnitFormat<D>,
    W: Write,
{
    match precision {
        Some(precision) => write!(w, "{shown:.precision$}")?,
        None => write!(w, "{shown}")?,
    }
    if F::has_unit() {
        w.write_str(F::SEPARATOR)?;
        F::write_unit(w)?;
    }
    Ok(())
}

/// Counts the characters written through it.
struct CharCount(usize);

impl Write for CharCount {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.0 += s.chars().count();
        Ok(())
    }
}

/// `Display` adapter for the unit string of formatter `F` on dimension `D`.
///
/// ```rust
/// use dimq_core::format::{DefaultFormat, UnitSymbol};
/// use dimq_core::dim;
///
/// assert_eq!(UnitSymbol::<dim::Acceleration, DefaultFormat>::new().to_string(), "m/s²");
/// ```
pub struct UnitSymbol<D, F>(PhantomData<(D, F)>);

impl<D: Dimension, F: UnitFormat<D>> UnitSymbol<D, F> {
    /// Creates the adapter.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<D: Dimension, F: UnitFormat<D>> Default for UnitSymbol<D, F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Dimension, F: UnitFormat<D>> Display for UnitSymbol<D, F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if F::has_unit() {
            F::write_unit(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dim;

    fn base_units(exponents: [i32; 7]) -> String {
        let mut s = String::new();
        write_base_units(&mut s, exponents).unwrap();
        s
    }

    fn composite(expression: &str) -> String {
        let mut s = String::new();
        write_composite(&mut s, expression).unwrap();
        s
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Default format
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn single_base_units() {
        assert_eq!(base_units([1, 0, 0, 0, 0, 0, 0]), "m");
        assert_eq!(base_units([0, 1, 0, 0, 0, 0, 0]), "kg");
        assert_eq!(base_units([0, 0, 0, 0, 0, 1, 0]), "mol");
        assert_eq!(base_units([0, 0, 0, 0, 0, 0, 1]), "cd");
    }

    #[test]
    fn positive_exponents_joined_in_canonical_order() {
        assert_eq!(base_units([1, 1, 0, 0, 0, 0, 0]), "m·kg");
        assert_eq!(base_units([3, 0, 0, 0, 0, 0, 0]), "m³");
        assert_eq!(base_units([2, 1, 1, 1, 1, 1, 1]), "m²·kg·s·A·K·mol·cd");
        assert_eq!(base_units([0, 0, 12, 0, 0, 0, 0]), "s¹²");
    }

    #[test]
    fn only_negative_exponents_keep_their_sign() {
        assert_eq!(base_units([0, 0, -1, 0, 0, 0, 0]), "s⁻¹");
        assert_eq!(base_units([-1, 0, -2, 0, 0, 0, 0]), "m⁻¹·s⁻²");
        assert_eq!(base_units([0, 0, 0, 0, 0, -1, 0]), "mol⁻¹");
    }

    #[test]
    fn single_negative_uses_slash() {
        assert_eq!(base_units([1, 0, -1, 0, 0, 0, 0]), "m/s");
        assert_eq!(base_units([1, 1, -2, 0, 0, 0, 0]), "m·kg/s²");
        assert_eq!(base_units([2, 1, -3, 0, 0, 0, 0]), "m²·kg/s³");
    }

    #[test]
    fn several_negatives_use_parentheses() {
        assert_eq!(base_units([1, 0, -1, -1, 0, 0, 0]), "m/(s·A)");
        assert_eq!(base_units([2, 1, -3, -1, 0, 0, 0]), "m²·kg/(s³·A)");
    }

    #[test]
    fn amount_in_denominator_is_spelled_mole() {
        assert_eq!(base_units([0, 1, 0, 0, 0, -1, 0]), "kg/mole");
        assert_eq!(base_units([2, 1, -2, 0, -1, -1, 0]), "m²·kg/(s²·K·mole)");
    }

    #[test]
    fn luminosity_in_denominator() {
        assert_eq!(base_units([0, 0, 0, 0, 0, 0, -1]), "cd⁻¹");
        assert_eq!(base_units([-2, 0, 0, 0, 0, 0, 1]), "cd/m²");
        assert_eq!(base_units([1, 0, 0, 0, 0, 0, -1]), "m/cd");
    }

    #[test]
    fn dimensionless_has_no_unit() {
        assert!(!<DefaultFormat as UnitFormat<dim::Dimensionless>>::has_unit());
        assert_eq!(base_units([0; 7]), "");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Superscripts
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn superscript_covers_digits_signs_and_parentheses() {
        let mapped: String = "()+-0123456789".chars().filter_map(superscript).collect();
        assert_eq!(mapped, "⁽⁾⁺⁻⁰¹²³⁴⁵⁶⁷⁸⁹");
    }

    #[test]
    fn superscript_writer_drops_unmapped() {
        let mut s = String::new();
        write!(Superscript(&mut s), "a1b-2").unwrap();
        assert_eq!(s, "¹⁻²");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Composite expressions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn composite_multiplication_dot() {
        assert_eq!(composite("N*m"), "N·m");
    }

    #[test]
    fn composite_positive_and_negative_exponents() {
        assert_eq!(composite("m[p2]"), "m²");
        assert_eq!(composite("m[p3]"), "m³");
        assert_eq!(composite("s[n1]"), "s⁻¹");
        assert_eq!(composite("kg*m[p2]*s[n2]"), "kg·m²·s⁻²");
    }

    #[test]
    fn composite_first_bracket_char_is_sign_marker() {
        assert_eq!(composite("m[2]"), "m");
        assert_eq!(composite("m[p12]"), "m¹²");
    }

    #[test]
    fn composite_unterminated_token_stops_output() {
        assert_eq!(composite("m[p2"), "m²");
        assert_eq!(composite("m[n"), "m⁻");
        assert_eq!(composite("m["), "m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Width and alignment
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn width_pads_the_whole_quantity() {
        let q = crate::Length::new(2.0);
        assert_eq!(format!("{:>8}", q), "     2 m");
        assert_eq!(format!("{:6}", q), "2 m   ");
        assert_eq!(format!("{:*^9}", q), "***2 m***");
        assert_eq!(format!("{:>9.2}", crate::Length::new(0.5)), "   0.50 m");
    }

    #[test]
    fn width_counts_superscripts_as_single_characters() {
        let a = crate::Acceleration::new(1.0);
        assert_eq!(format!("{:>8}", a), "  1 m/s²");
    }

    #[test]
    fn narrow_width_is_ignored() {
        assert_eq!(format!("{:2}", crate::Length::new(10.0)), "10 m");
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Unit symbol adapter
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn unit_symbol_display() {
        assert_eq!(UnitSymbol::<dim::Velocity, DefaultFormat>::new().to_string(), "m/s");
        assert_eq!(UnitSymbol::<dim::Dimensionless, DefaultFormat>::new().to_string(), "");
    }
}
