//! Fixed-width, unit-scaled number formatting.
//!
//! Renders a quantity into exactly `width` visible columns: a magnitude
//! scaled by the largest power of the base that still fits in `width - 1`
//! columns, followed by a one-character unit suffix. Used by report tables
//! where columns must stay aligned regardless of magnitude.

use thiserror::Error;

use crate::terminal::colors::{self, Color};

/// Unit suffixes by scaling power. Index 0 is the blank "no scaling" suffix.
const UNITS: [char; 7] = [' ', 'k', 'M', 'G', 'T', 'P', 'E'];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// A magnitude plus a one-character suffix needs at least two columns.
    #[error("width {0} leaves no room for a magnitude and a unit suffix")]
    WidthTooSmall(usize),
}

/// The base a quantity is scaled by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitBase {
    /// Powers of 1000, for dimensionless quantities.
    Decimal,
    /// Powers of 1024, for byte sizes and rates.
    Binary,
}

impl UnitBase {
    pub fn factor(self) -> u64 {
        match self {
            UnitBase::Decimal => 1000,
            UnitBase::Binary => 1024,
        }
    }
}

/// Formats `n` to fit into `width` visible columns, substituting a unit
/// suffix for the scaling power used.
///
/// The magnitude is truncated, not rounded. When truncation would leave a
/// dangling decimal point in the last column, the point is dropped and the
/// magnitude padded with a leading space instead.
///
/// With `colored`, the magnitude is bolded and rendered bright yellow
/// (bright black for a zero value) and the suffix bold bright black; the
/// byte length then exceeds `width`, but the visible width still matches.
pub fn format_units(
    n: u64,
    width: usize,
    colored: bool,
    base: UnitBase,
) -> Result<String, FormatError> {
    if width < 2 {
        return Err(FormatError::WidthTooSmall(width));
    }
    let digits = width - 1;
    let factor = base.factor();

    // Scale up until the integer part fits. The suffix table ends at exa;
    // stop there rather than walking past it.
    let mut unit = 0;
    while unit + 1 < UNITS.len() && decimal_digits(n / factor.pow(unit as u32)) > digits {
        unit += 1;
    }

    let formatted = if unit > 0 {
        let scaled = n as f64 / (factor as f64).powi(unit as i32);
        let mut magnitude: String = format!("{scaled:.6}").chars().take(digits).collect();
        if magnitude.ends_with('.') {
            magnitude.pop();
            magnitude.insert(0, ' ');
        }
        format!("{magnitude}{}", UNITS[unit])
    } else {
        format!("{n:>digits$}{}", UNITS[0])
    };

    if colored {
        let (magnitude, suffix) = formatted.split_at(formatted.len() - 1);
        let color = if n == 0 { Color::Black } else { Color::Yellow };
        Ok(format!(
            "{}{}",
            colors::bold(&colors::colorize(magnitude, color, false)),
            colors::bold(&colors::colorize(suffix, Color::Black, false))
        ))
    } else {
        Ok(formatted)
    }
}

/// Formats a dimensionless quantity (base 1000).
pub fn format_dimless(n: u64, width: usize, colored: bool) -> Result<String, FormatError> {
    format_units(n, width, colored, UnitBase::Decimal)
}

/// Formats a byte size or rate (base 1024).
pub fn format_bytes(n: u64, width: usize, colored: bool) -> Result<String, FormatError> {
    format_units(n, width, colored, UnitBase::Binary)
}

fn decimal_digits(mut n: u64) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_value_is_right_justified_with_blank_suffix() {
        assert_eq!(format_dimless(999, 5, false).unwrap(), " 999 ");
        assert_eq!(format_dimless(0, 4, false).unwrap(), "  0 ");
    }

    #[test]
    fn value_filling_the_magnitude_columns_is_not_scaled() {
        // 4 magnitude columns hold 4 digits, so neither input scales.
        assert_eq!(format_dimless(1_000_000, 5, false).unwrap(), "1000k");
        assert_eq!(format_bytes(1024, 5, false).unwrap(), "1024 ");
    }

    #[test]
    fn scaled_value_is_truncated_not_rounded() {
        // 1999/1000 = 1.999, truncated to "1.9" rather than rounded to "2.0"
        assert_eq!(format_dimless(1999, 4, false).unwrap(), "1.9k");
    }

    #[test]
    fn dangling_decimal_point_becomes_leading_space() {
        // 1_000_000 / 1024 = 976.5625 -> "976." -> " 976"
        assert_eq!(format_bytes(1_000_000, 5, false).unwrap(), " 976k");
    }

    #[test]
    fn bases_diverge_for_the_same_input() {
        assert_eq!(format_dimless(2000, 4, false).unwrap(), "2.0k");
        assert_eq!(format_bytes(2000, 4, false).unwrap(), "1.9k");
    }

    #[test]
    fn megascale_uses_m_suffix() {
        assert_eq!(format_dimless(1_000_000, 4, false).unwrap(), "1.0M");
        assert_eq!(format_bytes(1 << 20, 4, false).unwrap(), "1.0M");
    }

    #[test]
    fn huge_value_stops_at_exa() {
        let out = format_dimless(u64::MAX, 2, false).unwrap();
        assert!(out.ends_with('E'), "expected exa suffix, got {out:?}");
    }

    #[test]
    fn width_below_two_is_rejected() {
        assert_eq!(
            format_dimless(42, 1, false),
            Err(FormatError::WidthTooSmall(1))
        );
        assert_eq!(
            format_bytes(42, 0, true),
            Err(FormatError::WidthTooSmall(0))
        );
    }

    #[test]
    fn zero_takes_the_black_branch() {
        let out = format_dimless(0, 4, true).unwrap();
        assert!(out.contains("\x1b[1;30m"), "missing black magnitude: {out:?}");
        assert!(!out.contains("\x1b[1;33m"), "unexpected yellow: {out:?}");
    }

    #[test]
    fn nonzero_takes_the_yellow_branch() {
        let out = format_dimless(123, 4, true).unwrap();
        assert!(out.contains("\x1b[1;33m"), "missing yellow magnitude: {out:?}");
    }

    #[test]
    fn colored_output_splits_magnitude_and_suffix() {
        let magnitude = colors::bold(&colors::colorize("1.9", Color::Yellow, false));
        let suffix = colors::bold(&colors::colorize("k", Color::Black, false));
        assert_eq!(
            format_dimless(1999, 4, true).unwrap(),
            format!("{magnitude}{suffix}")
        );
    }
}
