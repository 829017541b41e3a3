//! ANSI color and style decoration.
//!
//! The escape sequences emitted here are a contract with whatever renders
//! the report downstream: bright foreground is `\x1b[1;<30+n>m`, dark is
//! `\x1b[0;<30+n>m`, and every decorated span ends with [`RESET_SEQ`].
//! Consumers writing to a non-ANSI surface strip or interpret these
//! themselves.

/// Resets all colors and styles.
pub const RESET_SEQ: &str = "\x1b[0m";
/// Bold / bright intensity.
pub const BOLD_SEQ: &str = "\x1b[1m";
/// Underline.
pub const UNDERLINE_SEQ: &str = "\x1b[4m";

/// The standard ANSI 8-color palette.
///
/// Foreground codes are `30 + discriminant`, so an out-of-palette index is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    Gray = 7,
}

impl Color {
    /// ANSI foreground code for this palette entry.
    pub fn fg(self) -> u8 {
        30 + self as u8
    }
}

/// Wraps `msg` in escape sequences selecting the requested foreground color.
///
/// `dark` selects normal intensity instead of the default bright/bold form.
pub fn colorize(msg: &str, color: Color, dark: bool) -> String {
    let intensity = if dark { 0 } else { 1 };
    format!("\x1b[{};{}m{}{}", intensity, color.fg(), msg, RESET_SEQ)
}

/// Wraps `msg` in escape sequences to make it appear bold.
pub fn bold(msg: &str) -> String {
    format!("{BOLD_SEQ}{msg}{RESET_SEQ}")
}

/// Wraps `msg` in escape sequences to make it appear underlined.
pub fn underline(msg: &str) -> String {
    format!("{UNDERLINE_SEQ}{msg}{RESET_SEQ}")
}
