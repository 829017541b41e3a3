//! Terminal presentation helpers.
//!
//! * **[`colors`]**: ANSI color and style decoration.
//! * **[`format`]**: fixed-width, unit-scaled number formatting.

pub mod colors;
pub mod format;
