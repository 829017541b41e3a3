//! # mgrd-util
//!
//! Small presentation and environment-detection helpers for the `mgrd`
//! command-line and report-rendering layer.
//!
//! * **[`terminal`]**: ANSI decoration and fixed-width, unit-scaled number
//!   formatting for terminal reports.
//! * **[`config`]**: merging of ordered key-value mappings, later wins.
//! * **[`net`]**: one-time detection of local IPv6 support to pick a
//!   default bind address.
//!
//! Nothing here manages a terminal, a stream, or a logging pipeline; the
//! caller decides where the decorated strings end up.

pub mod config;
pub mod net;
pub mod terminal;
