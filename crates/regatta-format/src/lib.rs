//! Race-time and numeric-literal formatting.
//!
//! This crate provides the two literal layers the rest of the workspace
//! builds on:
//! - [`clock`] converts heterogeneous raw time cells (spreadsheet
//!   day-fraction serials, `M:SS` / `H:MM:SS` strings with comma or dot
//!   decimals) into canonical seconds and renders them back as `M:SS,HH`.
//! - [`number`] parses plain numeric literals in either decimal-separator
//!   style and renders axis tick values at a step's precision.
//!
//! All parsers here are best-effort: malformed input degrades to `None`,
//! never to an error.

mod clock;
mod number;

pub use crate::clock::{format_seconds, parse_clock_time, seconds_from_day_fraction};
pub use crate::number::{display_result, format_step_value, parse_number, step_precision};
