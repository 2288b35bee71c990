//! Value-axis synthesis for performance charts.
//!
//! Given the plotted value range of a filtered dataset and its measurement
//! semantics, this crate computes evenly spaced tick positions, their
//! human-readable labels, and the axis direction. Race times draw on a
//! reversed axis (lower is better); test-discipline results keep the
//! natural direction and take their tick step and unit from an ordered
//! per-discipline policy table.

mod policy;
mod ticks;

pub use crate::policy::{discipline_step, discipline_unit};
pub use crate::ticks::{build_ticks, TickScale, ValueSemantics, TIME_AXIS_PADDING_SECONDS};
