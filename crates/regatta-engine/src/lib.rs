//! The per-session upload → view pipeline.
//!
//! One upload produces one normalized [`Dataset`]; every filter change
//! re-runs the pure view pipeline (filter → tick synthesis) over it. The
//! resulting [`ChartView`] is everything a presentation adapter needs:
//! the rows to tabulate and plot, the value-axis ticks, and a typed
//! outcome distinguishing "ready" from the two reportable empty states.

mod pipeline;
mod session;

pub use crate::pipeline::{build_view, ChartView, ViewOutcome};
pub use crate::session::Session;
