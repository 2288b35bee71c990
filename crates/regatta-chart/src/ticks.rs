use serde::{Deserialize, Serialize};

use regatta_format::{format_seconds, format_step_value, step_precision};

use crate::policy::{discipline_step, discipline_unit};

/// Fixed padding added beyond the data extremes on a time axis, in
/// seconds, before rounding outward to the tick grid.
pub const TIME_AXIS_PADDING_SECONDS: f64 = 5.0;

/// Tick step used for time axes. Matches the padding granularity so the
/// padded range rounds outward by at most one tick.
const TIME_TICK_STEP_SECONDS: f64 = 5.0;

/// What the plotted values measure, which decides axis direction, tick
/// step and label rendering.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ValueSemantics {
    /// Canonical elapsed seconds; lower is better, so the axis is
    /// value-reversed.
    TimeSeconds,
    /// A named test discipline; step and unit come from the policy table
    /// and the axis keeps its natural direction.
    Discipline { name: String },
}

/// The value-axis description handed to the presentation adapter.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickScale {
    pub positions: Vec<f64>,
    pub labels: Vec<String>,
    pub reversed: bool,
}

impl TickScale {
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Compute evenly spaced, unit-correct axis ticks for `values`.
///
/// `values` is the non-null plotted column of the filtered dataset; an
/// empty (or all-non-finite) input yields an empty tick set, which the
/// caller reports as "nothing to plot". Tick positions run from the data
/// minimum rounded down to the step grid through the maximum rounded up,
/// inclusive.
pub fn build_ticks(values: &[f64], semantics: &ValueSemantics) -> TickScale {
    let reversed = matches!(semantics, ValueSemantics::TimeSeconds);

    let finite = values.iter().copied().filter(|v| v.is_finite());
    let Some((min, max)) = min_max(finite) else {
        return TickScale {
            positions: Vec::new(),
            labels: Vec::new(),
            reversed,
        };
    };

    match semantics {
        ValueSemantics::TimeSeconds => {
            // Durations are non-negative; padding must not push the grid
            // below zero.
            let lo = (min - TIME_AXIS_PADDING_SECONDS).max(0.0);
            let hi = max + TIME_AXIS_PADDING_SECONDS;
            let positions = step_grid(lo, hi, TIME_TICK_STEP_SECONDS);
            let labels = positions.iter().map(|p| format_seconds(*p)).collect();
            TickScale {
                positions,
                labels,
                reversed,
            }
        }
        ValueSemantics::Discipline { name } => {
            let step = discipline_step(name, min, max);
            let unit = discipline_unit(name);
            let positions = step_grid(min, max, step);
            let labels = positions
                .iter()
                .map(|p| format_step_value(*p, step, unit))
                .collect();
            TickScale {
                positions,
                labels,
                reversed,
            }
        }
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((min, max)) => Some((min.min(v), max.max(v))),
    })
}

/// Inclusive tick positions from `floor(lo/step)*step` through
/// `ceil(hi/step)*step`.
///
/// Positions are computed as integer multiples of the step and snapped to
/// the step's decimal precision, so a 0.1 grid yields 1.2, not
/// 1.2000000000000002.
fn step_grid(lo: f64, hi: f64, step: f64) -> Vec<f64> {
    debug_assert!(step > 0.0);
    let scale = 10f64.powi(step_precision(step) as i32);
    let first = (lo / step).floor() as i64;
    let last = (hi / step).ceil() as i64;
    (first..=last)
        .map(|k| ((k as f64 * step) * scale).round() / scale)
        .collect()
}
