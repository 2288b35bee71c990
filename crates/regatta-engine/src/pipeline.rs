use serde::{Deserialize, Serialize};

use regatta_chart::{build_ticks, TickScale, ValueSemantics};
use regatta_model::{filter, stage_sort_key, Dataset, DatasetKind, ResultRecord, Selections};

/// What a view run produced, beyond the data itself.
///
/// Both empty states are ordinary outcomes the adapter reports to the
/// user, not errors: a selection can legitimately match nothing, and
/// matched rows can all lack a parseable plotted value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewOutcome {
    /// Rows matched and at least one has a plottable value.
    Ready,
    /// No rows matched the current selections.
    NoRowsMatched,
    /// Rows matched, but none carries a parseable plotted value.
    NothingToPlot,
}

/// The render-ready result of one pipeline pass.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartView {
    pub kind: DatasetKind,
    /// Matched rows in progression order: year, then competitive stage,
    /// then race label.
    pub rows: Vec<ResultRecord>,
    pub ticks: TickScale,
    pub outcome: ViewOutcome,
}

/// Run the pure view pipeline: filter the dataset, order the rows for
/// progression display, and synthesize the value axis.
///
/// Filtering itself never reorders; the progression sort applies only to
/// the view's row list. Rows whose plotted cell failed to parse stay in
/// `rows` (the table still shows them) but contribute nothing to the tick
/// range.
pub fn build_view(dataset: &Dataset, selections: &Selections) -> ChartView {
    let filtered = filter(dataset, selections);
    let values = filtered.plotted_values();

    let outcome = if filtered.is_empty() {
        ViewOutcome::NoRowsMatched
    } else if values.is_empty() {
        ViewOutcome::NothingToPlot
    } else {
        ViewOutcome::Ready
    };

    let semantics = value_semantics(&filtered);
    let ticks = build_ticks(&values, &semantics);

    let mut rows = filtered.records;
    rows.sort_by_key(progression_key);

    ChartView {
        kind: dataset.kind,
        rows,
        ticks,
        outcome,
    }
}

fn value_semantics(dataset: &Dataset) -> ValueSemantics {
    match dataset.kind {
        DatasetKind::Results => ValueSemantics::TimeSeconds,
        // Charting mixes badly across disciplines; the leading record's
        // discipline sets the scale. Sensible selections restrict to one.
        DatasetKind::MultiDisciplineTest => ValueSemantics::Discipline {
            name: dataset
                .records
                .first()
                .map(|record| record.event.clone())
                .unwrap_or_default(),
        },
    }
}

// Records without a usable year sort after all dated ones; the stable
// sort keeps their relative input order.
fn progression_key(record: &ResultRecord) -> (i32, (u8, String)) {
    (
        record.year.unwrap_or(i32::MAX),
        stage_sort_key(&record.race),
    )
}
