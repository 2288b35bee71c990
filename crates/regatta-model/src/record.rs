use serde::{Deserialize, Serialize};

use crate::schema::DatasetKind;

/// One row of a performance table, post-normalization.
///
/// Derived fields are schema-dependent: `seconds`/`display_time` are only
/// populated for [`DatasetKind::Results`], `result`/`unit` only for
/// [`DatasetKind::MultiDisciplineTest`]. A derived field is `None` whenever
/// its raw cell could not be parsed; such rows stay in the table view but
/// are skipped by axis-range computation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub competitor: String,
    /// Competition year. The source column is free text in practice, so an
    /// unparseable year is kept as `None` alongside its raw rendering.
    pub year: Option<i32>,
    pub year_raw: String,
    pub competition: String,
    /// Race round label, free text ("Heat 2", "Semifinal", "Endlauf").
    pub race: String,
    /// Distance for timed results, discipline name for test batteries.
    pub event: String,
    /// The raw time-or-result cell, as display text.
    pub raw_value: String,
    /// Place/rank as-is; display-only, never validated.
    pub place: String,
    /// Canonical elapsed seconds, derived from the time column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<f64>,
    /// `M:SS,HH` rendering of `seconds`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_time: Option<String>,
    /// Numeric result for non-time disciplines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<f64>,
    /// Measurement unit label for `result`, when the discipline has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
}

impl ResultRecord {
    /// The value plotted on the chart's value axis for this record.
    pub fn plotted_value(&self, kind: DatasetKind) -> Option<f64> {
        match kind {
            DatasetKind::Results => self.seconds,
            DatasetKind::MultiDisciplineTest => self.result,
        }
    }

    /// Display rendering of the plotted cell: the `M:SS,HH` form when the
    /// time parsed, otherwise the raw cell text with the discipline's unit
    /// appended when one is known.
    pub fn display_value(&self) -> String {
        match &self.display_time {
            Some(time) => time.clone(),
            None => regatta_format::display_result(&self.raw_value, self.unit.as_deref()),
        }
    }
}

/// The in-memory dataset for one session: an ordered record sequence plus
/// its declared kind.
///
/// Built once per upload, then read-only; a new upload fully replaces it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub kind: DatasetKind,
    pub records: Vec<ResultRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Non-null plotted values, in record order. Rows whose plotted cell
    /// failed to parse are skipped here but still appear in the table view.
    pub fn plotted_values(&self) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|r| r.plotted_value(self.kind))
            .collect()
    }
}
