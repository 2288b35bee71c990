use regatta_model::{normalize, Dataset, DatasetKind, RawTable, SchemaError, Selections};

use crate::pipeline::{build_view, ChartView};

/// One user session: at most one normalized dataset at a time.
///
/// Each upload fully replaces the previous dataset; a failed upload
/// leaves the session unchanged (no partial dataset is ever installed).
/// Views are pure reads over the installed dataset, so re-filtering never
/// re-normalizes.
#[derive(Clone, Debug, Default)]
pub struct Session {
    dataset: Option<Dataset>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize an upload under the declared kind and install it as the
    /// session dataset.
    pub fn load(&mut self, table: &RawTable, kind: DatasetKind) -> Result<&Dataset, SchemaError> {
        let dataset = normalize(table, kind)?;
        Ok(self.dataset.insert(dataset))
    }

    pub fn dataset(&self) -> Option<&Dataset> {
        self.dataset.as_ref()
    }

    /// Build the chart view for the current selections, or `None` when
    /// nothing has been uploaded yet.
    pub fn view(&self, selections: &Selections) -> Option<ChartView> {
        self.dataset
            .as_ref()
            .map(|dataset| build_view(dataset, selections))
    }
}
