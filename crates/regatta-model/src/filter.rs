use serde::{Deserialize, Serialize};

use crate::record::{Dataset, ResultRecord};

/// Accepted values for one filterable attribute: everything, or an
/// explicit value set.
///
/// The presentation layer decides whether its widget restricts to one
/// value or many; both arrive here as the same shape ([`Selection::single`]
/// is just a one-element set).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "values")]
pub enum Selection<T> {
    #[default]
    All,
    Only(Vec<T>),
}

impl<T: PartialEq> Selection<T> {
    pub fn only(values: impl IntoIterator<Item = T>) -> Self {
        Selection::Only(values.into_iter().collect())
    }

    pub fn single(value: T) -> Self {
        Selection::Only(vec![value])
    }

    pub fn admits(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(values) => values.contains(value),
        }
    }
}

/// The conjunction of per-attribute selections driving one filter pass.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Selections {
    #[serde(default)]
    pub competitors: Selection<String>,
    #[serde(default)]
    pub competitions: Selection<String>,
    /// Distance (results) or discipline (test battery).
    #[serde(default)]
    pub events: Selection<String>,
    #[serde(default)]
    pub years: Selection<i32>,
}

impl Selections {
    fn admits(&self, record: &ResultRecord) -> bool {
        self.competitors.admits(&record.competitor)
            && self.competitions.admits(&record.competition)
            && self.events.admits(&record.event)
            && admits_year(&self.years, record.year)
    }
}

// A record with an unparseable year can only pass an unrestricted year
// selection; it has no value to be a member of any explicit set.
fn admits_year(selection: &Selection<i32>, year: Option<i32>) -> bool {
    match (selection, year) {
        (Selection::All, _) => true,
        (Selection::Only(years), Some(year)) => years.contains(&year),
        (Selection::Only(_), None) => false,
    }
}

/// Select the subset of `dataset` admitted by every configured attribute.
///
/// Pure and repeatable: records are never mutated, input order is
/// preserved, and an empty result is a valid outcome rather than an
/// error.
pub fn filter(dataset: &Dataset, selections: &Selections) -> Dataset {
    Dataset {
        kind: dataset.kind,
        records: dataset
            .records
            .iter()
            .filter(|record| selections.admits(record))
            .cloned()
            .collect(),
    }
}
