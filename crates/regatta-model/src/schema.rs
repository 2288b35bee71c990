use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{normalize_header, RawTable};

/// The declared shape of an uploaded dataset.
///
/// A dataset is either a table of timed race results or a multi-discipline
/// test battery with one numeric result per row. The kind is chosen per
/// upload (by sheet name, or explicitly for CSV), never per record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatasetKind {
    Results,
    MultiDisciplineTest,
}

impl DatasetKind {
    /// Canonical column names this kind requires, post-aliasing.
    pub fn required_columns(self) -> &'static [&'static str] {
        match self {
            DatasetKind::Results => &[
                "competitor",
                "year",
                "competition",
                "race",
                "distance",
                "time",
                "place",
            ],
            DatasetKind::MultiDisciplineTest => &[
                "competitor",
                "year",
                "competition",
                "race",
                "discipline",
                "result",
                "place",
            ],
        }
    }

    /// Resolve a workbook sheet name to a dataset kind.
    ///
    /// Matching is case-insensitive on the trimmed name; any sheet that
    /// resolves to `None` is not a valid selection.
    pub fn from_sheet_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "results" => Some(DatasetKind::Results),
            "multi-discipline-test" => Some(DatasetKind::MultiDisciplineTest),
            _ => None,
        }
    }
}

/// Header alias table, evaluated in order against normalized header names.
///
/// The original club uploads carry German headers; both vocabularies map
/// onto one canonical schema so the rest of the pipeline only ever sees
/// canonical names.
const HEADER_ALIASES: &[(&str, &str)] = &[
    ("sportler", "competitor"),
    ("wettkampfjahr", "year"),
    ("wettkampf", "competition"),
    ("rennen", "race"),
    ("strecke", "distance"),
    ("zeit", "time"),
    ("platz", "place"),
    ("disziplin", "discipline"),
    ("ergebnis", "result"),
];

/// Map a header name onto its canonical schema name.
///
/// Input is normalized (trimmed, lowercased) first; names with no alias
/// entry pass through unchanged.
pub fn canonical_column_name(name: &str) -> String {
    let normalized = normalize_header(name);
    for (alias, canonical) in HEADER_ALIASES {
        if *alias == normalized {
            return (*canonical).to_string();
        }
    }
    normalized
}

#[derive(Debug, Error)]
pub enum SchemaError {
    /// The declared kind's required columns are not all present. Carries
    /// both the missing names and the columns actually found so the error
    /// can be surfaced to the user as-is.
    #[error("missing required column(s) {missing:?}; found columns {found:?}")]
    MissingColumns {
        kind: DatasetKind,
        missing: Vec<String>,
        found: Vec<String>,
    },
}

/// Resolve each required canonical column of `kind` to its index in
/// `table`, or fail naming every column that is absent.
pub(crate) fn resolve_required_columns(
    table: &RawTable,
    kind: DatasetKind,
) -> Result<Vec<usize>, SchemaError> {
    let canonical: Vec<String> = table
        .columns()
        .iter()
        .map(|c| canonical_column_name(c))
        .collect();

    let mut indices = Vec::with_capacity(kind.required_columns().len());
    let mut missing = Vec::new();
    for required in kind.required_columns() {
        match canonical.iter().position(|c| c == required) {
            Some(index) => indices.push(index),
            None => missing.push((*required).to_string()),
        }
    }

    if missing.is_empty() {
        Ok(indices)
    } else {
        Err(SchemaError::MissingColumns {
            kind,
            missing,
            found: table.columns().to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_names_resolve_case_insensitively() {
        assert_eq!(
            DatasetKind::from_sheet_name(" Results "),
            Some(DatasetKind::Results)
        );
        assert_eq!(
            DatasetKind::from_sheet_name("MULTI-DISCIPLINE-TEST"),
            Some(DatasetKind::MultiDisciplineTest)
        );
        assert_eq!(DatasetKind::from_sheet_name("Sheet1"), None);
    }

    #[test]
    fn german_headers_alias_to_canonical_names() {
        assert_eq!(canonical_column_name("Sportler"), "competitor");
        assert_eq!(canonical_column_name(" ZEIT "), "time");
        assert_eq!(canonical_column_name("discipline"), "discipline");
        assert_eq!(canonical_column_name("notes"), "notes");
    }
}
