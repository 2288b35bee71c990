use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// An untyped table as produced by the upload layer: one header row plus
/// data rows, before any schema is applied.
///
/// Header names are normalized (trimmed, lowercased) at construction; every
/// lookup elsewhere in the workspace happens on the normalized names. Rows
/// are padded to the header width so per-column access never bounds-checks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

/// Header normalization applied once at table construction.
pub(crate) fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

impl RawTable {
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<CellValue>>) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| normalize_header(c)).collect();
        for row in &mut rows {
            if row.len() < columns.len() {
                row.resize(columns.len(), CellValue::Empty);
            }
        }
        Self { columns, rows }
    }

    /// Normalized column names, in input order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = normalize_header(name);
        self.columns.iter().position(|c| *c == name)
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_lowercased() {
        let table = RawTable::new(vec!["  Sportler ".into(), "ZEIT".into()], Vec::new());
        assert_eq!(table.columns(), ["sportler", "zeit"]);
        assert_eq!(table.column_index(" Zeit "), Some(1));
    }

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let table = RawTable::new(
            vec!["a".into(), "b".into()],
            vec![vec![CellValue::Text("x".into())]],
        );
        assert_eq!(table.rows()[0].len(), 2);
        assert_eq!(table.rows()[0][1], CellValue::Empty);
    }
}
