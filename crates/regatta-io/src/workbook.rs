use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use regatta_model::{CellValue, DatasetKind, RawTable};

use crate::UploadError;

/// An opened workbook plus its sheet inventory.
pub struct WorkbookUpload {
    workbook: Sheets<BufReader<File>>,
    sheet_names: Vec<String>,
}

impl WorkbookUpload {
    /// Open a workbook with format auto-detection (`.xlsx`, `.xls`,
    /// `.ods`, ...).
    pub fn open(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let workbook = open_workbook_auto(path)?;
        let sheet_names = workbook.sheet_names().to_owned();
        Ok(Self {
            workbook,
            sheet_names,
        })
    }

    /// Every sheet in the workbook, selectable or not.
    pub fn sheet_names(&self) -> &[String] {
        &self.sheet_names
    }

    /// The sheets offered for selection, with the dataset kind each
    /// declares.
    pub fn selectable_sheets(&self) -> Vec<(String, DatasetKind)> {
        self.sheet_names
            .iter()
            .filter_map(|name| DatasetKind::from_sheet_name(name).map(|kind| (name.clone(), kind)))
            .collect()
    }

    /// Read one sheet as a raw table.
    ///
    /// Fails for sheets that do not declare a dataset kind; no table is
    /// constructed in that case.
    pub fn read_sheet(&mut self, name: &str) -> Result<(RawTable, DatasetKind), UploadError> {
        let kind = resolve_sheet_selection(name, &self.sheet_names)?;
        let range = self.workbook.worksheet_range(name)?;
        Ok((range_to_table(&range), kind))
    }
}

/// Check a sheet selection against the supported dataset sheets; the
/// error lists the sheets that would have been accepted instead.
pub fn resolve_sheet_selection(
    name: &str,
    available: &[String],
) -> Result<DatasetKind, UploadError> {
    DatasetKind::from_sheet_name(name).ok_or_else(|| UploadError::UnsupportedSheet {
        name: name.to_string(),
        selectable: available
            .iter()
            .filter(|sheet| DatasetKind::from_sheet_name(sheet).is_some())
            .cloned()
            .collect(),
    })
}

fn range_to_table(range: &Range<Data>) -> RawTable {
    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(row) => row
            .iter()
            .map(|cell| cell_value(cell).display_text())
            .collect(),
        None => Vec::new(),
    };
    let data = rows
        .map(|row| row.iter().map(cell_value).collect())
        .collect();
    RawTable::new(headers, data)
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        // A time-formatted cell reaches us as a date-time serial; keep the
        // day-fraction number for the time parser.
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        // Cell-level spreadsheet errors degrade to unparseable cells.
        Data::Error(_) => CellValue::Empty,
    }
}
