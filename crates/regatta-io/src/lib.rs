//! Upload ingestion: files in, [`RawTable`]s out.
//!
//! CSV bytes go straight to the model's importer (delimiter sniffing
//! included). Workbooks go through `calamine`; only sheets whose name
//! resolves to a dataset kind (`results` / `multi-discipline-test`,
//! case-insensitive) are valid selections, everything else is rejected
//! before any dataset is constructed.

mod workbook;

use std::path::Path;

use thiserror::Error;

use regatta_model::import::{import_csv, CsvImportError, CsvOptions};
use regatta_model::RawTable;

pub use crate::workbook::{resolve_sheet_selection, WorkbookUpload};

#[derive(Debug, Error)]
pub enum UploadError {
    /// The selected sheet is not one of the supported dataset sheets.
    /// Carries the names that would have been accepted.
    #[error("sheet {name:?} is not a supported dataset; selectable sheets: {selectable:?}")]
    UnsupportedSheet {
        name: String,
        selectable: Vec<String>,
    },
    #[error("failed to read workbook: {0}")]
    Workbook(#[from] calamine::Error),
    #[error(transparent)]
    Csv(#[from] CsvImportError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Import CSV bytes with delimiter sniffing and encoding fallback.
pub fn read_csv(input: &[u8]) -> Result<RawTable, UploadError> {
    Ok(import_csv(input, CsvOptions::default())?)
}

/// Import a CSV file from disk.
pub fn read_csv_file(path: impl AsRef<Path>) -> Result<RawTable, UploadError> {
    let bytes = std::fs::read(path)?;
    read_csv(&bytes)
}
