//! CSV upload import.
//!
//! Turns raw CSV bytes into a [`RawTable`] without applying any schema.
//! Fields stay text; typed derivation (times, years, results) is the
//! normalizer's job. The reader tolerates what club-exported CSV actually
//! looks like: `;` or `,` delimiters, a UTF-8 BOM, and the odd
//! Windows-1252 byte in an otherwise UTF-8 file.

use std::borrow::Cow;

use csv::ByteRecord;
use encoding_rs::WINDOWS_1252;
use thiserror::Error;

use crate::table::RawTable;
use crate::value::CellValue;

#[derive(Clone, Copy, Debug)]
pub struct CsvOptions {
    /// Field delimiter; `None` sniffs `;` vs `,` from the first line.
    pub delimiter: Option<u8>,
    /// How to decode raw CSV bytes into text fields.
    pub encoding: CsvTextEncoding,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            encoding: CsvTextEncoding::Auto,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CsvTextEncoding {
    /// Attempt to decode as UTF-8; if a field contains invalid UTF-8, fall
    /// back to Windows-1252. This matches common spreadsheet-export
    /// behavior on Windows.
    Auto,
    /// Decode as UTF-8 and reject invalid byte sequences.
    Utf8,
    /// Decode as Windows-1252 (aka CP-1252).
    Windows1252,
}

#[derive(Debug, Error)]
pub enum CsvImportError {
    #[error("csv input was empty")]
    EmptyInput,
    #[error("csv parse error at row {row}: {reason}")]
    Parse { row: u64, reason: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Pick the delimiter by counting candidates in the first line.
///
/// Club exports are typically semicolon-delimited (German locale), so a
/// tie goes to `;`.
pub fn sniff_delimiter(input: &[u8]) -> u8 {
    let first_line = match input.iter().position(|b| *b == b'\n') {
        Some(end) => &input[..end],
        None => input,
    };
    let semicolons = first_line.iter().filter(|b| **b == b';').count();
    let commas = first_line.iter().filter(|b| **b == b',').count();
    if semicolons >= commas {
        b';'
    } else {
        b','
    }
}

/// Import CSV bytes into a [`RawTable`]: first record is the header row,
/// every other record a data row.
pub fn import_csv(input: &[u8], options: CsvOptions) -> Result<RawTable, CsvImportError> {
    let delimiter = options.delimiter.unwrap_or_else(|| sniff_delimiter(input));
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        // Headers are handled manually so row numbers stay consistent.
        .has_headers(false)
        // Accept rows with varying column counts.
        .flexible(true)
        .from_reader(input);

    let mut record = ByteRecord::new();
    let mut record_index: u64 = 0;

    let has_first = reader
        .read_byte_record(&mut record)
        .map_err(|e| map_csv_error(e, record_index + 1))?;
    if !has_first {
        return Err(CsvImportError::EmptyInput);
    }
    record_index += 1;

    let mut headers = decode_record_to_strings(&record, record_index, options.encoding)?;
    let mut column_count = headers.len();

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    loop {
        record.clear();
        match reader.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {
                record_index += 1;
                let fields = decode_record_to_strings(&record, record_index, options.encoding)?;
                column_count = column_count.max(fields.len());
                rows.push(
                    fields
                        .into_iter()
                        .map(|field| {
                            if field.trim().is_empty() {
                                CellValue::Empty
                            } else {
                                CellValue::Text(field)
                            }
                        })
                        .collect(),
                );
            }
            Err(e) => return Err(map_csv_error(e, record_index + 1)),
        }
    }

    // A data row wider than the header row gets placeholder column names,
    // so no field is silently dropped.
    if headers.len() < column_count {
        headers.extend((headers.len()..column_count).map(|i| format!("Column{}", i + 1)));
    }

    Ok(RawTable::new(headers, rows))
}

fn decode_record_to_strings(
    record: &ByteRecord,
    row: u64,
    encoding: CsvTextEncoding,
) -> Result<Vec<String>, CsvImportError> {
    let mut out = Vec::with_capacity(record.len());
    for (idx, field) in record.iter().enumerate() {
        let s = decode_field(field, row, idx, encoding)?;
        out.push(s.into_owned());
    }
    Ok(out)
}

fn decode_field<'a>(
    field: &'a [u8],
    row: u64,
    column: usize,
    encoding: CsvTextEncoding,
) -> Result<Cow<'a, str>, CsvImportError> {
    // Handle a UTF-8 BOM at the start of the file; spreadsheet-exported
    // CSVs commonly carry one.
    let field = if row == 1 && column == 0 && field.starts_with(&[0xEF, 0xBB, 0xBF]) {
        &field[3..]
    } else {
        field
    };

    match encoding {
        CsvTextEncoding::Utf8 => std::str::from_utf8(field)
            .map(Cow::Borrowed)
            .map_err(|e| CsvImportError::Parse {
                row,
                reason: format!("invalid UTF-8: {e}"),
            }),
        CsvTextEncoding::Windows1252 => {
            let (cow, _, _) = WINDOWS_1252.decode(field);
            Ok(cow)
        }
        CsvTextEncoding::Auto => match std::str::from_utf8(field) {
            Ok(s) => Ok(Cow::Borrowed(s)),
            Err(_) => {
                let (cow, _, _) = WINDOWS_1252.decode(field);
                Ok(cow)
            }
        },
    }
}

fn map_csv_error(err: csv::Error, fallback_row: u64) -> CsvImportError {
    let reason = err.to_string();
    let pos = err.position().cloned();

    match err.into_kind() {
        csv::ErrorKind::Io(e) => CsvImportError::Io(e),
        _ => {
            let row = pos
                .map(|p| p.record())
                .filter(|r| *r > 0)
                .unwrap_or(fallback_row);
            CsvImportError::Parse { row, reason }
        }
    }
}
