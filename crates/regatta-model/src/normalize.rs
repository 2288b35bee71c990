use regatta_format::{format_seconds, parse_clock_time, parse_number, seconds_from_day_fraction};

use crate::record::{Dataset, ResultRecord};
use crate::schema::{resolve_required_columns, DatasetKind, SchemaError};
use crate::table::RawTable;
use crate::value::CellValue;

/// Build a [`Dataset`] from a raw table under the declared kind.
///
/// Column presence is the only fatal check: every required canonical
/// column (post-aliasing) must exist, or the error names exactly what is
/// missing and what was found. Cell-level derivation is per row and
/// best-effort — one row's unparseable time or result leaves that row's
/// derived fields `None` and never affects its neighbors.
pub fn normalize(table: &RawTable, kind: DatasetKind) -> Result<Dataset, SchemaError> {
    let indices = resolve_required_columns(table, kind)?;

    // Index layout follows `DatasetKind::required_columns`:
    // competitor, year, competition, race, distance|discipline,
    // time|result, place.
    let mut records = Vec::with_capacity(table.row_count());
    for row in table.rows() {
        let cell = |slot: usize| &row[indices[slot]];

        let event = cell(4).display_text();
        let mut record = ResultRecord {
            competitor: cell(0).display_text(),
            year: parse_year(cell(1)),
            year_raw: cell(1).display_text(),
            competition: cell(2).display_text(),
            race: cell(3).display_text(),
            raw_value: cell(5).display_text(),
            place: cell(6).display_text(),
            event,
            seconds: None,
            display_time: None,
            result: None,
            unit: None,
        };

        match kind {
            DatasetKind::Results => {
                record.seconds = parse_time_cell(cell(5));
                record.display_time = record.seconds.map(format_seconds);
            }
            DatasetKind::MultiDisciplineTest => {
                record.result = parse_result_cell(cell(5));
                record.unit = regatta_chart::discipline_unit(&record.event).map(str::to_string);
            }
        }

        records.push(record);
    }

    Ok(Dataset { kind, records })
}

fn parse_year(cell: &CellValue) -> Option<i32> {
    match cell {
        CellValue::Number(value) if value.fract() == 0.0 => Some(*value as i32),
        CellValue::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_time_cell(cell: &CellValue) -> Option<f64> {
    match cell {
        // Workbook time cells arrive as day-fraction serials.
        CellValue::Number(serial) => seconds_from_day_fraction(*serial),
        CellValue::Text(text) => parse_clock_time(text),
        _ => None,
    }
}

fn parse_result_cell(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Number(value) => value.is_finite().then_some(*value),
        CellValue::Text(text) => parse_number(text),
        _ => None,
    }
}
