use serde::{Deserialize, Serialize};

/// A raw cell as handed over by the upload layer.
///
/// CSV fields arrive as `Text`; workbook cells keep their typed form, which
/// matters for time columns: a cell typed as a time in the sheet reaches us
/// as a `Number` holding a day fraction, not as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering used for display columns and filter values.
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Text(text) => text.trim().to_string(),
            CellValue::Number(value) => {
                // Render integral floats without a trailing ".0" so a year
                // cell read from a workbook compares equal to its CSV twin.
                if value.fract() == 0.0 && value.abs() < 1e15 {
                    format!("{}", *value as i64)
                } else {
                    value.to_string()
                }
            }
            CellValue::Bool(value) => value.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}
