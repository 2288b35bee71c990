/// Parse a plain numeric literal, accepting either `.` or `,` as the
/// decimal separator.
///
/// Uploads mix both styles (`5.2` next to `5,2`); normalizing the comma
/// first means `"5,2".parse()` failures never leak to callers. Anything
/// that still fails to parse, or parses to a non-finite value, is `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim().replace(',', ".");
    if text.is_empty() {
        return None;
    }
    let value: f64 = text.parse().ok()?;
    value.is_finite().then_some(value)
}

/// Decimal places needed to render exact multiples of `step`.
///
/// `10.0` and `1.0` need none, `0.1` needs one. Capped at four digits so
/// float noise in a step value cannot blow up label width.
pub fn step_precision(step: f64) -> usize {
    for digits in 0..4 {
        let scaled = step * 10f64.powi(digits as i32);
        if (scaled - scaled.round()).abs() < 1e-9 {
            return digits;
        }
    }
    4
}

/// Render an axis tick value at its step's precision, with an optional
/// unit suffix.
pub fn format_step_value(value: f64, step: f64, unit: Option<&str>) -> String {
    let text = format!("{value:.precision$}", precision = step_precision(step));
    match unit {
        Some(unit) => format!("{text} {unit}"),
        None => text,
    }
}

/// Build the display string for a non-time result: the raw cell text with
/// the discipline's unit label appended when one is known.
pub fn display_result(raw: &str, unit: Option<&str>) -> String {
    let raw = raw.trim();
    match unit {
        Some(unit) if !raw.is_empty() => format!("{raw} {unit}"),
        _ => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_precision_matches_step_granularity() {
        assert_eq!(step_precision(10.0), 0);
        assert_eq!(step_precision(1.0), 0);
        assert_eq!(step_precision(5.0), 0);
        assert_eq!(step_precision(0.1), 1);
    }

    #[test]
    fn comma_and_dot_decimals_parse_alike() {
        assert_eq!(parse_number("5,2"), Some(5.2));
        assert_eq!(parse_number("5.2"), Some(5.2));
        assert_eq!(parse_number("  310 "), Some(310.0));
        assert_eq!(parse_number("5,2,3"), None);
    }
}
