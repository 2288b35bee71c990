const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a spreadsheet time serial (a fraction of a day) into elapsed
/// seconds.
///
/// Spreadsheets store a cell like `1:02,5` typed as a time as the numeric
/// value `0.000723...`; reading such a workbook hands us the float, not the
/// text. Non-finite and negative serials are not durations and yield `None`.
pub fn seconds_from_day_fraction(serial: f64) -> Option<f64> {
    (serial.is_finite() && serial >= 0.0).then(|| serial * SECONDS_PER_DAY)
}

/// Parse a clock-style text literal into canonical seconds.
///
/// Accepted shapes, after trimming and normalizing `,` to `.`:
/// - `M:SS[.ff]` — minutes and seconds
/// - `H:MM:SS[.ff]` — hours, minutes and seconds
/// - a plain non-negative decimal, treated as already-canonical seconds
///
/// Anything else (`"abc"`, `""`, `"1:2:3:4"`, negative values) yields
/// `None`. Bad cells degrade to "unplottable", they are never fatal.
pub fn parse_clock_time(raw: &str) -> Option<f64> {
    let text = raw.trim().replace(',', ".");
    if text.is_empty() {
        return None;
    }

    let segments: Vec<&str> = text.split(':').collect();
    match segments.as_slice() {
        [seconds] => parse_seconds_segment(seconds),
        [minutes, seconds] => {
            let minutes: u32 = minutes.trim().parse().ok()?;
            let seconds = parse_seconds_segment(seconds)?;
            Some(f64::from(minutes) * 60.0 + seconds)
        }
        [hours, minutes, seconds] => {
            let hours: u32 = hours.trim().parse().ok()?;
            let minutes: u32 = minutes.trim().parse().ok()?;
            let seconds = parse_seconds_segment(seconds)?;
            Some(f64::from(hours) * 3_600.0 + f64::from(minutes) * 60.0 + seconds)
        }
        _ => None,
    }
}

fn parse_seconds_segment(segment: &str) -> Option<f64> {
    let value: f64 = segment.trim().parse().ok()?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

/// Render canonical seconds as `M:SS,HH` (minutes, zero-padded seconds,
/// zero-padded hundredths).
///
/// Rounding works on total hundredths, so a fractional part that rounds up
/// at an integer boundary carries into the seconds (and minutes) fields:
/// `61.999` renders as `1:02,00`, never as `1:01,100`. This keeps every
/// output a valid `M:SS,HH` literal and keeps
/// `parse_clock_time(format_seconds(x))` within 0.01 s of `x`.
pub fn format_seconds(seconds: f64) -> String {
    let total_hundredths = (seconds * 100.0).round().max(0.0) as i64;
    let minutes = total_hundredths / 6_000;
    let secs = (total_hundredths % 6_000) / 100;
    let hundredths = total_hundredths % 100;
    format!("{minutes}:{secs:02},{hundredths:02}")
}
