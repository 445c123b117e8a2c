/*!
 * Timestamp conversion between subtitle notations and seconds.
 *
 * SRT and WebVTT carry millisecond precision in fixed-width fields,
 * ASS/SSA carries centiseconds in a decimal seconds segment.
 */

// @module: Timestamp arithmetic

/// Convert SRT/VTT timestamp fields to seconds
pub fn to_seconds(hours: u32, minutes: u32, seconds: u32, milliseconds: u32) -> f64 {
    f64::from(hours) * 3600.0
        + f64::from(minutes) * 60.0
        + f64::from(seconds)
        + f64::from(milliseconds) / 1000.0
}

/// Convert an ASS/SSA timestamp (`H:MM:SS.ff`) to seconds.
///
/// The seconds segment is parsed as one decimal number, so `1.5`, `01.50`
/// and `01.500` are all accepted. A string that does not split into exactly
/// three colon-delimited parts yields `Some(0.0)`. A part that is not a
/// number yields `None`.
pub fn ass_to_seconds(timestamp: &str) -> Option<f64> {
    let parts: Vec<&str> = timestamp.split(':').collect();
    if parts.len() != 3 {
        return Some(0.0);
    }

    let hours: u32 = parts[0].trim().parse().ok()?;
    let minutes: u32 = parts[1].trim().parse().ok()?;
    let seconds: f64 = parts[2].trim().parse().ok()?;

    Some(f64::from(hours) * 3600.0 + f64::from(minutes) * 60.0 + seconds)
}

/// Split seconds into whole (hours, minutes, seconds, milliseconds), rounding to the millisecond
fn split_millis(seconds: f64) -> (u64, u64, u64, u64) {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    (
        total_ms / 3_600_000,
        (total_ms % 3_600_000) / 60_000,
        (total_ms % 60_000) / 1_000,
        total_ms % 1_000,
    )
}

/// Format seconds as an SRT timestamp (HH:MM:SS,mmm)
pub fn format_srt(seconds: f64) -> String {
    let (h, m, s, ms) = split_millis(seconds);
    format!("{:02}:{:02}:{:02},{:03}", h, m, s, ms)
}

/// Format seconds as a WebVTT timestamp (HH:MM:SS.mmm)
pub fn format_vtt(seconds: f64) -> String {
    let (h, m, s, ms) = split_millis(seconds);
    format!("{:02}:{:02}:{:02}.{:03}", h, m, s, ms)
}

/// Format seconds as a player clock label: `MM:SS`, or `HH:MM:SS` from one hour up
pub fn format_clock(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let whole = seconds.floor() as u64;
    let (hours, minutes, secs) = (whole / 3600, (whole % 3600) / 60, whole % 60);

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Parse a user-supplied time: plain seconds (`12.5`) or colon notation (`0:00:12.50`)
pub fn parse_time_arg(input: &str) -> Option<f64> {
    let input = input.trim();
    if input.contains(':') {
        if input.split(':').count() != 3 {
            return None;
        }
        return ass_to_seconds(input);
    }
    input.parse::<f64>().ok().filter(|s| s.is_finite() && *s >= 0.0)
}
