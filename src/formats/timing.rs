//! Recognition of `HH:MM:SS<sep>mmm --> HH:MM:SS<sep>mmm` timing pairs.
//!
//! SRT separates milliseconds with a comma, WebVTT with a dot. Both need
//! exactly two digits for hours, minutes and seconds and three for the
//! milliseconds. The pair may sit anywhere in the line; the leftmost match wins.

use crate::timestamp;

/// Width of `HH:MM:SS,mmm`
const TIMESTAMP_LEN: usize = 12;

const ARROW: &[u8] = b" --> ";

/// Millisecond separator for SubRip
pub const SRT_SEPARATOR: u8 = b',';

/// Millisecond separator for WebVTT
pub const VTT_SEPARATOR: u8 = b'.';

/// Find the leftmost timing pair in `line`, returning (start, end) in seconds
pub fn find_timing_pair(line: &str, separator: u8) -> Option<(f64, f64)> {
    let bytes = line.as_bytes();
    (0..bytes.len()).find_map(|offset| match_timing_pair(&bytes[offset..], separator))
}

fn match_timing_pair(bytes: &[u8], separator: u8) -> Option<(f64, f64)> {
    let (start, rest) = match_timestamp(bytes, separator)?;
    let rest = rest.strip_prefix(ARROW)?;
    let (end, _) = match_timestamp(rest, separator)?;
    Some((start, end))
}

fn match_timestamp(bytes: &[u8], separator: u8) -> Option<(f64, &[u8])> {
    if bytes.len() < TIMESTAMP_LEN {
        return None;
    }
    let (head, rest) = bytes.split_at(TIMESTAMP_LEN);

    if head[2] != b':' || head[5] != b':' || head[8] != separator {
        return None;
    }

    let hours = digits(&head[0..2])?;
    let minutes = digits(&head[3..5])?;
    let seconds = digits(&head[6..8])?;
    let millis = digits(&head[9..12])?;

    Some((timestamp::to_seconds(hours, minutes, seconds, millis), rest))
}

fn digits(bytes: &[u8]) -> Option<u32> {
    bytes.iter().try_fold(0u32, |acc, b| {
        b.is_ascii_digit().then(|| acc * 10 + u32::from(b - b'0'))
    })
}
