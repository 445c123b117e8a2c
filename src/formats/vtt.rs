use log::debug;

use crate::formats::markup;
use crate::formats::timing::{find_timing_pair, VTT_SEPARATOR};
use crate::subtitle_processor::Cue;

// @module: WebVTT parser

/// Cue timing delimiter
const TIMING_ARROW: &str = "-->";

/// Parse WebVTT content into cues, in file order.
///
/// Everything before the first timing line (the `WEBVTT` header, `NOTE`
/// and `STYLE` blocks, cue identifiers) is ignored. Each timing line is
/// followed by text lines up to the next blank line.
pub fn parse_vtt(content: &str) -> Vec<Cue> {
    let lines: Vec<&str> = content.lines().collect();
    let mut cues = Vec::new();

    let mut i = lines
        .iter()
        .position(|line| line.contains(TIMING_ARROW))
        .unwrap_or(lines.len());

    while i < lines.len() {
        let line = lines[i].trim();

        if line.contains(TIMING_ARROW) {
            match find_timing_pair(line, VTT_SEPARATOR) {
                Some((start, end)) => {
                    i += 1;
                    let mut text_lines = Vec::new();
                    while i < lines.len() && !lines[i].trim().is_empty() {
                        text_lines.push(lines[i].trim());
                        i += 1;
                    }

                    let text = markup::strip_tags(&text_lines.join("\n"));
                    match Cue::new_validated(start, end, &text) {
                        Ok(cue) => cues.push(cue),
                        Err(e) => debug!("Skipping VTT cue at line {}: {}", i, e),
                    }
                }
                None => debug!("Skipping VTT timing line {}: '{}'", i + 1, line),
            }
        }

        i += 1;
    }

    cues
}
