use log::debug;

use crate::formats::markup;
use crate::formats::timing::{find_timing_pair, SRT_SEPARATOR};
use crate::subtitle_processor::Cue;

// @module: SubRip parser

/// Parse SRT content into cues, in file order.
///
/// Blocks are separated by blank lines. A block needs an index line, a
/// timing line and at least one text line; anything else is dropped.
pub fn parse_srt(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();

    for (block_num, lines) in split_blocks(content).into_iter().enumerate() {
        if lines.len() < 3 {
            debug!("Skipping SRT block {}: only {} line(s)", block_num + 1, lines.len());
            continue;
        }

        // Line 1 is the sequence number and carries nothing we keep
        let Some((start, end)) = find_timing_pair(lines[1], SRT_SEPARATOR) else {
            debug!("Skipping SRT block {}: no timing in '{}'", block_num + 1, lines[1]);
            continue;
        };

        let text = markup::strip_tags(&lines[2..].join("\n"));

        match Cue::new_validated(start, end, &text) {
            Ok(cue) => cues.push(cue),
            Err(e) => debug!("Skipping SRT block {}: {}", block_num + 1, e),
        }
    }

    cues
}

/// Group non-blank lines into blocks, trimming the outer edges of each block
fn split_blocks(content: &str) -> Vec<Vec<&str>> {
    let mut blocks: Vec<Vec<&str>> = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in content.trim().lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line.strip_suffix('\r').unwrap_or(line));
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    for block in &mut blocks {
        if let Some(first) = block.first_mut() {
            *first = first.trim_start();
        }
        if let Some(last) = block.last_mut() {
            *last = last.trim_end();
        }
    }

    blocks
}
