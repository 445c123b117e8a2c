use log::debug;

use crate::formats::markup;
use crate::subtitle_processor::Cue;
use crate::timestamp;

// @module: ASS/SSA dialogue parser

/// Prefix of event lines that carry cues
const DIALOGUE_PREFIX: &str = "Dialogue:";

/// Fields before the free-form text: layer/marked, start, end, style, name,
/// margin L/R/V and effect
const TEXT_FIELD_INDEX: usize = 9;

/// Parse ASS/SSA content into cues, one per `Dialogue:` line.
///
/// Script info, styles, comments and every other event type are ignored.
/// Only the timing and text fields are read; styling is dropped.
pub fn parse_ass(content: &str) -> Vec<Cue> {
    let mut cues = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if !line.starts_with(DIALOGUE_PREFIX) {
            continue;
        }
        let line = line.strip_suffix('\r').unwrap_or(line);

        match parse_dialogue_line(line) {
            Ok(cue) => cues.push(cue),
            Err(e) => debug!("Skipping dialogue at line {}: {}", line_num + 1, e),
        }
    }

    cues
}

/// Parse a single `Dialogue:` line
fn parse_dialogue_line(line: &str) -> anyhow::Result<Cue> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() <= TEXT_FIELD_INDEX {
        anyhow::bail!("expected at least {} fields, found {}", TEXT_FIELD_INDEX + 1, fields.len());
    }

    let start = timestamp::ass_to_seconds(fields[1])
        .ok_or_else(|| anyhow::anyhow!("invalid start time '{}'", fields[1]))?;
    let end = timestamp::ass_to_seconds(fields[2])
        .ok_or_else(|| anyhow::anyhow!("invalid end time '{}'", fields[2]))?;

    // Dialogue text may itself contain commas
    let raw_text = fields[TEXT_FIELD_INDEX..].join(",");
    let text = markup::strip_override_blocks(&markup::expand_hard_breaks(&raw_text));

    Cue::new_validated(start, end, &text)
}
