use std::fmt;
use anyhow::{Result, anyhow};
use serde::Serialize;
use crate::timestamp;

// @module: Normalized cue representation shared by every format

// @struct: Single timed caption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cue {
    // @field: Start time in seconds
    pub start: f64,

    // @field: End time in seconds
    pub end: f64,

    // @field: Text lines, markup removed
    pub lines: Vec<String>,
}

impl Cue {
    /// Creates a cue without validation - used by tests and external consumers
    pub fn new(start: f64, end: f64, text: &str) -> Self {
        Cue {
            start,
            end,
            lines: text.split('\n').map(str::to_string).collect(),
        }
    }

    // @creates: Validated cue
    // @validates: Finite, non-negative bounds and end >= start
    pub fn new_validated(start: f64, end: f64, text: &str) -> Result<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(anyhow!("Non-finite cue bounds: {} --> {}", start, end));
        }

        if start < 0.0 {
            return Err(anyhow!("Negative cue start: {}", start));
        }

        if end < start {
            return Err(anyhow!(
                "Invalid time range: end time {} < start time {}",
                end, start
            ));
        }

        Ok(Self::new(start, end, text))
    }

    /// Cue text with lines joined by newlines
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Whether `time` falls inside the cue; both bounds are inclusive
    pub fn contains(&self, time: f64) -> bool {
        self.start <= time && time <= self.end
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} --> {}", timestamp::format_srt(self.start), timestamp::format_srt(self.end))?;
        writeln!(f, "{}", self.text())
    }
}

/// Ordered cues parsed from one subtitle file.
///
/// Cues keep their order of appearance in the source. The track is not
/// sorted by start time and may contain overlapping cues.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct CueTrack {
    cues: Vec<Cue>,
}

impl CueTrack {
    /// Create a track from cues in source order
    pub fn new(cues: Vec<Cue>) -> Self {
        CueTrack { cues }
    }

    /// Track with no cues; resolves nothing
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cues(&self) -> &[Cue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cue> {
        self.cues.iter()
    }

    /// Render the track as SubRip text, numbering cues from 1
    pub fn to_srt(&self) -> String {
        let mut output = String::new();
        for (i, cue) in self.cues.iter().enumerate() {
            output.push_str(&format!("{}\n{}\n", i + 1, cue));
        }
        output
    }

    /// Render the track as WebVTT text
    pub fn to_vtt(&self) -> String {
        let mut output = String::from("WEBVTT\n\n");
        for cue in &self.cues {
            output.push_str(&format!(
                "{} --> {}\n{}\n\n",
                timestamp::format_vtt(cue.start),
                timestamp::format_vtt(cue.end),
                cue.text()
            ));
        }
        output
    }
}

impl<'a> IntoIterator for &'a CueTrack {
    type Item = &'a Cue;
    type IntoIter = std::slice::Iter<'a, Cue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

impl fmt::Display for CueTrack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Cue Track")?;
        writeln!(f, "Entries: {}", self.cues.len())?;
        if let (Some(first), Some(last)) = (self.cues.first(), self.cues.last()) {
            writeln!(f, "Span: {} - {}", timestamp::format_srt(first.start), timestamp::format_srt(last.end))?;
        }
        Ok(())
    }
}
