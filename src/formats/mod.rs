/*!
 * Subtitle format parsers and the dispatcher that selects between them.
 *
 * The format tag is resolved once at the boundary (usually from a file
 * extension) into a closed [`SubtitleFormat`] value. [`parse`] then maps
 * that value to exactly one parser.
 *
 * Every parser is total: malformed blocks are dropped one by one and
 * parsing always yields a (possibly empty) [`CueTrack`].
 */

pub mod ass;
pub mod markup;
pub mod srt;
mod timing;
pub mod vtt;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::SubtitleError;
use crate::subtitle_processor::CueTrack;

/// Subtitle formats understood by the parsers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubtitleFormat {
    /// SubRip (.srt)
    Srt,
    /// WebVTT (.vtt)
    Vtt,
    /// Advanced SubStation Alpha and SubStation Alpha (.ass, .ssa)
    Ass,
}

impl SubtitleFormat {
    /// All formats, in dispatch order
    pub const ALL: [SubtitleFormat; 3] = [Self::Srt, Self::Vtt, Self::Ass];

    /// Map a file extension (without the dot, any case) to a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "srt" => Some(Self::Srt),
            "vtt" => Some(Self::Vtt),
            "ass" | "ssa" => Some(Self::Ass),
            _ => None,
        }
    }

    /// Resolve the format of a file from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SubtitleError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();

        Self::from_extension(&extension)
            .ok_or_else(|| SubtitleError::UnsupportedFormat(path.display().to_string()))
    }

    /// Extensions that map to this format
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Srt => &["srt"],
            Self::Vtt => &["vtt"],
            Self::Ass => &["ass", "ssa"],
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Srt => "SubRip",
            Self::Vtt => "WebVTT",
            Self::Ass => "ASS/SSA",
        }
    }
}

impl fmt::Display for SubtitleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extensions()[0])
    }
}

impl FromStr for SubtitleFormat {
    type Err = SubtitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_extension(s).ok_or_else(|| SubtitleError::UnsupportedFormat(s.to_string()))
    }
}

/// Parse subtitle text with the parser matching `format`
pub fn parse(text: &str, format: SubtitleFormat) -> CueTrack {
    let cues = match format {
        SubtitleFormat::Srt => srt::parse_srt(text),
        SubtitleFormat::Vtt => vtt::parse_vtt(text),
        SubtitleFormat::Ass => ass::parse_ass(text),
    };

    debug!("Parsed {} cue(s) as {}", cues.len(), format.display_name());
    CueTrack::new(cues)
}

/// Parse subtitle text given a free-form format tag such as an extension
pub fn parse_tagged(text: &str, tag: &str) -> Result<CueTrack, SubtitleError> {
    let format = tag.parse::<SubtitleFormat>()?;
    Ok(parse(text, format))
}
