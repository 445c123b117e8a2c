/*!
 * Tests for format tags and parser dispatch
 */

use std::path::Path;
use subplay::errors::SubtitleError;
use subplay::formats::{self, SubtitleFormat};
use crate::common;

#[test]
fn test_fromExtension_withKnownExtensions_shouldMapToFormats() {
    assert_eq!(SubtitleFormat::from_extension("srt"), Some(SubtitleFormat::Srt));
    assert_eq!(SubtitleFormat::from_extension("VTT"), Some(SubtitleFormat::Vtt));
    assert_eq!(SubtitleFormat::from_extension("ass"), Some(SubtitleFormat::Ass));
    assert_eq!(SubtitleFormat::from_extension(".ssa"), Some(SubtitleFormat::Ass));
    assert_eq!(SubtitleFormat::from_extension("sub"), None);
}

#[test]
fn test_fromPath_withUnknownExtension_shouldReturnUnsupportedFormat() {
    assert_eq!(SubtitleFormat::from_path(Path::new("movie.en.srt")), Ok(SubtitleFormat::Srt));

    let result = SubtitleFormat::from_path(Path::new("movie.mkv"));
    assert!(matches!(result, Err(SubtitleError::UnsupportedFormat(_))));

    let result = SubtitleFormat::from_path(Path::new("README"));
    assert!(matches!(result, Err(SubtitleError::UnsupportedFormat(_))));
}

#[test]
fn test_parseTagged_withUnknownTag_shouldNotReturnEmptyTrack() {
    let result = formats::parse_tagged(common::SAMPLE_SRT, "smi");
    assert_eq!(result, Err(SubtitleError::UnsupportedFormat("smi".to_string())));
}

#[test]
fn test_parseTagged_withKnownTag_shouldDispatch() -> anyhow::Result<()> {
    let track = formats::parse_tagged(common::SAMPLE_SRT, "SRT")?;
    assert_eq!(track.len(), 3);
    Ok(())
}

#[test]
fn test_parse_withEachFormat_shouldUseMatchingParser() {
    assert_eq!(formats::parse(common::SAMPLE_SRT, SubtitleFormat::Srt).len(), 3);
    assert_eq!(formats::parse(common::SAMPLE_VTT, SubtitleFormat::Vtt).len(), 2);
    assert_eq!(formats::parse(common::SAMPLE_ASS, SubtitleFormat::Ass).len(), 2);

    // Wrong parser for the content yields nothing rather than garbage
    assert!(formats::parse(common::SAMPLE_SRT, SubtitleFormat::Vtt).is_empty());
    assert!(formats::parse(common::SAMPLE_VTT, SubtitleFormat::Ass).is_empty());
}

#[test]
fn test_parse_withSameInputTwice_shouldYieldIdenticalTracks() {
    for (content, format) in [
        (common::SAMPLE_SRT, SubtitleFormat::Srt),
        (common::SAMPLE_VTT, SubtitleFormat::Vtt),
        (common::SAMPLE_ASS, SubtitleFormat::Ass),
    ] {
        let first = formats::parse(content, format);
        let second = formats::parse(content, format);
        assert_eq!(first, second);
    }
}

#[test]
fn test_format_display_shouldUsePrimaryExtension() {
    assert_eq!(SubtitleFormat::Ass.to_string(), "ass");
    assert_eq!(SubtitleFormat::Vtt.display_name(), "WebVTT");
    assert_eq!(SubtitleFormat::ALL.len(), 3);
}

#[test]
fn test_cueTrack_toSrtAndToVtt_shouldReparseToSameCues() {
    let track = formats::parse(common::SAMPLE_ASS, SubtitleFormat::Ass);

    let as_srt = formats::parse(&track.to_srt(), SubtitleFormat::Srt);
    let as_vtt = formats::parse(&track.to_vtt(), SubtitleFormat::Vtt);

    assert_eq!(as_srt, track);
    assert_eq!(as_vtt, track);
}
