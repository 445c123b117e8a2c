/*!
 * Tests for the SubRip parser
 */

use subplay::formats::srt::parse_srt;
use crate::common;

#[test]
fn test_parseSrt_withSingleBlock_shouldConvertTimestamps() {
    let cues = parse_srt("1\n00:00:01,000 --> 00:00:03,500\nHello\n");

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].start, 1.0);
    assert_eq!(cues[0].end, 3.5);
    assert_eq!(cues[0].text(), "Hello");
}

#[test]
fn test_parseSrt_withSampleFile_shouldKeepOrderAndLines() {
    let cues = parse_srt(common::SAMPLE_SRT);

    assert_eq!(cues.len(), 3);
    assert_eq!(cues[0].text(), "This is a test subtitle.");
    assert_eq!(cues[1].text(), "It contains multiple entries.");
    assert_eq!(cues[2].lines, vec!["For testing".to_string(), "purposes.".to_string()]);
    assert_eq!(cues[2].start, 10.0);
    assert_eq!(cues[2].end, 14.0);
}

#[test]
fn test_parseSrt_withMarkup_shouldStripTags() {
    let cues = parse_srt("1\n00:00:01,000 --> 00:00:02,000\n<b>Hello</b>\n");
    assert_eq!(cues[0].text(), "Hello");
}

#[test]
fn test_parseSrt_withMissingTimestampLine_shouldSkipOnlyThatBlock() {
    let content = "1\nNo timing here\nstill text\n\n2\n00:00:05,000 --> 00:00:06,000\nSecond\n\n3\nThird without timing\n\n4\n00:00:07,000 --> 00:00:08,000\nFourth\n";
    let cues = parse_srt(content);

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[0].text(), "Second");
    assert_eq!(cues[1].text(), "Fourth");
}

#[test]
fn test_parseSrt_withDotSeparator_shouldSkipBlock() {
    let cues = parse_srt("1\n00:00:01.000 --> 00:00:02.000\nWrong separator\n");
    assert!(cues.is_empty());
}

#[test]
fn test_parseSrt_withCrlfLineEndings_shouldMatchLfResult() {
    let crlf = common::SAMPLE_SRT.replace('\n', "\r\n");
    assert_eq!(parse_srt(&crlf), parse_srt(common::SAMPLE_SRT));
}

#[test]
fn test_parseSrt_withExtraBlankLines_shouldTreatAsOneSeparator() {
    let content = "\n\n1\n00:00:01,000 --> 00:00:02,000\nA\n\n\n   \n\n2\n00:00:03,000 --> 00:00:04,000\nB\n\n\n";
    let cues = parse_srt(content);

    assert_eq!(cues.len(), 2);
    assert_eq!(cues[1].text(), "B");
}

#[test]
fn test_parseSrt_withEndBeforeStart_shouldDiscardCue() {
    let content = "1\n00:00:05,000 --> 00:00:04,000\nBackwards\n\n2\n00:00:06,000 --> 00:00:06,000\nInstant\n";
    let cues = parse_srt(content);

    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].text(), "Instant");
}

#[test]
fn test_parseSrt_withTimingInsideLongerLine_shouldStillMatch() {
    let cues = parse_srt("1\n00:00:01,000 --> 00:00:02,000 X1:100 X2:200\nPositioned\n");
    assert_eq!(cues.len(), 1);
    assert_eq!(cues[0].end, 2.0);
}

#[test]
fn test_parseSrt_withOutOfOrderCues_shouldKeepFileOrder() {
    let content = "1\n00:00:10,000 --> 00:00:11,000\nLater\n\n2\n00:00:01,000 --> 00:00:02,000\nEarlier\n";
    let cues = parse_srt(content);

    assert_eq!(cues[0].text(), "Later");
    assert_eq!(cues[1].text(), "Earlier");
}

#[test]
fn test_parseSrt_withEmptyInput_shouldReturnNoCues() {
    assert!(parse_srt("").is_empty());
    assert!(parse_srt("\n\n  \n").is_empty());
}
