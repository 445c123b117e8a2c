/*!
 * End-to-end subtitle file workflow tests
 */

use anyhow::Result;
use subplay::app_config::Config;
use subplay::app_controller::{Controller, LoadOutcome, NotificationLevel};
use subplay::file_utils::FileManager;
use subplay::formats::{self, SubtitleFormat};
use crate::common::{self, RecordingDisplay, RecordingNotifier};

/// Test loading every sample format from disk in turn
#[test]
fn test_loadEachFormat_fromDisk_shouldReplaceTrackEachTime() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let srt = common::create_test_file(temp_dir.path(), "movie.srt", common::SAMPLE_SRT)?;
    let vtt = common::create_test_file(temp_dir.path(), "movie.vtt", common::SAMPLE_VTT)?;
    let ass = common::create_test_file(temp_dir.path(), "movie.ass", common::SAMPLE_ASS)?;

    let notifier = RecordingNotifier::default();
    let controller = Controller::with_sinks(
        Config::default(),
        Box::new(notifier.clone()),
        Box::new(RecordingDisplay::default()),
    )?;

    tokio_test::block_on(async {
        assert_eq!(controller.load_subtitle_file(&srt).await?, LoadOutcome::Loaded(3));
        assert_eq!(controller.load_subtitle_file(&vtt).await?, LoadOutcome::Loaded(2));
        assert_eq!(controller.load_subtitle_file(&ass).await?, LoadOutcome::Loaded(2));
        Ok::<_, anyhow::Error>(())
    })?;

    let messages: Vec<String> = notifier.messages().into_iter().map(|n| n.message).collect();
    assert_eq!(
        messages,
        vec![
            "Loaded 3 subtitle entries from movie.srt",
            "Loaded 2 subtitle entries from movie.vtt",
            "Loaded 2 subtitle entries from movie.ass",
        ]
    );
    assert!(notifier.messages().iter().all(|n| n.level == NotificationLevel::Success));

    let track = controller.current_track();
    assert_eq!(track.active_cue(2.0).map(|c| c.text()), Some("Bold start\nsecond line".to_string()));
    Ok(())
}

/// Test CRLF files with a byte order mark parse like plain ones
#[test]
fn test_loadFile_withCrlfAndBom_shouldMatchPlainParse() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let windows_text = format!("\u{feff}{}", common::SAMPLE_SRT.replace('\n', "\r\n"));
    let path = common::create_test_file(temp_dir.path(), "windows.srt", &windows_text)?;

    let text = tokio_test::block_on(FileManager::read_subtitle_text(&path))?;
    let track = formats::parse(&text, SubtitleFormat::Srt);

    assert_eq!(track, formats::parse(common::SAMPLE_SRT, SubtitleFormat::Srt));
    Ok(())
}

/// Test converting an ASS script to SRT and WebVTT files
#[test]
fn test_convert_assToSrtAndVtt_shouldPreserveCues() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let source = formats::parse(common::SAMPLE_ASS, SubtitleFormat::Ass);

    let srt_path = temp_dir.path().join("out").join("episode.srt");
    let vtt_path = temp_dir.path().join("out").join("episode.vtt");
    FileManager::write_to_file(&srt_path, &source.to_srt())?;
    FileManager::write_to_file(&vtt_path, &source.to_vtt())?;

    let srt_text = tokio_test::block_on(FileManager::read_subtitle_text(&srt_path))?;
    let vtt_text = tokio_test::block_on(FileManager::read_subtitle_text(&vtt_path))?;

    assert!(srt_text.contains("00:00:01,500 --> 00:00:03,000"));
    assert!(vtt_text.starts_with("WEBVTT"));
    assert_eq!(formats::parse(&srt_text, SubtitleFormat::Srt), source);
    assert_eq!(formats::parse(&vtt_text, SubtitleFormat::Vtt), source);
    Ok(())
}

/// Test scanning a folder and loading everything found
#[test]
fn test_scanAndLoad_withFolder_shouldLoadEverySubtitle() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(temp_dir.path(), "a.srt", common::SAMPLE_SRT)?;
    common::create_test_file(temp_dir.path(), "b.vtt", common::SAMPLE_VTT)?;
    common::create_test_file(temp_dir.path(), "c.ssa", common::SAMPLE_ASS)?;
    common::create_test_file(temp_dir.path(), "empty.srt", "\n\n")?;
    common::create_test_file(temp_dir.path(), "poster.jpg", "")?;

    let config = Config::default();
    let files = FileManager::find_subtitle_files(temp_dir.path(), &config.subtitles.extensions)?;
    assert_eq!(files.len(), 4);

    let notifier = RecordingNotifier::default();
    let controller = Controller::with_sinks(
        config,
        Box::new(notifier.clone()),
        Box::new(RecordingDisplay::default()),
    )?;

    let mut outcomes = Vec::new();
    for file in &files {
        outcomes.push(tokio_test::block_on(controller.load_subtitle_file(file))?);
    }

    assert_eq!(
        outcomes,
        vec![
            LoadOutcome::Loaded(3),
            LoadOutcome::Loaded(2),
            LoadOutcome::Loaded(2),
            LoadOutcome::Empty,
        ]
    );
    // The empty file left the ASS track in place
    assert_eq!(controller.current_track().track().len(), 2);
    assert_eq!(
        notifier.messages().last().map(|n| n.level),
        Some(NotificationLevel::Warning)
    );
    Ok(())
}

/// Test a restricted extension list refuses other formats
#[test]
fn test_loadFile_withExtensionNotConfigured_shouldReject() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "movie.vtt", common::SAMPLE_VTT)?;

    let mut config = Config::default();
    config.subtitles.extensions = vec!["srt".to_string()];
    let controller = Controller::with_sinks(
        config,
        Box::new(RecordingNotifier::default()),
        Box::new(RecordingDisplay::default()),
    )?;

    assert!(tokio_test::block_on(controller.load_subtitle_file(&path)).is_err());
    assert!(controller.current_track().track().is_empty());
    Ok(())
}
