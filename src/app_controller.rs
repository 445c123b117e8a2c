use anyhow::anyhow;
use log::{error, warn, info, debug};
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::{AppError, SubtitleError};
use crate::file_utils::FileManager;
use crate::formats::{self, SubtitleFormat};
use crate::resolver::Resolver;
use crate::subtitle_processor::Cue;
use crate::timestamp;
use crate::track_slot::TrackSlot;

// @module: Player-facing subtitle session

/// Severity of a host notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// Message for the host's notification area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: String) -> Self {
        Self { level, message }
    }
}

/// Receives load results; the host decides how to present them
pub trait NotificationSink: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Receives cue text to overlay on the video
pub trait DisplaySink: Send + Sync {
    /// Show `text` in place of whatever is displayed
    fn show(&self, text: &str);

    /// Hide the overlay
    fn hide(&self);
}

/// Notification sink that writes to the log
#[derive(Debug, Default)]
pub struct LogNotifier;

impl NotificationSink for LogNotifier {
    fn notify(&self, notification: &Notification) {
        match notification.level {
            NotificationLevel::Success => info!("{}", notification.message),
            NotificationLevel::Warning => warn!("{}", notification.message),
            NotificationLevel::Error => error!("{}", notification.message),
        }
    }
}

/// Display sink that discards everything
#[derive(Debug, Default)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn show(&self, _text: &str) {}
    fn hide(&self) {}
}

/// Playback position reported by the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackClock {
    /// Current playback time in seconds
    pub current_time: f64,
    /// Total media duration in seconds
    pub duration: f64,
}

impl PlaybackClock {
    pub fn new(current_time: f64, duration: f64) -> Self {
        Self { current_time, duration }
    }

    /// Position as a percentage of the duration; 0 when the duration is unknown
    pub fn progress_percent(&self) -> f64 {
        if self.duration.is_finite() && self.duration > 0.0 {
            (self.current_time / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    /// `MM:SS / MM:SS` label for the transport bar
    pub fn label(&self) -> String {
        format!("{} / {}", timestamp::format_clock(self.current_time), timestamp::format_clock(self.duration))
    }

    /// Clock positions from 0 to `duration` inclusive, `step` seconds apart
    pub fn ticks(duration: f64, step: f64) -> anyhow::Result<impl Iterator<Item = PlaybackClock>> {
        if !(step.is_finite() && step > 0.0) {
            return Err(anyhow!("Step must be a positive number of seconds"));
        }
        if !(duration.is_finite() && duration >= 0.0) {
            return Err(anyhow!("Duration must be a finite, non-negative number of seconds"));
        }

        let last = (duration / step).floor() as u64;
        Ok((0..=last).map(move |tick| PlaybackClock::new(tick as f64 * step, duration)))
    }
}

/// Result of loading a subtitle file that could be read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The track was replaced by one with this many cues
    Loaded(usize),
    /// Nothing parsed; the current track was kept
    Empty,
}

/// Subtitle session for one player
pub struct Controller {
    // @field: App configuration
    config: Config,

    // @field: Current track
    slot: TrackSlot,

    notifier: Box<dyn NotificationSink>,

    display: Box<dyn DisplaySink>,

    // @field: Cue currently shown on the display sink
    shown: Mutex<Option<Cue>>,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        Self::with_sinks(config, Box::new(LogNotifier), Box::new(NullDisplay))
    }

    /// Create a controller reporting to the given sinks
    pub fn with_sinks(
        config: Config,
        notifier: Box<dyn NotificationSink>,
        display: Box<dyn DisplaySink>,
    ) -> Result<Self, AppError> {
        config.validate().map_err(|e| AppError::Config(e.to_string()))?;

        Ok(Self {
            config,
            slot: TrackSlot::new(),
            notifier,
            display,
            shown: Mutex::new(None),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the current track
    pub fn current_track(&self) -> Arc<Resolver> {
        self.slot.current()
    }

    /// Read, parse and install a subtitle file
    pub async fn load_subtitle_file<P: AsRef<Path>>(&self, path: P) -> Result<LoadOutcome, SubtitleError> {
        let path = path.as_ref();
        let file_name = FileManager::display_name(path);

        let format = match self.format_for(path) {
            Ok(format) => format,
            Err(e) => {
                self.notify(NotificationLevel::Error, format!("Error parsing subtitle file: {}", file_name));
                return Err(e);
            }
        };

        let text = match FileManager::read_subtitle_text(path).await {
            Ok(text) => text,
            Err(e) => {
                error!("Subtitle read failed: {}", e);
                self.notify(NotificationLevel::Error, format!("Error reading subtitle file: {}", file_name));
                return Err(e);
            }
        };

        Ok(self.load_subtitle_text(&file_name, &text, format))
    }

    /// Parse already-decoded subtitle text and install the result.
    ///
    /// An empty parse leaves the current track in place.
    pub fn load_subtitle_text(&self, file_name: &str, text: &str, format: SubtitleFormat) -> LoadOutcome {
        let track = formats::parse(text, format);

        if track.is_empty() {
            self.notify(NotificationLevel::Warning, format!("No subtitles found in {}", file_name));
            return LoadOutcome::Empty;
        }

        let count = track.len();
        let resolver = Resolver::new(track, self.config.subtitles.lookup, self.config.subtitles.index_threshold);
        self.slot.replace(resolver);

        self.notify(
            NotificationLevel::Success,
            format!("Loaded {} subtitle entries from {}", count, file_name),
        );
        LoadOutcome::Loaded(count)
    }

    /// Report a file the host could not read; no parser runs
    pub fn report_read_failure(&self, file_name: &str, reason: impl std::fmt::Display) -> SubtitleError {
        let error = SubtitleError::unreadable(file_name, reason);
        error!("Subtitle read failed: {}", error);
        self.notify(NotificationLevel::Error, format!("Error reading subtitle file: {}", file_name));
        error
    }

    /// Resolve the cue for a playback time update and refresh the display
    pub fn on_time_update(&self, clock: PlaybackClock) -> Option<Cue> {
        let cue = self.slot.active_cue(clock.current_time);
        self.present(cue.as_ref());
        cue
    }

    /// A new media item was selected; subtitles loaded for the previous one no longer apply
    pub fn select_media(&self, media_name: &str) {
        debug!("Media selected: {}", media_name);
        self.reset_track();
    }

    /// Media was cleared from the player
    pub fn clear_media(&self) {
        debug!("Media cleared");
        self.reset_track();
    }

    fn reset_track(&self) {
        self.slot.clear();
        self.present(None);
    }

    /// Push `cue` to the display sink if it differs from what is shown
    fn present(&self, cue: Option<&Cue>) {
        {
            let mut shown = self.shown.lock();
            if shown.as_ref() == cue {
                return;
            }
            *shown = cue.cloned();
        }

        // The sink runs unlocked so it may call back into the controller
        match cue {
            Some(cue) => self.display.show(&cue.text()),
            None => self.display.hide(),
        }
    }

    fn format_for(&self, path: &Path) -> Result<SubtitleFormat, SubtitleError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_string())
            .unwrap_or_default();

        if !self.config.subtitles.accepts_extension(&extension) {
            return Err(SubtitleError::UnsupportedFormat(path.display().to_string()));
        }
        SubtitleFormat::from_path(path)
    }

    fn notify(&self, level: NotificationLevel, message: String) {
        self.notifier.notify(&Notification::new(level, message));
    }
}
