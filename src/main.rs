// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use parking_lot::Mutex;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use subplay::app_config::{self, Config};
use subplay::errors::AppError;
use subplay::app_controller::{Controller, DisplaySink, LoadOutcome, LogNotifier, PlaybackClock};
use subplay::file_utils::FileManager;
use subplay::formats::{self, SubtitleFormat};
use subplay::resolver::LookupStrategy;
use subplay::timestamp;

/// CLI Wrapper for LookupStrategy to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLookup {
    Auto,
    Linear,
    Indexed,
}

impl From<CliLookup> for LookupStrategy {
    fn from(cli_lookup: CliLookup) -> Self {
        match cli_lookup {
            CliLookup::Auto => LookupStrategy::Auto,
            CliLookup::Linear => LookupStrategy::Linear,
            CliLookup::Indexed => LookupStrategy::Indexed,
        }
    }
}

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

/// Output format for `convert`
#[derive(Debug, Clone, ValueEnum)]
enum CliOutputFormat {
    Srt,
    Vtt,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a subtitle file and list its cues
    Inspect {
        /// Subtitle file (.srt, .vtt, .ass, .ssa)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Print the cue track as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the cue active at a given time
    At {
        /// Subtitle file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Time in seconds (12.5) or H:MM:SS.ff (0:00:12.50)
        #[arg(value_name = "TIME")]
        time: String,
    },

    /// Re-emit a subtitle file as normalized SRT or WebVTT
    Convert {
        /// Subtitle file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Target format
        #[arg(long, value_enum)]
        to: CliOutputFormat,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Simulate playback and print every subtitle change
    Play {
        /// Subtitle file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Media duration in seconds (defaults to the end of the last cue)
        #[arg(long)]
        duration: Option<f64>,

        /// Seconds between time updates
        #[arg(long, default_value_t = 0.25)]
        step: f64,
    },

    /// List subtitle files in a directory with their cue counts
    Scan {
        /// Directory to search recursively
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },

    /// Generate shell completions for subplay
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// subplay - subtitle cue engine
///
/// Parses SRT, WebVTT and ASS/SSA subtitle files and resolves the cue
/// active at any playback time.
#[derive(Parser, Debug)]
#[command(name = "subplay")]
#[command(version)]
#[command(about = "Subtitle parsing and active-cue lookup")]
#[command(long_about = "subplay parses subtitle files into normalized cue tracks and resolves the cue active at a playback time.

EXAMPLES:
    subplay inspect movie.srt                   # List parsed cues
    subplay inspect --json movie.ass            # Dump the cue track as JSON
    subplay at movie.vtt 83.5                   # Cue on screen at 1:23.5
    subplay at movie.ass 0:01:23.50             # Same, ASS time notation
    subplay convert movie.ass --to srt -o movie.srt
    subplay play movie.srt --step 0.1           # Simulate playback
    subplay scan /movies/                       # Cue counts for a whole folder
    subplay completions bash > subplay.bash     # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum, global = true)]
    log_level: Option<CliLogLevel>,

    /// Active-cue lookup strategy
    #[arg(long, value_enum, global = true)]
    lookup: Option<CliLookup>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and tag for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "ERROR"),
            Level::Warn => ("\x1B[1;33m", "WARN "),
            Level::Info => ("\x1B[1;32m", "INFO "),
            Level::Debug => ("\x1B[1;36m", "DEBUG"),
            Level::Trace => ("\x1B[1;35m", "TRACE"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, tag) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, tag, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Display sink that prints subtitle changes next to the playback clock
struct ConsoleDisplay {
    clock_label: Arc<Mutex<String>>,
}

impl DisplaySink for ConsoleDisplay {
    fn show(&self, text: &str) {
        println!("[{}] {}", self.clock_label.lock(), text.replace('\n', " / "));
    }

    fn hide(&self) {
        println!("[{}] -", self.clock_label.lock());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Trace is the ceiling; the effective level is set from config below
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "subplay", &mut std::io::stdout());
        return Ok(());
    }

    let config = load_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    match cli.command {
        Commands::Inspect { file, json } => run_inspect(config, &file, json).await,
        Commands::At { file, time } => run_at(config, &file, &time).await,
        Commands::Convert { file, to, output } => run_convert(config, &file, to, output.as_deref()).await,
        Commands::Play { file, duration, step } => run_play(config, &file, duration, step).await,
        Commands::Scan { dir } => run_scan(&config, &dir).await,
        Commands::Completions { .. } => Ok(()),
    }
}

/// Load or create the configuration and apply command line overrides
fn load_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_create(&cli.config_path)?;

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if let Some(lookup) = &cli.lookup {
        config.subtitles.lookup = lookup.clone().into();
    }

    config.validate()
        .map_err(|e| AppError::Config(format!("{:#}", e)))?;

    Ok(config)
}

/// Load `file` into a fresh controller, failing when nothing could be parsed
async fn load_into(controller: &Controller, file: &Path) -> Result<(), AppError> {
    match controller.load_subtitle_file(file).await? {
        LoadOutcome::Loaded(_) => Ok(()),
        LoadOutcome::Empty => Err(AppError::File(format!("No subtitles found in {}", file.display()))),
    }
}

async fn run_inspect(config: Config, file: &Path, json: bool) -> Result<()> {
    let controller = Controller::with_config(config)?;
    load_into(&controller, file).await?;

    let resolver = controller.current_track();
    let track = resolver.track();

    if json {
        let output = serde_json::to_string_pretty(track)
            .context("Failed to serialize cue track")?;
        println!("{}", output);
        return Ok(());
    }

    print!("{}", track);
    for (i, cue) in track.iter().enumerate() {
        println!("{}\n{}", i + 1, cue);
    }
    Ok(())
}

async fn run_at(config: Config, file: &Path, time: &str) -> Result<()> {
    let seconds = timestamp::parse_time_arg(time)
        .ok_or_else(|| anyhow!("Invalid time: {}", time))?;

    let controller = Controller::with_config(config)?;
    load_into(&controller, file).await?;

    match controller.current_track().active_cue(seconds) {
        Some(cue) => print!("{}", cue),
        None => println!("No cue at {}", timestamp::format_srt(seconds)),
    }
    Ok(())
}

async fn run_convert(config: Config, file: &Path, to: CliOutputFormat, output: Option<&Path>) -> Result<()> {
    let controller = Controller::with_config(config)?;
    load_into(&controller, file).await?;

    let resolver = controller.current_track();
    let rendered = match to {
        CliOutputFormat::Srt => resolver.track().to_srt(),
        CliOutputFormat::Vtt => resolver.track().to_vtt(),
    };

    match output {
        Some(path) => {
            FileManager::write_to_file(path, &rendered)?;
            info!("Wrote {} cue(s) to {}", resolver.track().len(), path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

async fn run_play(config: Config, file: &Path, duration: Option<f64>, step: f64) -> Result<()> {
    let clock_label = Arc::new(Mutex::new(String::new()));
    let display = ConsoleDisplay { clock_label: Arc::clone(&clock_label) };
    let controller = Controller::with_sinks(config, Box::new(LogNotifier), Box::new(display))?;

    controller.select_media(&FileManager::display_name(file));
    load_into(&controller, file).await?;

    let duration = match duration {
        Some(duration) => duration,
        None => controller
            .current_track()
            .track()
            .iter()
            .map(|cue| cue.end)
            .fold(0.0, f64::max),
    };

    for clock in PlaybackClock::ticks(duration, step)? {
        *clock_label.lock() = format!("{} {:5.1}%", timestamp::format_vtt(clock.current_time), clock.progress_percent());
        controller.on_time_update(clock);
    }

    controller.clear_media();
    Ok(())
}

async fn run_scan(config: &Config, dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        return Err(AppError::File(format!("Input path is not a directory: {:?}", dir)).into());
    }

    let files = FileManager::find_subtitle_files(dir, &config.subtitles.extensions)?;
    if files.is_empty() {
        warn!("No subtitle files found in {:?}", dir);
        return Ok(());
    }

    for path in &files {
        let format = match SubtitleFormat::from_path(path) {
            Ok(format) => format,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        match FileManager::read_subtitle_text(path).await {
            Ok(text) => {
                let track = formats::parse(&text, format);
                println!("{}\t{}\t{} cue(s)", path.display(), format.display_name(), track.len());
            }
            Err(e) => warn!("{}", e),
        }
    }

    info!("Scanned {} subtitle file(s)", files.len());
    Ok(())
}
