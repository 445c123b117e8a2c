use anyhow::{anyhow, Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::formats::SubtitleFormat;
use crate::resolver::LookupStrategy;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Subtitle loading and lookup settings
    #[serde(default)]
    pub subtitles: SubtitleConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Configuration for subtitle loading and active-cue lookup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SubtitleConfig {
    /// How the active cue is looked up
    #[serde(default)]
    pub lookup: LookupStrategy,

    /// Cue count from which `auto` lookup builds an index
    #[serde(default = "default_index_threshold")]
    pub index_threshold: usize,

    /// File extensions treated as subtitle files
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for SubtitleConfig {
    fn default() -> Self {
        Self {
            lookup: LookupStrategy::default(),
            index_threshold: default_index_threshold(),
            extensions: default_extensions(),
        }
    }
}

impl SubtitleConfig {
    /// Whether `extension` is one of the configured subtitle extensions
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(extension))
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_index_threshold() -> usize {
    64
}

fn default_extensions() -> Vec<String> {
    vec!["srt".to_string(), "vtt".to_string(), "ass".to_string(), "ssa".to_string()]
}

impl Config {
    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.subtitles.extensions.is_empty() {
            return Err(anyhow!("At least one subtitle extension must be configured"));
        }

        // Every extension must map to a parser
        for extension in &self.subtitles.extensions {
            if SubtitleFormat::from_extension(extension).is_none() {
                return Err(anyhow!("No parser for subtitle extension: {}", extension));
            }
        }

        if self.subtitles.lookup == LookupStrategy::Auto && self.subtitles.index_threshold == 0 {
            return Err(anyhow!("index_threshold must be at least 1 for auto lookup"));
        }

        Ok(())
    }

    /// Load configuration from `path`, writing a default file if none exists
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.exists() {
            let file = File::open(path)
                .with_context(|| format!("Failed to open config file: {}", path.display()))?;
            let reader = BufReader::new(file);
            let config: Config = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            return Ok(config);
        }

        warn!("Config file not found at '{}', creating default config.", path.display());

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;
        std::fs::write(path, config_json)
            .with_context(|| format!("Failed to write default config to file: {}", path.display()))?;

        Ok(config)
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            subtitles: SubtitleConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
