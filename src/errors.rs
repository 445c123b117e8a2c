/*!
 * Error types for the subplay library.
 *
 * This module contains custom error types for the different layers of the
 * crate, using the thiserror crate for ergonomic error definitions.
 * Malformed cues never surface here: parsers drop them individually.
 */

use thiserror::Error;

/// Errors that can occur when loading a subtitle file
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubtitleError {
    /// Format tag or file extension that no parser handles
    #[error("Unsupported subtitle format: {0}")]
    UnsupportedFormat(String),

    /// The file could not be read or decoded
    #[error("Error reading subtitle file: {file} ({reason})")]
    Unreadable {
        /// Name of the file that failed
        file: String,
        /// Underlying cause
        reason: String,
    },
}

impl SubtitleError {
    /// Build an `Unreadable` error from any displayable cause
    pub fn unreadable(file: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::Unreadable {
            file: file.into(),
            reason: reason.to_string(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A file or directory could not be used
    #[error("File error: {0}")]
    File(String),

    /// Error from subtitle loading
    #[error("Subtitle error: {0}")]
    Subtitle(#[from] SubtitleError),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),
}
