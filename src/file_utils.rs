use anyhow::{Result, Context};
use log::warn;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::errors::SubtitleError;
use crate::formats::SubtitleFormat;

// @module: File access for subtitle files

/// UTF-8 byte order mark
const BOM: char = '\u{feff}';

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @checks: Extension maps to a subtitle parser
    pub fn is_subtitle_file<P: AsRef<Path>>(path: P) -> bool {
        SubtitleFormat::from_path(path).is_ok()
    }

    /// File name for messages, falling back to the full path
    pub fn display_name<P: AsRef<Path>>(path: P) -> String {
        let path = path.as_ref();
        path.file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string())
    }

    /// Read a subtitle file as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected and a
    /// leading byte order mark is removed. Only IO failures are errors.
    pub async fn read_subtitle_text<P: AsRef<Path>>(path: P) -> Result<String, SubtitleError> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SubtitleError::unreadable(Self::display_name(path), e))?;

        Ok(Self::decode_text(&bytes, &Self::display_name(path)))
    }

    /// Decode raw subtitle bytes the way a browser text reader would
    pub fn decode_text(bytes: &[u8], file_name: &str) -> String {
        let text = match String::from_utf8(bytes.to_vec()) {
            Ok(text) => text,
            Err(_) => {
                warn!("{} is not valid UTF-8, undecodable bytes were replaced", file_name);
                String::from_utf8_lossy(bytes).into_owned()
            }
        };

        match text.strip_prefix(BOM) {
            Some(rest) => rest.to_string(),
            None => text,
        }
    }

    /// Find subtitle files below `dir` whose extension is in `extensions`
    pub fn find_subtitle_files<P: AsRef<Path>>(dir: P, extensions: &[String]) -> Result<Vec<PathBuf>> {
        let mut result = Vec::new();

        for entry in WalkDir::new(dir.as_ref()).follow_links(true) {
            let entry = entry.context("Failed to read directory entry")?;
            let path = entry.path();

            if path.is_file() {
                if let Some(ext) = path.extension() {
                    let ext = ext.to_string_lossy();
                    if extensions.iter().any(|e| e.eq_ignore_ascii_case(&ext)) {
                        result.push(path.to_path_buf());
                    }
                }
            }
        }

        result.sort();
        Ok(result)
    }

    /// Write a string to a file, creating parent directories
    pub fn write_to_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write to file: {:?}", path.as_ref()))?;

        Ok(())
    }
}
