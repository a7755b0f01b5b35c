//! Word list configuration module.
//!
//! This module defines how word list files are read: where the file lives,
//! how each line is cleaned up, and which lines are rejected.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upper bound accepted for `max_word_length`.
const MAX_WORD_LENGTH_LIMIT: usize = 1 << 20;

/// Whitespace trimming applied to each line.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrimMode {
    /// Keep the line as read (the line terminator is always removed)
    None,
    /// Strip trailing whitespace
    #[default]
    Trailing,
    /// Strip leading and trailing whitespace
    Both,
}

impl TrimMode {
    /// Applies the trimming mode to `line`.
    pub fn apply<'a>(&self, line: &'a str) -> &'a str {
        match self {
            Self::None => line,
            Self::Trailing => line.trim_end(),
            Self::Both => line.trim(),
        }
    }
}

/// Word list configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct WordsConfig {
    /// Word list file, one word per line
    pub path: Option<PathBuf>,

    /// Whitespace trimming applied to every line
    pub trim: TrimMode,

    /// Skip lines that are empty after trimming instead of inserting ""
    pub skip_blank_lines: bool,

    /// Fold words to lowercase before inserting them
    pub lowercase: bool,

    /// Reject words longer than this many characters
    pub max_word_length: Option<usize>,
}

impl Validate for WordsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "Word list path cannot be empty".to_string(),
                ));
            }
        }

        if let Some(max) = self.max_word_length {
            if max == 0 || max > MAX_WORD_LENGTH_LIMIT {
                return Err(ConfigError::ValueOutOfRange {
                    key: "words.max_word_length".to_string(),
                    message: format!("must be between 1 and {MAX_WORD_LENGTH_LIMIT}, got {max}"),
                });
            }
        }

        Ok(())
    }
}
