//! Error types for word list loading.

use std::path::PathBuf;

/// Errors that can occur while reading a word list.
#[derive(Debug, thiserror::Error)]
pub enum WordListError {
    /// The file could not be opened or read.
    #[error("Failed to read word list {path:?}: {source}")]
    Io {
        /// The word list being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// A line is not valid UTF-8.
    #[error("Line {line} is not valid UTF-8")]
    InvalidUtf8 {
        /// One-based line number.
        line: usize,
    },

    /// A word exceeds the configured maximum length.
    #[error("Word on line {line} has {length} characters, maximum is {max}")]
    WordTooLong {
        /// One-based line number.
        line: usize,
        /// Length of the word in characters.
        length: usize,
        /// The configured maximum.
        max: usize,
    },

    /// No word list path was configured or given.
    #[error("No word list path configured")]
    MissingPath,
}

/// Result type for word list operations
pub type WordListResult<T> = Result<T, WordListError>;
