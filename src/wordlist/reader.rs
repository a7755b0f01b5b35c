//! Line-oriented word list reader.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{debug, info};

use super::error::{WordListError, WordListResult};
use crate::config::WordsConfig;
use crate::data_structures::TernarySearchTree;

/// Origin reported in errors for readers that are not backed by a file.
const STREAM_ORIGIN: &str = "<stream>";

/// Outcome of loading words into a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Words handed to the tree, duplicates included.
    pub words: usize,

    /// Words that were not stored before.
    pub inserted: usize,

    /// Words that were already stored.
    pub duplicates: usize,
}

/// Reads word lists according to a [`WordsConfig`].
#[derive(Debug, Clone, Default)]
pub struct WordListReader {
    config: WordsConfig,
}

impl WordListReader {
    /// Creates a reader with the given configuration.
    pub fn new(config: WordsConfig) -> Self {
        Self { config }
    }

    /// Reads the file named by `words.path`.
    ///
    /// # Errors
    ///
    /// [`WordListError::MissingPath`] if no path is configured, otherwise any
    /// error of [`read_path`](Self::read_path).
    pub fn read_configured(&self) -> WordListResult<Vec<String>> {
        let path = self.config.path.as_deref().ok_or(WordListError::MissingPath)?;
        self.read_path(path)
    }

    /// Reads every word of the file at `path`.
    pub fn read_path(&self, path: &Path) -> WordListResult<Vec<String>> {
        let file = File::open(path).map_err(|source| WordListError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let start = Instant::now();
        let words = self.read_lines(BufReader::new(file), path)?;
        info!(
            path = %path.display(),
            words = words.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Read word list"
        );
        Ok(words)
    }

    /// Reads every word from an already opened reader.
    pub fn read_from<R: BufRead>(&self, reader: R) -> WordListResult<Vec<String>> {
        self.read_lines(reader, Path::new(STREAM_ORIGIN))
    }

    /// Reads the file at `path` and inserts its words into `tree`.
    pub fn load_path_into(
        &self,
        path: &Path,
        tree: &mut TernarySearchTree,
    ) -> WordListResult<LoadSummary> {
        let words = self.read_path(path)?;
        Ok(Self::insert_all(tree, &words))
    }

    /// Inserts `words` into `tree`, counting new and duplicate entries.
    pub fn insert_all<S: AsRef<str>>(tree: &mut TernarySearchTree, words: &[S]) -> LoadSummary {
        let start = Instant::now();
        let mut summary = LoadSummary::default();

        for word in words {
            summary.words += 1;
            if tree.insert(word.as_ref()) {
                summary.inserted += 1;
            } else {
                summary.duplicates += 1;
            }
        }

        debug!(
            inserted = summary.inserted,
            duplicates = summary.duplicates,
            nodes = tree.node_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Inserted words"
        );
        summary
    }

    fn read_lines<R: BufRead>(&self, mut reader: R, origin: &Path) -> WordListResult<Vec<String>> {
        let mut words = Vec::new();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| WordListError::Io {
                    path: PathBuf::from(origin),
                    source,
                })?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let line = std::str::from_utf8(&buf)
                .map_err(|_| WordListError::InvalidUtf8 { line: line_no })?;
            if let Some(word) = self.clean(strip_terminator(line), line_no)? {
                words.push(word);
            }
        }

        Ok(words)
    }

    /// Applies trimming, blank-line skipping, case folding and the length limit.
    fn clean(&self, line: &str, line_no: usize) -> WordListResult<Option<String>> {
        let trimmed = self.config.trim.apply(line);
        if trimmed.is_empty() && self.config.skip_blank_lines {
            return Ok(None);
        }

        // Measured as written; case folding may change the char count
        if let Some(max) = self.config.max_word_length {
            let length = trimmed.chars().count();
            if length > max {
                return Err(WordListError::WordTooLong {
                    line: line_no,
                    length,
                    max,
                });
            }
        }

        let word = if self.config.lowercase {
            trimmed.to_lowercase()
        } else {
            trimmed.to_string()
        };

        Ok(Some(word))
    }
}

fn strip_terminator(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}
