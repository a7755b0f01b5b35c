//! Membership audit of a loaded tree.
//!
//! Every source word must be an exact member. Every proper, non-empty prefix
//! of a source word that is not itself a source word must be found by a
//! prefix search but not by an exact one.

use std::collections::BTreeSet;
use std::fmt;

use crate::data_structures::TernarySearchTree;

/// A single broken expectation found by [`verify_membership`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationFailure {
    /// A source word is not an exact member.
    MissingWord(String),
    /// A prefix that was never inserted is reported as an exact member.
    PhantomPrefix(String),
    /// A prefix of a source word is not found by a prefix search.
    UnreachablePrefix(String),
}

impl fmt::Display for VerificationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingWord(word) => write!(f, "word {word:?} not found"),
            Self::PhantomPrefix(prefix) => write!(f, "prefix {prefix:?} found as a word"),
            Self::UnreachablePrefix(prefix) => write!(f, "prefix {prefix:?} not reachable"),
        }
    }
}

/// Result of [`verify_membership`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerificationReport {
    /// Distinct source words checked.
    pub words_checked: usize,

    /// Distinct non-member prefixes checked.
    pub prefixes_checked: usize,

    /// Missing words first, then prefix failures, each group sorted.
    pub failures: Vec<VerificationFailure>,
}

impl VerificationReport {
    /// Returns `true` if no expectation was broken.
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Checks `tree` against the words it was built from.
pub fn verify_membership<S: AsRef<str>>(tree: &TernarySearchTree, words: &[S]) -> VerificationReport {
    let unique: BTreeSet<&str> = words.iter().map(|word| word.as_ref()).collect();
    let mut prefixes: BTreeSet<&str> = BTreeSet::new();
    let mut report = VerificationReport::default();

    for &word in &unique {
        report.words_checked += 1;
        if !tree.contains(word) {
            report
                .failures
                .push(VerificationFailure::MissingWord(word.to_string()));
        }

        for (end, _) in word.char_indices().skip(1) {
            let prefix = &word[..end];
            if !unique.contains(prefix) {
                prefixes.insert(prefix);
            }
        }
    }

    for prefix in prefixes {
        report.prefixes_checked += 1;
        if tree.contains(prefix) {
            report
                .failures
                .push(VerificationFailure::PhantomPrefix(prefix.to_string()));
        }
        if !tree.has_prefix(prefix) {
            report
                .failures
                .push(VerificationFailure::UnreachablePrefix(prefix.to_string()));
        }
    }

    report
}
