//! Word list input for the ternary search tree.
//!
//! A word list is a text file with one word per line. [`WordListReader`]
//! turns it into words according to a [`WordsConfig`](crate::config::WordsConfig)
//! and can feed them straight into a
//! [`TernarySearchTree`](crate::data_structures::TernarySearchTree).
//! [`verify_membership`] audits a loaded tree against the words it was built from.

mod error;
mod reader;
mod verify;

pub use error::{WordListError, WordListResult};
pub use reader::{LoadSummary, WordListReader};
pub use verify::{verify_membership, VerificationFailure, VerificationReport};
