//! Data structures for tst_words.
//!
//! The string-set containers live here, independent of the word-list and
//! command line layers built on top of them.
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - No recursion bounded only by input size
//! - No logging or I/O inside the containers

pub mod ternary_search_tree;

// Re-export common data structures
pub use ternary_search_tree::{TernarySearchTree, TreeStats};
