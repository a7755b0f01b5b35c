// Copyright (c) 2025 tst_words Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Ternary search tree for sets of strings.
//!
//! A ternary search tree stores strings one character per node. Compared with
//! a plain trie, each node has only three links instead of one per alphabet
//! symbol, which keeps sparse sets of long words compact.
//!
//! # Features
//!
//! - Exact membership and prefix membership queries.
//! - Lexicographic enumeration of every string, or of the strings below a prefix.
//! - The empty string is a first-class member.
//! - Nodes are kept in an index-addressed arena and every walk uses an
//!   explicit loop or stack, so word length never limits the native stack.
//!
//! # Example
//!
//! ```
//! use tst_words_lib::data_structures::ternary_search_tree::TernarySearchTree;
//!
//! let mut tree = TernarySearchTree::new();
//! for word in ["bat", "bath", "bats", "ball"] {
//!     tree.insert(word);
//! }
//!
//! assert_eq!(tree.all_strings(), vec!["ball", "bat", "bath", "bats"]);
//! assert_eq!(tree.size(), 4);
//!
//! let completions: Vec<String> = tree.strings_with_prefix("bat").collect();
//! assert_eq!(completions, vec!["bat", "bath", "bats"]);
//! ```
//!
//! # Sharing
//!
//! The tree has no internal synchronization. Inserting takes `&mut self` and
//! lookups take `&self`, so a tree shared between threads goes behind a
//! `std::sync::RwLock`: readers search and enumerate, a single writer inserts.

mod iter;
mod node;
mod tree;

pub use iter::Strings;
pub use tree::{TernarySearchTree, TreeStats};

#[cfg(test)]
mod tests;
