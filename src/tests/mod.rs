//! Test modules for tst_words.
//!
//! This module contains the crate-level testing infrastructure:
//! - Tests for configuration loading and validation
//! - Tests for error types and reporting
//! - File-based tests for the word list reader and verifier
//! - Shared fixtures and proptest strategies
//!
//! Tests for the tree itself live next to it in
//! `data_structures::ternary_search_tree::tests`.

pub mod error_tests;
pub mod wordlist_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_list_strategy, TestFixture};
