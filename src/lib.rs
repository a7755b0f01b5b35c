//! tst_words library
//!
//! A ternary search tree for sets of strings, plus the pieces needed to use
//! it as a word-list tool: configuration, word list reading, membership
//! verification and error reporting. The binary crate is a thin command line
//! layer over this library.
//!
//! # Architecture
//!
//! - [`data_structures`] holds the tree itself and depends on nothing else.
//! - [`wordlist`] reads word files and audits trees built from them.
//! - [`config`] and [`error`] carry the layered configuration and typed errors.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod wordlist;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

/// Version information for tst_words.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library initialization function.
///
/// Routes errors reported through [`error::report_error`] to tracing.
pub fn init() {
    error::set_error_reporter(std::sync::Arc::new(error::TracingErrorReporter));
}
