//! Tests for the error module.
//!
//! This module contains tests for error handling and error types.

use crate::error::config::ConfigError;
use crate::error::{
    report_error, set_error_reporter, ErrorContext, ErrorReporter, TracingErrorReporter, TstError,
};
use crate::wordlist::WordListError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = TstError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component").with_details("additional details");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
}

/// Test that nested errors convert and display correctly.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let tst_error = TstError::from(io_error);
    assert!(format!("{tst_error}").contains("file not found"));

    let tst_error = TstError::from(ConfigError::ValidationError("bad level".to_string()));
    assert_eq!(
        tst_error.to_string(),
        "Configuration error: Configuration validation error: bad level"
    );

    let tst_error = TstError::from(WordListError::InvalidUtf8 { line: 4 });
    assert_eq!(tst_error.to_string(), "Word list error: Line 4 is not valid UTF-8");
}

/// Test the range error message.
#[test]
fn test_value_out_of_range_display() {
    let err = ConfigError::ValueOutOfRange {
        key: "words.max_word_length".to_string(),
        message: "must be positive".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Configuration value words.max_word_length is out of valid range: must be positive"
    );
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter works correctly.
///
/// Note: this is the only test that touches the global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());

    let error = TstError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter;
    let error = TstError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
