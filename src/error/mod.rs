//! Error module for tst_words.
//!
//! Each layer owns a `thiserror` enum; [`TstError`] wraps them all so the
//! binary can propagate any failure with `?` and report it in one place.

use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;
use thiserror::Error;

use crate::wordlist::WordListError;

pub mod config;

/// Result type alias used throughout tst_words.
pub type TstResult<T> = Result<T, TstError>;

/// Core error enum for tst_words.
#[derive(Error, Debug)]
pub enum TstError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised while reading a word list.
    #[error("Word list error: {0}")]
    WordList(#[from] WordListError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors when emitting JSON output.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: TstError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: TstError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs through the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Holder for the process-wide error reporter.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: Option<Arc<dyn ErrorReporter>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&mut self, reporter: Arc<dyn ErrorReporter>) {
        self.reporter = Some(reporter);
    }

    /// Report an error with context.
    ///
    /// Falls back to standard error when no reporter is configured.
    pub fn report(&self, context: ErrorContext) {
        match &self.reporter {
            Some(reporter) => reporter.report(context),
            None => eprintln!("Error: {context}"),
        }
    }
}

static ERROR_REPORTING: Lazy<RwLock<ErrorReporting>> =
    Lazy::new(|| RwLock::new(ErrorReporting::default()));

/// Report an error through the global reporter.
pub fn report_error(context: ErrorContext) {
    let reporting = ERROR_REPORTING
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    reporting.report(context);
}

/// Set the global error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .set_reporter(reporter);
}
