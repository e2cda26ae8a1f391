//! Error handling for picscan
//!
//! The error system is built around two types:
//! - [`PicscanError`] - strongly-typed failure cases for precise handling in code
//! - [`ErrorContext`] - wrapper that adds user-friendly details and suggestions
//!
//! There are only two failure kinds in a scan: a non-ASCII metadata line,
//! which is recoverable (the line is skipped with a diagnostic and the scan
//! continues), and everything else - a missing tool binary, a failed
//! subprocess launch, an unreadable directory - which propagates up to `main`
//! and terminates the run with exit code 1. Missing metadata fields are not
//! errors at all; they are signaled as absence and the file is skipped.
//!
//! Use [`user_friendly_error`] to convert any error into a displayable format
//! with contextual suggestions.
//!
//! # Examples
//!
//! ```rust,no_run
//! use picscan::core::{PicscanError, user_friendly_error};
//!
//! fn locate_tool() -> Result<(), PicscanError> {
//!     Err(PicscanError::ExiftoolNotFound)
//! }
//!
//! if let Err(e) = locate_tool() {
//!     let ctx = user_friendly_error(anyhow::Error::from(e));
//!     ctx.display(); // Shows colored error with suggestions
//! }
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// The main error type for picscan operations
///
/// Each variant represents a specific failure mode with enough context
/// (paths, tool names, stderr snippets) to produce an actionable message.
#[derive(Error, Debug, Clone)]
pub enum PicscanError {
    /// The exiftool binary could not be found on `PATH`
    #[error("exiftool not found on PATH")]
    ExiftoolNotFound,

    /// The exiftool subprocess could not be launched
    ///
    /// This is distinct from exiftool itself reporting a problem: output from
    /// a tool that ran but exited non-zero is still scanned for fields, while
    /// a launch failure (bad path, permissions) aborts the run.
    #[error("failed to launch '{program}' on '{path}': {reason}")]
    ExiftoolLaunchFailed {
        /// Tool path or name that was invoked
        program: String,
        /// File the tool was invoked on
        path: String,
        /// Underlying launch failure
        reason: String,
    },

    /// The exiftool subprocess exceeded its configured timeout
    #[error("exiftool timed out after {seconds} seconds on '{path}'")]
    ExiftoolTimeout {
        /// File the tool was invoked on
        path: String,
        /// Configured timeout in seconds
        seconds: u64,
    },

    /// Directory traversal failed
    ///
    /// Traversal errors are fatal: an unreadable directory terminates the
    /// whole scan rather than producing partial results silently.
    #[error("failed to scan '{path}': {reason}")]
    WalkFailed {
        /// Root path of the scan
        path: String,
        /// Underlying traversal failure
        reason: String,
    },

    /// Generic error with a custom message
    #[error("{message}")]
    Other {
        /// Error description
        message: String,
    },
}

/// Wrapper that pairs an error with user-facing details and suggestions.
///
/// The CLI displays errors through this type so that every failure shows the
/// same colored `error:` / `details:` / `suggestion:` layout.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying picscan error
    pub error: PicscanError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context from a [`PicscanError`]
    #[must_use]
    pub const fn new(error: PicscanError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add an actionable suggestion for resolving the error
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details about the error
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error to stderr with colored formatting
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error to a user-friendly [`ErrorContext`] with suggestions
///
/// This is the main entry point for turning arbitrary errors into CLI
/// display. Known [`PicscanError`] variants get tailored suggestions; anything
/// else is wrapped with its full context chain as the message.
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    if let Some(picscan_error) = error.downcast_ref::<PicscanError>() {
        return create_error_context(picscan_error.clone());
    }

    // Generic fallback: keep the anyhow context chain visible
    ErrorContext::new(PicscanError::Other {
        message: format!("{error:#}"),
    })
}

fn create_error_context(error: PicscanError) -> ErrorContext {
    match &error {
        PicscanError::ExiftoolNotFound => ErrorContext::new(error)
            .with_details("picscan extracts all image metadata through the exiftool utility")
            .with_suggestion(
                "Install exiftool (https://exiftool.org) or pass an explicit path with --exiftool",
            ),
        PicscanError::ExiftoolLaunchFailed {
            program, ..
        } => {
            let program = program.clone();
            ErrorContext::new(error).with_suggestion(format!(
                "Check that '{program}' exists and is executable"
            ))
        }
        PicscanError::ExiftoolTimeout {
            ..
        } => ErrorContext::new(error).with_suggestion(
            "Raise the limit with --timeout, or omit the flag to wait indefinitely",
        ),
        PicscanError::WalkFailed {
            path, ..
        } => {
            let path = path.clone();
            ErrorContext::new(error).with_suggestion(format!(
                "Check that '{path}' exists and every directory under it is readable"
            ))
        }
        PicscanError::Other {
            ..
        } => ErrorContext::new(error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exiftool_not_found_gets_install_suggestion() {
        let ctx = user_friendly_error(anyhow::Error::from(PicscanError::ExiftoolNotFound));
        assert!(ctx.suggestion.as_deref().unwrap_or("").contains("exiftool.org"));
    }

    #[test]
    fn walk_failed_suggestion_names_the_path() {
        let err = PicscanError::WalkFailed {
            path: "/photos/2020".to_string(),
            reason: "permission denied".to_string(),
        };
        let ctx = user_friendly_error(anyhow::Error::from(err));
        assert!(ctx.suggestion.as_deref().unwrap_or("").contains("/photos/2020"));
    }

    #[test]
    fn generic_errors_keep_their_context_chain() {
        use anyhow::Context;

        let err: anyhow::Error = std::io::Error::other("boom").into();
        let err = Err::<(), _>(err).context("reading photo list").unwrap_err();
        let ctx = user_friendly_error(err);
        let message = format!("{}", ctx.error);
        assert!(message.contains("reading photo list"));
        assert!(message.contains("boom"));
    }

    #[test]
    fn display_includes_details_and_suggestion() {
        let ctx = ErrorContext::new(PicscanError::ExiftoolNotFound)
            .with_details("details here")
            .with_suggestion("do the thing");
        let rendered = format!("{ctx}");
        assert!(rendered.contains("Details: details here"));
        assert!(rendered.contains("Suggestion: do the thing"));
    }
}
