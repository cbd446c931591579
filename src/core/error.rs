//! Error handling for docvars
//!
//! The error system follows two principles:
//! 1. **Strongly-typed errors** so callers (and tests) can match on the exact failure
//! 2. **User-friendly messages** with actionable suggestions for the CLI
//!
//! # Architecture
//!
//! - [`DocvarsError`] - every failure the resolution core and the driver can produce
//! - [`ErrorContext`] - wrapper adding details and a suggestion for terminal display
//!
//! # Error Categories
//!
//! - **Extraction**: [`DocvarsError::FileNotFound`], [`DocvarsError::Decode`],
//!   [`DocvarsError::Io`], [`DocvarsError::InvalidPattern`]
//! - **Lookup**: [`DocvarsError::MissingKey`], [`DocvarsError::InvalidVariableName`]
//! - **External command**: [`DocvarsError::Invocation`], [`DocvarsError::Command`]
//! - **Environment and configuration**: [`DocvarsError::MissingEnvironmentVariable`],
//!   [`DocvarsError::ConfigError`]
//! - **Rendering**: [`DocvarsError::InputDirectoryNotFound`], [`DocvarsError::TemplateError`]
//!
//! There is no recovery anywhere: every error aborts the documentation build and is
//! reported through [`user_friendly_error`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use docvars::core::{DocvarsError, ErrorContext, user_friendly_error};
//!
//! let error = DocvarsError::MissingKey {
//!     name: "KubeVersion".to_string(),
//!     table: "literal".to_string(),
//!     suggestions: vec!["KubernetesVersion".to_string()],
//! };
//!
//! let ctx = user_friendly_error(anyhow::Error::from(error));
//! ctx.display();
//! ```

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for docvars operations.
///
/// Each variant names one failure mode of the extractor, the resolver, the
/// version adapter or the render driver.
#[derive(Error, Debug, Clone)]
pub enum DocvarsError {
    /// The scanned source file does not exist
    #[error("Source file not found: {}", path.display())]
    FileNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// Input was not valid UTF-8 text
    ///
    /// Raised both for the scanned source file and for resolver output.
    #[error("Failed to decode {what} as UTF-8 text: {reason}")]
    Decode {
        /// What was being decoded (a file path or a command description)
        what: String,
        /// The decoder's message
        reason: String,
    },

    /// Any other I/O failure while reading or writing files
    #[error("I/O error during {operation} on {}: {reason}", path.display())]
    Io {
        /// Operation that failed (e.g. "read", "write")
        operation: String,
        /// Path involved
        path: PathBuf,
        /// Underlying error message
        reason: String,
    },

    /// A declaration pattern could not be compiled or lacks required groups
    #[error("Invalid declaration pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern
        pattern: String,
        /// Why it was rejected
        reason: String,
    },

    /// A lookup asked for a name that is not known
    ///
    /// Lookups never fall back to a default: a renamed or removed source constant
    /// must break the build.
    #[error("Unknown {table} '{name}'")]
    MissingKey {
        /// The requested name
        name: String,
        /// Which namespace was consulted ("literal", "build variable", ...)
        table: String,
        /// Close matches among the known names
        suggestions: Vec<String>,
    },

    /// A build variable name was empty
    #[error("Build variable name must not be empty")]
    InvalidVariableName,

    /// The resolver program could not be started
    #[error("Failed to invoke resolver '{program}': {reason}")]
    Invocation {
        /// Program that was executed
        program: String,
        /// Why spawning failed
        reason: String,
    },

    /// The resolver program ran but exited unsuccessfully
    #[error("Resolver command for '{name}' failed ({status})")]
    Command {
        /// Variable being resolved
        name: String,
        /// Human readable exit status
        status: String,
        /// Captured standard error
        stderr: String,
    },

    /// A required environment variable is not set
    #[error("Required environment variable '{name}' is not set")]
    MissingEnvironmentVariable {
        /// Variable name
        name: String,
    },

    /// Configuration file problems
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration error
        message: String,
    },

    /// The documentation tree to render does not exist or is not a directory
    #[error("Input directory not found: {}", path.display())]
    InputDirectoryNotFound {
        /// Directory that was requested
        path: PathBuf,
    },

    /// Template rendering failed
    #[error("Template error in {template}: {message}")]
    TemplateError {
        /// Template (page) being rendered
        template: String,
        /// Rendering failure, including the chain of causes
        message: String,
    },
}

impl DocvarsError {
    /// Build an [`DocvarsError::Io`] from an [`std::io::Error`].
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, err: &std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            path: path.into(),
            reason: err.to_string(),
        }
    }
}

/// Error context wrapper that pairs a [`DocvarsError`] with user-facing hints.
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DocvarsError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DocvarsError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: red and bold
    /// - Details: yellow
    /// - Suggestion: green
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

pub use super::error_formatting::{create_error_context, user_friendly_error};
