//! Error types for the envboot library.
//!
//! This module provides the error hierarchy for environment resolution,
//! configuration parsing and typed lookups, using `thiserror` for ergonomic
//! error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an envboot error.
///
/// # Examples
///
/// ```
/// use envboot::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(4053)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the envboot library.
#[derive(Debug, Error)]
pub enum Error {
    /// A list-valued environment variable has malformed syntax.
    #[error("failed to parse list value [{value}] of {variable}: {message} (position {position})")]
    ListSyntax {
        /// The environment variable name.
        variable: String,
        /// The raw value that failed to parse.
        value: String,
        /// Character offset of the error within the value.
        position: usize,
        /// Description of the problem.
        message: String,
    },

    /// Configuration text could not be parsed.
    #[error("configuration syntax error on line {line}: {message}")]
    ConfigSyntax {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// An environment-derived entry produced configuration text that does
    /// not parse.
    #[error("invalid configuration value for {variable} ({key}): {message}")]
    EntrySyntax {
        /// The environment variable(s) contributing to the key.
        variable: String,
        /// The dotted configuration key.
        key: String,
        /// Description of the problem.
        message: String,
    },

    /// A YAML configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A JSON configuration file could not be parsed.
    #[error("JSON configuration error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A requested configuration key is absent from every layer.
    #[error("configuration path not found: {path}")]
    Missing {
        /// The dotted path that was looked up.
        path: String,
    },

    /// A configuration key holds a different kind of value than requested.
    #[error("configuration path {path} has the wrong type: expected {expected}")]
    WrongType {
        /// The dotted path that was looked up.
        path: String,
        /// The kind of value the caller asked for.
        expected: String,
    },
}

impl Error {
    /// Check if error indicates a syntax problem in environment or configuration text.
    ///
    /// # Examples
    ///
    /// ```
    /// use envboot::Error;
    ///
    /// let err = Error::ConfigSyntax { line: 1, message: "expected `key=value`".into() };
    /// assert!(err.is_syntax());
    /// ```
    #[must_use]
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::ListSyntax { .. }
                | Self::ConfigSyntax { .. }
                | Self::EntrySyntax { .. }
                | Self::Configuration(_)
                | Self::Json(_)
        )
    }

    /// Check if error indicates an absent configuration key.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }
}
