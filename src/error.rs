//! Error types for the generation pipeline.

use thiserror::Error;

/// Errors that abort a generation run.
///
/// Nothing is retried: a run either completes or fails outright with one of
/// these. Coverage gaps are deliberately NOT errors; they are recorded by the
/// coverage service and surfaced as queryable state.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Required configuration is missing or inconsistent.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A plugin required a service that was never registered.
    #[error("Missing required service: {0}")]
    MissingService(&'static str),

    /// A mapper or strategy table carries an invalid pattern.
    #[error("Invalid pattern `{pattern}`: {message}")]
    Pattern { pattern: String, message: String },

    /// A user-supplied extension failed.
    #[error("Extension error: {0}")]
    Extension(String),

    /// IO error while cleaning or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GenerateError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Create a pattern error from a failed regex compilation.
    pub fn pattern(pattern: impl Into<String>, error: regex::Error) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            message: error.to_string(),
        }
    }
}
