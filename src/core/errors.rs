//! Shared error types for the application
//!
//! The graph and metrics engine itself never fails; these errors belong to
//! the edges of the system (loading module sets, configuration, output).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for couplingmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// Module set documents that could not be decoded
    #[error("Parse error in {file}: {message}")]
    Parse { file: PathBuf, message: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Standard baseline could not be resolved
    #[error("Baseline error: {0}")]
    Baseline(String),

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    /// Create a parse error for a document
    pub fn parse(file: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_mentions_file() {
        let err = Error::parse("modules.json", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Parse error in modules.json: expected value at line 1"
        );
    }

    #[test]
    fn test_context_wraps_message() {
        let result: Result<()> = Err(Error::Validation("duplicate module id `a`".into()));
        let err = result.context("loading baseline").unwrap_err();
        assert_eq!(
            err.to_string(),
            "loading baseline: Validation error: duplicate module id `a`"
        );
    }
}
