//! Error types for the Lexis library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`LexisError`] enum.
//!
//! # Examples
//!
//! ```
//! use lexis::error::{LexisError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(LexisError::invalid_document("vocabulary item without an id"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;
use std::sync::Arc;

use thiserror::Error;

/// The main error type for Lexis operations.
///
/// The enum is `Clone` because a single in-flight index build hands its
/// outcome to every caller waiting on it. Foreign error types that are not
/// `Clone` are therefore held behind an [`Arc`].
#[derive(Error, Debug, Clone)]
pub enum LexisError {
    /// A search or lookup was attempted before an index was published.
    #[error("Search index not ready. Call build_index() first.")]
    IndexNotReady,

    /// A corpus item could not be turned into a searchable document.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Query-related errors.
    #[error("Query error: {0}")]
    Query(String),

    /// Configuration values that cannot be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The index build task itself failed (panicked or was cancelled).
    #[error("Build error: {0}")]
    Build(String),

    /// I/O errors (corpus files, config files)
    #[error("I/O error: {0}")]
    Io(Arc<io::Error>),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(Arc<serde_json::Error>),

    /// Pattern compilation errors from the highlighter.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with LexisError.
pub type Result<T> = std::result::Result<T, LexisError>;

impl From<io::Error> for LexisError {
    fn from(err: io::Error) -> Self {
        LexisError::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for LexisError {
    fn from(err: serde_json::Error) -> Self {
        LexisError::Json(Arc::new(err))
    }
}

impl LexisError {
    /// Create a new invalid document error.
    pub fn invalid_document<S: Into<String>>(msg: S) -> Self {
        LexisError::InvalidDocument(msg.into())
    }

    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        LexisError::Query(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        LexisError::Config(msg.into())
    }

    /// Create a new build error.
    pub fn build<S: Into<String>>(msg: S) -> Self {
        LexisError::Build(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LexisError::Other(msg.into())
    }

    /// Whether this error only means the index has not been built yet.
    pub fn is_not_ready(&self) -> bool {
        matches!(self, LexisError::IndexNotReady)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = LexisError::invalid_document("missing id");
        assert_eq!(error.to_string(), "Invalid document: missing id");

        let error = LexisError::invalid_config("prune_ratio must be in (0, 1]");
        assert_eq!(
            error.to_string(),
            "Invalid configuration: prune_ratio must be in (0, 1]"
        );

        let error = LexisError::build("worker panicked");
        assert_eq!(error.to_string(), "Build error: worker panicked");
    }

    #[test]
    fn test_not_ready() {
        assert!(LexisError::IndexNotReady.is_not_ready());
        assert!(!LexisError::query("bad").is_not_ready());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let lexis_error = LexisError::from(io_error);

        match lexis_error.clone() {
            LexisError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
        assert!(lexis_error.to_string().contains("File not found"));
    }
}
