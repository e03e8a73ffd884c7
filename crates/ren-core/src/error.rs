//! Error types for the replacer library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all replacer operations.
#[derive(Error, Debug)]
pub enum ReplacerError {
    /// Pairs file line with a field count other than two
    #[error("Malformed pairs file at line {line}: {reason}")]
    MalformedPairs { line: usize, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Plan failed its consistency check; no file may be mutated
    #[error("Plan is not consistent ({conflicts} conflict(s)) -- will not replace")]
    InconsistentPlan { conflicts: usize },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ReplacerError {
        ReplacerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ReplacerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a file system error with path context.
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }
}

/// Extension trait for I/O Results to attach the path being accessed.
pub trait IoResultExt<T> {
    /// Map an I/O error into a [`ReplacerError::FileSystem`] carrying `path`.
    fn path_context(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn path_context(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| ReplacerError::file_system(path, e))
    }
}

/// Result type alias for replacer operations
pub type Result<T> = std::result::Result<T, ReplacerError>;
