//! Error types for the tracker library.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Comprehensive error type for all tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// CSV encoding or decoding errors
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    /// No plan entry matches the requested session
    #[error("No plan entry found for Week {week}, Day {day}, Column {column}")]
    PlanEntryNotFound { week: i32, day: i32, column: String },
    /// Edit selection is outside the attempt log
    #[error("Invalid attempt index {index}: the log holds {len} attempt(s)")]
    InvalidIndex { index: usize, len: usize },
    /// Outcome name is not one of the known outcomes
    #[error("Invalid outcome '{value}': expected SUCCESS, PARTIAL, INCOMPLETE or TEST")]
    InvalidOutcome { value: String },
    /// Rewriting the log would drop rows that cannot be read back
    #[error(
        "'{path}' holds {count} unreadable row(s) that a rewrite would drop; \
         fix or remove them first"
    )]
    UnreadableRows { path: PathBuf, count: usize },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating file system errors bound to a path.
pub struct FileSystemErrorBuilder {
    path: PathBuf,
}

impl FileSystemErrorBuilder {
    /// Create a new file system error builder for a path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: std::io::Error) -> TrackerError {
        TrackerError::FileSystem {
            path: self.path,
            source,
        }
    }
}

impl TrackerError {
    /// Creates a builder for file system errors.
    pub fn file_system(path: impl Into<PathBuf>) -> FileSystemErrorBuilder {
        FileSystemErrorBuilder::new(path)
    }
}

/// Extension trait for I/O results that need the offending path attached.
pub trait IoResultExt<T> {
    /// Map I/O errors to [`TrackerError::FileSystem`] for `path`.
    fn fs_context(self, path: &Path) -> Result<T>;
}

/// Extension trait for CSV results that need the offending path attached.
pub trait CsvResultExt<T> {
    /// Map CSV errors to [`TrackerError::Csv`] for `path`.
    fn csv_context(self, path: &Path) -> Result<T>;
}

/// Extension trait for errors that only need a message, such as task joins.
pub trait ConfigResultExt<T> {
    /// Map any error to [`TrackerError::Configuration`] with a message.
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T> IoResultExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, path: &Path) -> Result<T> {
        self.map_err(|e| TrackerError::file_system(path).with_source(e))
    }
}

impl<T> CsvResultExt<T> for std::result::Result<T, csv::Error> {
    fn csv_context(self, path: &Path) -> Result<T> {
        self.map_err(|source| TrackerError::Csv {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| TrackerError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

/// Result type alias for tracker operations
pub type Result<T> = std::result::Result<T, TrackerError>;
