//! Dataset error types

use std::io;

use thiserror::Error;

/// Result type for dataset operations
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Errors that can occur while loading the sales snapshot
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Snapshot directory is missing or holds no data files
    #[error("snapshot unavailable: {0}")]
    SnapshotMissing(String),

    /// A required column is absent from the snapshot
    #[error("snapshot is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// Snapshot files exist but could not be read as a table
    #[error("failed to read snapshot: {0}")]
    Read(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<polars::error::PolarsError> for DatasetError {
    fn from(err: polars::error::PolarsError) -> Self {
        DatasetError::Read(err.to_string())
    }
}

impl From<glob::PatternError> for DatasetError {
    fn from(err: glob::PatternError) -> Self {
        DatasetError::SnapshotMissing(format!("invalid snapshot pattern: {}", err))
    }
}
