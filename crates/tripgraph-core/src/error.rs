//! Centralized error types for the trip loading pipeline.

use thiserror::Error;

/// Main error type for pipeline operations.
///
/// The top-level retry loop treats every variant uniformly; the kinds exist
/// so that logs and tests can tell which stage of a load attempt failed.
#[derive(Error, Debug)]
pub enum TripError {
    #[error("Cannot reach or authenticate to the graph database: {0}")]
    Connectivity(String),

    #[error("Cannot read input file: {0}")]
    Read(String),

    #[error("Expected column missing from input: {0}")]
    Schema(String),

    #[error("Timestamp does not match expected pattern: {0}")]
    Format(String),

    #[error("Graph write failed: {0}")]
    Write(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pipeline operations.
pub type TripResult<T> = Result<T, TripError>;

impl TripError {
    /// Create a connectivity error.
    pub fn connectivity(msg: impl Into<String>) -> Self {
        Self::Connectivity(msg.into())
    }

    /// Create a read error.
    pub fn read(msg: impl Into<String>) -> Self {
        Self::Read(msg.into())
    }

    /// Create a schema error.
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create a format error.
    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    /// Create a write error.
    pub fn write(msg: impl Into<String>) -> Self {
        Self::Write(msg.into())
    }
}
