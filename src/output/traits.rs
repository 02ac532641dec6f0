//! Sink trait and error types
//!
//! A sink serializes the complete, already-accumulated record sequence to a
//! file. Sinks are pure serialization: they assume the records are
//! well-formed and perform no validation. Write failures are fatal to the
//! run.

use crate::record::Record;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while writing sink output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sink operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for record sinks
///
/// Implementations overwrite any existing file at their target path.
pub trait RecordSink {
    /// Serializes the full record sequence to the target path
    fn write(&self, records: &[Record]) -> OutputResult<()>;

    /// The target path this sink writes to
    fn path(&self) -> &Path;
}
