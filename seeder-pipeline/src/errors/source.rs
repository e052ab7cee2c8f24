//! Error types for the CSV source module.
//! Defines specific errors that can occur while reading row data from disk.
use thiserror::Error;

/// Represents errors that can occur while loading a CSV source file.
///
/// A missing file is not an error (it yields zero rows); these cover
/// unreadable files and malformed headers.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
