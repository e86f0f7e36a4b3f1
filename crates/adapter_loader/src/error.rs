//! Error types for CSV loading and writing.

use interp_core::types::GridError;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for adapter operations.
pub type Result<T> = std::result::Result<T, LoaderError>;

/// CSV adapter error type
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Input file does not exist
    #[error("Can not find file: {}", .0.display())]
    NotFound(PathBuf),

    /// File could not be opened or written
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: std::io::Error,
    },

    /// CSV decoding or encoding failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Rows do not form a rectangular grid
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),

    /// Rendered output was not valid UTF-8
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl LoaderError {
    /// Create an IO error for `path`
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
