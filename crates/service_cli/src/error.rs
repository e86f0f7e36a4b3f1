//! Error types for the gridfill CLI.

use adapter_loader::LoaderError;
use infra_config::ConfigError;
use interp_core::types::ProcessingError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Why an existing output file was not overwritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConflictReason {
    /// The user answered `n`
    Declined,
    /// The user answered something other than `y` or `n`
    Unrecognised(String),
    /// `overwrite = "abort"` is configured
    PolicyAbort,
}

impl fmt::Display for ConflictReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declined => write!(f, "overwrite declined"),
            Self::Unrecognised(answer) => write!(f, "did not recognise response {:?}", answer),
            Self::PolicyAbort => write!(f, "overwrite policy is abort"),
        }
    }
}

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("Can not find file: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Output file is non-empty and may not be replaced
    #[error("The output file is not empty: {} ({reason})", .path.display())]
    OutputConflict {
        /// Output path
        path: PathBuf,
        /// Why the run stopped
        reason: ConflictReason,
    },

    /// Reading or writing CSV failed
    #[error(transparent)]
    Load(#[from] LoaderError),

    /// Interpolation failed
    #[error(transparent)]
    Processing(#[from] ProcessingError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
