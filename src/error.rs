//! Error types for htmlfuse
//!
//! Uses `thiserror` for library errors. The binary maps every variant to a
//! single user-facing status line; nothing is allowed to escape as a panic.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for bundling operations
pub type BundleResult<T> = Result<T, BundleError>;

/// Main error type for bundling operations
#[derive(Error, Debug)]
pub enum BundleError {
    /// A required input file does not exist
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// An input file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The output file could not be written
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Malformed TOML config file
    #[error("invalid config in {path}: {message}")]
    Config { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
