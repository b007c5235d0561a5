//! Error types for fizztool
//!
//! Errors are split by concern: lookup errors come from the `get` handler,
//! configuration errors from loading the optional YAML file, and
//! `FizzError` is what command handlers return to the dispatcher.

use std::path::PathBuf;

/// Errors produced when looking up a key
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    /// The requested key is not in the table
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
}

/// Configuration file errors
///
/// These never reach the user as failures; the dispatcher logs them and
/// falls back to flag and environment values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML for the expected shape
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },
}

/// Top-level error type for fizztool commands
#[derive(Debug, thiserror::Error)]
pub enum FizzError {
    /// Lookup error, displayed without a prefix
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Failed to serialize output
    #[error("failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to write to an output stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
