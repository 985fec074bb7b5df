//! Error types for the vigil integrity engine.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while walking the tree or hashing file content
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Scan root not found or not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Engine-level errors for the snapshot and verify operations
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("No baseline found at {0}. Run `vigil snapshot` first.")]
    BaselineNotFound(PathBuf),

    #[error("Baseline at {path} is not a valid digest document: {source}")]
    BaselineCorrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Baseline I/O error at {path}: {source}")]
    BaselineIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    #[error(transparent)]
    Scan(#[from] ScanError),
}

impl From<config::ConfigError> for EngineError {
    fn from(err: config::ConfigError) -> Self {
        EngineError::ConfigError(err.to_string())
    }
}
