//! Error types for status persistence

use std::path::PathBuf;
use thiserror::Error;

/// Status store error types
#[derive(Error, Debug)]
pub enum StatusError {
    #[error("failed to write status file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize status document: {0}")]
    Serialize(#[from] serde_json::Error),
}
