//! Status document persistence with atomic replace semantics

use crate::error::StatusError;
use crate::io::atomic_write;
use std::path::{Path, PathBuf};

/// Opaque string-keyed JSON mapping; no schema is enforced by the store
pub type StatusDocument = serde_json::Map<String, serde_json::Value>;

/// Durable store for a single advisory status document
///
/// Each `write` is independently atomic: a concurrent `read` sees either the
/// fully-previous or fully-new document, never a mix. There is no merge and
/// no cross-process locking; concurrent writers race as last-write-wins.
/// Callers that need read-modify-write consistency must serialize their own
/// critical section (an in-process mutex is sufficient for in-process
/// callers; cross-process writer races are an accepted limitation).
#[derive(Debug, Clone)]
pub struct StatusStore {
    path: PathBuf,
}

impl StatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the last committed document
    ///
    /// Returns an empty mapping when the file does not exist or cannot be
    /// parsed. The document is advisory, so corruption from an external
    /// cause degrades to an empty view instead of failing the caller.
    pub fn read(&self) -> StatusDocument {
        if !self.path.exists() {
            return StatusDocument::new();
        }

        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "status file unreadable, treating as empty");
                return StatusDocument::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), error = %err, "status file corrupt, treating as empty");
                StatusDocument::new()
            }
        }
    }

    /// Replace the on-disk document wholesale
    ///
    /// Serialization failures and I/O failures are propagated; silently
    /// dropping a status update would be misleading to whatever polls the
    /// file.
    pub fn write(&self, doc: &StatusDocument) -> Result<(), StatusError> {
        let mut data = serde_json::to_vec_pretty(doc)?;
        data.push(b'\n');
        atomic_write(&self.path, &data).map_err(|source| StatusError::Write {
            path: self.path.clone(),
            source,
        })
    }
}
