//! Error types for benchmark tasks

use std::io;
use std::path::PathBuf;

/// Task-level failures
#[derive(Debug, thiserror::Error)]
pub enum BenchError {
    #[error("failed to write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to remove {}: {source}", .path.display())]
    FileRemove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BenchError {
    /// Path involved in a file failure, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::FileWrite { path, .. }
            | Self::FileRead { path, .. }
            | Self::FileRemove { path, .. } => Some(path),
            Self::Json(_) => None,
        }
    }
}
