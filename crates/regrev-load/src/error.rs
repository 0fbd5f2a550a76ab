//! Error types for target-store loading.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// Target store file does not exist. The loader never creates a fresh
    /// store implicitly.
    #[error("target store not found: {path}")]
    TargetNotFound { path: PathBuf },

    /// Failed to open the target store.
    #[error("failed to open target store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A write against the target store failed; the surrounding
    /// transaction is rolled back.
    #[error("target store write failed: {source}")]
    Write {
        #[from]
        source: rusqlite::Error,
    },
}

pub type Result<T> = std::result::Result<T, LoadError>;
