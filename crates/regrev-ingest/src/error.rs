//! Error types for source-store and override-file ingestion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading pipeline inputs.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Source store file does not exist.
    #[error("source store not found: {path}")]
    StoreNotFound { path: PathBuf },

    /// Failed to open the source store.
    #[error("failed to open source store {path}: {source}")]
    StoreOpen {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// A read-only query against the source store failed.
    #[error("source store query failed: {source}")]
    Query {
        #[from]
        source: rusqlite::Error,
    },

    /// Failed to read the URL-override file.
    #[error("failed to read override file {path}: {source}")]
    OverrideRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the URL-override file as a JSON mapping.
    #[error("failed to parse override file {path}: {source}")]
    OverrideParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
