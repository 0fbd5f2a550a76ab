//! Error types for CSV artifact I/O.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Required input artifact does not exist.
    #[error("artifact not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to create or write the artifact file.
    #[error("failed to write artifact {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV encoding or decoding failed.
    #[error("failed to process artifact {path}: {message}")]
    Csv { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, ArtifactError>;
