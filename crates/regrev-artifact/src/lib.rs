//! CSV artifact I/O.
//!
//! Three tabular interfaces connect the pipeline stages: the
//! policy-sources artifact (12 columns), the taxonomy-mapping artifact
//! (10 columns), and the URL-check report (6 columns). All are UTF-8 with
//! a required header row; the column set is the serde field order of the
//! record types in `regrev-model`.

pub mod error;

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use regrev_model::{PolicySourceRecord, TaxonomyMappingRecord, UrlCheckRecord};

pub use error::{ArtifactError, Result};

/// Write records to a CSV artifact, creating parent directories as needed.
fn write_records<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| ArtifactError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let mut writer = csv::Writer::from_path(path).map_err(|e| ArtifactError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    for record in records {
        writer.serialize(record).map_err(|e| ArtifactError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    }
    writer.flush().map_err(|source| ArtifactError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = records.len(), "wrote artifact");
    Ok(())
}

/// Read records from a CSV artifact. A missing file is fatal; missing
/// columns in a present file deserialize as empty fields.
fn read_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let mut reader = csv::Reader::from_path(path).map_err(|e| ArtifactError::Csv {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: T = row.map_err(|e| ArtifactError::Csv {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

pub fn write_policy_sources(path: &Path, records: &[PolicySourceRecord]) -> Result<()> {
    write_records(path, records)
}

pub fn read_policy_sources(path: &Path) -> Result<Vec<PolicySourceRecord>> {
    read_records(path)
}

pub fn write_taxonomy_mapping(path: &Path, records: &[TaxonomyMappingRecord]) -> Result<()> {
    write_records(path, records)
}

pub fn read_taxonomy_mapping(path: &Path) -> Result<Vec<TaxonomyMappingRecord>> {
    read_records(path)
}

pub fn write_url_checks(path: &Path, records: &[UrlCheckRecord]) -> Result<()> {
    write_records(path, records)
}
