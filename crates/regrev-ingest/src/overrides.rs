//! URL-override file loading.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use regrev_model::UrlOverride;

use crate::error::{IngestError, Result};

/// Load the override mapping from a JSON file keyed by source document id.
///
/// An absent file is not an error: curation is optional, so it simply
/// yields an empty mapping.
pub fn load_url_overrides(path: &Path) -> Result<BTreeMap<String, UrlOverride>> {
    if !path.exists() {
        debug!(path = %path.display(), "override file absent, using empty mapping");
        return Ok(BTreeMap::new());
    }
    let raw = std::fs::read_to_string(path).map_err(|source| IngestError::OverrideRead {
        path: path.to_path_buf(),
        source,
    })?;
    let overrides: BTreeMap<String, UrlOverride> =
        serde_json::from_str(&raw).map_err(|source| IngestError::OverrideParse {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(overrides = overrides.len(), "loaded url overrides");
    Ok(overrides)
}
