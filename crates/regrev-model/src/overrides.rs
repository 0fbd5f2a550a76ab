//! Manually curated URL and citation overrides.

use serde::{Deserialize, Serialize};

/// Per-document override record supplied out-of-band as a JSON mapping
/// keyed by source document id. Every present field shadows the derived
/// value for the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlOverride {
    #[serde(default)]
    pub landing_page_url: Option<String>,
    #[serde(default)]
    pub document_url: Option<String>,
    #[serde(default)]
    pub citation_label: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}
