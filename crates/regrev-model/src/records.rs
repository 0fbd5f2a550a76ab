//! Export record types. Field order here is the column order of the CSV
//! artifacts and the target-store tables.

use serde::{Deserialize, Serialize};

/// One normalized row per source document: the policy-sources artifact and
/// the `policy_sources` target table.
///
/// `citation_label`, `issuing_body` and `jurisdiction` are always populated
/// by the export rules; `code` always equals `source_id` and is kept as a
/// separate column for downstream joins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicySourceRecord {
    pub source_id: String,
    pub title: String,
    pub doc_type: String,
    pub issuing_body: String,
    pub jurisdiction: String,
    pub citation_label: String,
    pub code: String,
    pub landing_page_url: String,
    pub document_url: String,
    pub last_updated: String,
    pub version: String,
    pub notes: String,
}

/// One row per (policy statement, lifecycle stage) pair: the taxonomy
/// artifact and the `taxonomy_mapping` target table. A statement with no
/// linked stages still produces one row with blank stage columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxonomyMappingRecord {
    pub internal_requirement_id: String,
    pub stage_id: String,
    pub stage_label: String,
    pub topic_id: String,
    pub topic_label: String,
    pub subtopic_id: String,
    pub subtopic_label: String,
    pub code: String,
    pub citation_label: String,
    pub notes: String,
}

/// Which URL column of a policy-source row a probe result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlKind {
    DocumentUrl,
    LandingPageUrl,
}

impl UrlKind {
    pub fn as_str(self) -> &'static str {
        match self {
            UrlKind::DocumentUrl => "document_url",
            UrlKind::LandingPageUrl => "landing_page_url",
        }
    }
}

/// One row of the URL-check report artifact. `status` is blank when the
/// probe never received an HTTP status; `error` is blank on success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlCheckRecord {
    pub source_id: String,
    pub url_type: String,
    pub url: String,
    pub status: String,
    pub final_url: String,
    pub error: String,
}
