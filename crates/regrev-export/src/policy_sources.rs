//! Policy-source export: one normalized record per source document.

use std::collections::BTreeMap;

use tracing::debug;

use regrev_model::{PolicySourceRecord, SourceDocument, UrlOverride};

use crate::citation::resolve_citation;
use crate::infer::{infer_issuing_body, infer_jurisdiction};
use crate::merge::first_non_empty;

/// Map source documents to policy-source records, preserving input order.
///
/// Callers supply documents already sorted by identifier; this function
/// never reorders them, so repeated runs over unchanged input produce
/// identical output.
pub fn export_policy_sources(
    documents: &[SourceDocument],
    overrides: &BTreeMap<String, UrlOverride>,
) -> Vec<PolicySourceRecord> {
    let default_override = UrlOverride::default();
    let records: Vec<PolicySourceRecord> = documents
        .iter()
        .map(|document| {
            let overridden = overrides.get(&document.id).unwrap_or(&default_override);
            export_one(document, overridden)
        })
        .collect();
    debug!(records = records.len(), "exported policy source records");
    records
}

fn export_one(document: &SourceDocument, overridden: &UrlOverride) -> PolicySourceRecord {
    let issuing_body = infer_issuing_body(&document.id, document.doc_type.as_ref());
    let jurisdiction = infer_jurisdiction(&document.id, &issuing_body);
    let citation_label = resolve_citation(
        document.official_name.as_deref(),
        document.short_name.as_deref(),
        &document.id,
        overridden.citation_label.as_deref(),
    );
    PolicySourceRecord {
        source_id: document.id.clone(),
        title: document.official_name.clone().unwrap_or_default(),
        doc_type: document
            .doc_type
            .as_ref()
            .map(|t| t.as_str().to_string())
            .unwrap_or_default(),
        issuing_body,
        jurisdiction,
        citation_label,
        code: document.id.clone(),
        landing_page_url: first_non_empty([
            overridden.landing_page_url.as_deref(),
            document.env_url.as_deref(),
            document.source_url.as_deref(),
        ]),
        document_url: first_non_empty([overridden.document_url.as_deref()]),
        last_updated: first_non_empty([overridden.last_updated.as_deref()]),
        version: document.version.clone().unwrap_or_default(),
        notes: first_non_empty([overridden.notes.as_deref()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use regrev_model::DocType;

    fn document(id: &str) -> SourceDocument {
        SourceDocument {
            id: id.to_string(),
            doc_type: Some(DocType::Protocol),
            official_name: Some(format!("Protocol 2 for {id}")),
            short_name: None,
            version: Some("v2".to_string()),
            source_url: Some("https://example.org/source".to_string()),
            env_url: None,
        }
    }

    #[test]
    fn derives_all_inferred_fields() {
        let records = export_policy_sources(&[document("EPA_002")], &BTreeMap::new());
        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.source_id, "EPA_002");
        assert_eq!(record.code, "EPA_002");
        assert_eq!(record.doc_type, "PROTOCOL");
        assert_eq!(record.issuing_body, "BC Government");
        assert_eq!(record.jurisdiction, "BC");
        assert_eq!(record.citation_label, "Protocol 2");
        assert_eq!(record.landing_page_url, "https://example.org/source");
        assert_eq!(record.document_url, "");
        assert_eq!(record.last_updated, "");
        assert_eq!(record.version, "v2");
    }

    #[test]
    fn env_url_wins_over_source_url() {
        let mut doc = document("EPA_002");
        doc.env_url = Some("https://env.example.org/landing".to_string());
        let records = export_policy_sources(&[doc], &BTreeMap::new());
        assert_eq!(records[0].landing_page_url, "https://env.example.org/landing");
    }

    #[test]
    fn override_fields_shadow_derived_values() {
        let mut overrides = BTreeMap::new();
        overrides.insert(
            "EPA_002".to_string(),
            UrlOverride {
                landing_page_url: Some("https://curated.example.org".to_string()),
                document_url: Some("https://curated.example.org/doc.pdf".to_string()),
                citation_label: Some("Protocol Two".to_string()),
                last_updated: Some("2024-06-01".to_string()),
                notes: Some("curated".to_string()),
            },
        );
        let records = export_policy_sources(&[document("EPA_002")], &overrides);
        let record = &records[0];
        assert_eq!(record.landing_page_url, "https://curated.example.org");
        assert_eq!(record.document_url, "https://curated.example.org/doc.pdf");
        assert_eq!(record.citation_label, "Protocol Two");
        assert_eq!(record.last_updated, "2024-06-01");
        assert_eq!(record.notes, "curated");
    }

    #[test]
    fn repeated_export_is_identical() {
        let documents = vec![document("EPA_001"), document("EPA_002")];
        let overrides = BTreeMap::new();
        let first = export_policy_sources(&documents, &overrides);
        let second = export_policy_sources(&documents, &overrides);
        assert_eq!(first, second);
        assert_eq!(first[0].source_id, "EPA_001");
        assert_eq!(first[1].source_id, "EPA_002");
    }
}
