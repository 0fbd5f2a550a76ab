//! Taxonomy export: fan-out of policy statements across lifecycle stages.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use regrev_model::{
    PolicyStatement, SourceDocument, StageLink, TaxonomyMappingRecord, UrlOverride,
};

use crate::citation::resolve_citation;

/// Map policy statements to taxonomy records: one record per
/// (statement, linked stage) pair, in statement order outer and stage
/// association order inner. A statement with no linked stages still emits
/// one record with blank stage columns.
pub fn export_taxonomy_mapping(
    statements: &[PolicyStatement],
    stage_links: &[StageLink],
    topic_labels: &BTreeMap<String, String>,
    stage_labels: &BTreeMap<String, String>,
    documents: &[SourceDocument],
    overrides: &BTreeMap<String, UrlOverride>,
) -> Vec<TaxonomyMappingRecord> {
    // Group link rows per statement preserving table order, which is the
    // order stages were associated.
    let mut stages_by_statement: HashMap<&str, Vec<&str>> = HashMap::new();
    for link in stage_links {
        stages_by_statement
            .entry(link.policy_statement_id.as_str())
            .or_default()
            .push(link.lifecycle_stage.as_str());
    }
    let documents_by_id: HashMap<&str, &SourceDocument> =
        documents.iter().map(|d| (d.id.as_str(), d)).collect();

    let mut records = Vec::new();
    for statement in statements {
        let stages = stages_by_statement
            .get(statement.id.as_str())
            .cloned()
            .unwrap_or_else(|| vec![""]);

        let source_document_id = statement.source_document_id.as_deref().unwrap_or("");
        let document = documents_by_id.get(source_document_id);
        let citation_label = resolve_citation(
            document.and_then(|d| d.official_name.as_deref()),
            document.and_then(|d| d.short_name.as_deref()),
            source_document_id,
            overrides
                .get(source_document_id)
                .and_then(|o| o.citation_label.as_deref()),
        );

        let topic_id = statement.topic_category.as_deref().unwrap_or("");
        let topic_label = if topic_id.is_empty() {
            String::new()
        } else {
            topic_labels.get(topic_id).cloned().unwrap_or_default()
        };
        let sub_category = statement.sub_category.as_deref().unwrap_or("");

        for stage_id in stages {
            let stage_label = if stage_id.is_empty() {
                String::new()
            } else {
                stage_labels.get(stage_id).cloned().unwrap_or_default()
            };
            records.push(TaxonomyMappingRecord {
                internal_requirement_id: statement.id.clone(),
                stage_id: stage_id.to_string(),
                stage_label,
                topic_id: topic_id.to_string(),
                topic_label: topic_label.clone(),
                subtopic_id: sub_category.to_string(),
                subtopic_label: sub_category.to_string(),
                code: source_document_id.to_string(),
                citation_label: citation_label.clone(),
                notes: String::new(),
            });
        }
    }
    debug!(records = records.len(), "exported taxonomy mapping records");
    records
}
