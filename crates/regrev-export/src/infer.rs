//! Issuing-body and jurisdiction inference.
//!
//! Derived from the document identifier prefix and document type. The
//! issuing body is computed first and feeds the jurisdiction decision.

use regrev_model::DocType;

/// Infer the organization that issued a document.
///
/// Identifier prefixes win over document type: `CSAP_` documents belong to
/// the CSAP Society and `EXT_` documents to Atlantic PIRI regardless of
/// type. Government document types map to the provincial government;
/// anything else is left blank.
pub fn infer_issuing_body(source_id: &str, doc_type: Option<&DocType>) -> String {
    if source_id.starts_with("CSAP_") {
        return "CSAP Society".to_string();
    }
    if source_id.starts_with("EXT_") {
        return "Atlantic PIRI".to_string();
    }
    if doc_type.is_some_and(DocType::is_government) {
        return "BC Government".to_string();
    }
    String::new()
}

/// Infer the jurisdiction a document applies to, given the issuing body
/// computed by [`infer_issuing_body`].
pub fn infer_jurisdiction(source_id: &str, issuing_body: &str) -> String {
    if issuing_body == "Atlantic PIRI" {
        return "Atlantic".to_string();
    }
    if !issuing_body.is_empty() {
        return "BC".to_string();
    }
    if source_id.starts_with("EXT_") {
        return "Atlantic".to_string();
    }
    String::new()
}
