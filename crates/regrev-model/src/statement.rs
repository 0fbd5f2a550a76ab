//! Policy statement types read from the source-of-record store.

/// One atomic regulatory obligation extracted from a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyStatement {
    pub id: String,
    pub topic_category: Option<String>,
    pub sub_category: Option<String>,
    /// The document this statement was extracted from, when known.
    pub source_document_id: Option<String>,
}

/// One row of the statement-to-lifecycle-stage link table. Link rows are
/// kept in table order so stage fan-out preserves association order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageLink {
    pub policy_statement_id: String,
    pub lifecycle_stage: String,
}
