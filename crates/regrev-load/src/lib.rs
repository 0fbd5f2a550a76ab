//! Target-store loading.
//!
//! Policy sources are upserted by natural key so repeated loads overwrite
//! rather than duplicate; the taxonomy table is disposable and rebuilt by
//! truncate-then-insert. Both loads run inside one transaction: a failure
//! partway leaves the target store unchanged.

pub mod error;
pub mod schema;

use std::path::Path;

use rusqlite::Connection;
use tracing::info;

use regrev_model::{PolicySourceRecord, TaxonomyMappingRecord};

pub use error::{LoadError, Result};
pub use schema::ensure_schema;

/// Row counts from a completed load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub policy_sources: usize,
    pub taxonomy_rows: usize,
}

/// Open the target store. The file must already exist; schema bootstrap
/// inside it is still create-if-absent.
pub fn open_target_store(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(LoadError::TargetNotFound {
            path: path.to_path_buf(),
        });
    }
    Connection::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Empty or whitespace-only CSV cells become SQL NULL.
fn normalize(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Insert or overwrite policy-source rows keyed by `source_id`.
///
/// Every non-key column is replaced on conflict and `updated_at` is
/// refreshed; `created_at` keeps its original value. Returns the number of
/// rows processed.
pub fn upsert_policy_sources(conn: &Connection, rows: &[PolicySourceRecord]) -> Result<usize> {
    let mut statement = conn.prepare(
        "INSERT INTO policy_sources (
             source_id, title, doc_type, issuing_body, jurisdiction,
             citation_label, code, landing_page_url, document_url,
             last_updated, version, notes, updated_at
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, datetime('now'))
         ON CONFLICT(source_id) DO UPDATE SET
             title = excluded.title,
             doc_type = excluded.doc_type,
             issuing_body = excluded.issuing_body,
             jurisdiction = excluded.jurisdiction,
             citation_label = excluded.citation_label,
             code = excluded.code,
             landing_page_url = excluded.landing_page_url,
             document_url = excluded.document_url,
             last_updated = excluded.last_updated,
             version = excluded.version,
             notes = excluded.notes,
             updated_at = datetime('now')",
    )?;
    for row in rows {
        statement.execute(rusqlite::params![
            normalize(&row.source_id),
            normalize(&row.title).unwrap_or(""),
            normalize(&row.doc_type),
            normalize(&row.issuing_body),
            normalize(&row.jurisdiction),
            normalize(&row.citation_label),
            normalize(&row.code),
            normalize(&row.landing_page_url),
            normalize(&row.document_url),
            normalize(&row.last_updated),
            normalize(&row.version),
            normalize(&row.notes),
        ])?;
    }
    Ok(rows.len())
}

/// Rebuild the taxonomy table: optionally delete all existing rows, then
/// insert every row unconditionally. Returns the number of rows inserted.
pub fn replace_taxonomy(
    conn: &Connection,
    rows: &[TaxonomyMappingRecord],
    truncate: bool,
) -> Result<usize> {
    if truncate {
        conn.execute("DELETE FROM taxonomy_mapping", [])?;
    }
    let mut statement = conn.prepare(
        "INSERT INTO taxonomy_mapping (
             internal_requirement_id, stage_id, stage_label,
             topic_id, topic_label, subtopic_id, subtopic_label,
             code, citation_label, notes
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
    )?;
    for row in rows {
        statement.execute(rusqlite::params![
            normalize(&row.internal_requirement_id),
            normalize(&row.stage_id),
            normalize(&row.stage_label),
            normalize(&row.topic_id),
            normalize(&row.topic_label),
            normalize(&row.subtopic_id),
            normalize(&row.subtopic_label),
            normalize(&row.code),
            normalize(&row.citation_label),
            normalize(&row.notes),
        ])?;
    }
    Ok(rows.len())
}

/// Load both artifacts inside one transaction.
pub fn load_all(
    conn: &mut Connection,
    policy_sources: &[PolicySourceRecord],
    taxonomy_rows: &[TaxonomyMappingRecord],
    truncate_taxonomy: bool,
) -> Result<LoadSummary> {
    let tx = conn.transaction()?;
    let policy_count = upsert_policy_sources(&tx, policy_sources)?;
    let taxonomy_count = replace_taxonomy(&tx, taxonomy_rows, truncate_taxonomy)?;
    tx.commit()?;
    info!(
        policy_sources = policy_count,
        taxonomy_rows = taxonomy_count,
        "load committed"
    );
    Ok(LoadSummary {
        policy_sources: policy_count,
        taxonomy_rows: taxonomy_count,
    })
}
