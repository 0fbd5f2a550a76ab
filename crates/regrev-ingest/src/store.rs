//! Read-only queries against the source-of-record store.

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use regrev_model::{DocType, PolicyStatement, SourceDocument, StageLink};

use crate::error::{IngestError, Result};

/// Open the source store. The file must already exist; this never creates
/// an empty database.
pub fn open_source_store(path: &Path) -> Result<Connection> {
    if !path.exists() {
        return Err(IngestError::StoreNotFound {
            path: path.to_path_buf(),
        });
    }
    Connection::open(path).map_err(|source| IngestError::StoreOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Read all source documents ordered by identifier.
pub fn read_source_documents(conn: &Connection) -> Result<Vec<SourceDocument>> {
    let mut statement = conn.prepare(
        "SELECT id, document_type, official_name, short_name, version, source_url, env_url \
         FROM source_documents ORDER BY id",
    )?;
    let documents = statement
        .query_map([], |row| {
            Ok(SourceDocument {
                id: row.get(0)?,
                doc_type: row
                    .get::<_, Option<String>>(1)?
                    .map(|raw| DocType::parse(&raw)),
                official_name: row.get(2)?,
                short_name: row.get(3)?,
                version: row.get(4)?,
                source_url: row.get(5)?,
                env_url: row.get(6)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(documents = documents.len(), "read source documents");
    Ok(documents)
}

/// Read all policy statements ordered by identifier.
pub fn read_policy_statements(conn: &Connection) -> Result<Vec<PolicyStatement>> {
    let mut statement = conn.prepare(
        "SELECT id, topic_category, sub_category, source_document_id \
         FROM policy_statements ORDER BY id",
    )?;
    let statements = statement
        .query_map([], |row| {
            Ok(PolicyStatement {
                id: row.get(0)?,
                topic_category: row.get(1)?,
                sub_category: row.get(2)?,
                source_document_id: row.get(3)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    debug!(statements = statements.len(), "read policy statements");
    Ok(statements)
}

/// Read the statement-to-stage link table in stored order.
pub fn read_stage_links(conn: &Connection) -> Result<Vec<StageLink>> {
    let mut statement = conn.prepare(
        "SELECT policy_statement_id, lifecycle_stage FROM policy_statement_lifecycle_stages",
    )?;
    let links = statement
        .query_map([], |row| {
            Ok(StageLink {
                policy_statement_id: row.get(0)?,
                lifecycle_stage: row.get(1)?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(links)
}

/// Read topic category descriptions keyed by category code.
pub fn read_topic_labels(conn: &Connection) -> Result<BTreeMap<String, String>> {
    read_label_table(conn, "SELECT category, description FROM topic_categories")
}

/// Read lifecycle stage descriptions keyed by stage code.
pub fn read_stage_labels(conn: &Connection) -> Result<BTreeMap<String, String>> {
    read_label_table(conn, "SELECT stage, description FROM lifecycle_stages")
}

fn read_label_table(conn: &Connection, sql: &str) -> Result<BTreeMap<String, String>> {
    let mut statement = conn.prepare(sql)?;
    let labels = statement
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            ))
        })?
        .collect::<std::result::Result<BTreeMap<_, _>, _>>()?;
    Ok(labels)
}
