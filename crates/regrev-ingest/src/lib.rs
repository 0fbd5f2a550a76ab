//! Pipeline input loading: read-only source-store queries and the
//! optional URL-override mapping.

pub mod error;
pub mod overrides;
pub mod store;

pub use error::{IngestError, Result};
pub use overrides::load_url_overrides;
pub use store::{
    open_source_store, read_policy_statements, read_source_documents, read_stage_labels,
    read_stage_links, read_topic_labels,
};
