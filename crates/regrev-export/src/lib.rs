//! Pure export transforms: citation-label resolution, issuing-body and
//! jurisdiction inference, and the two artifact exporters.
//!
//! Nothing in this crate touches the filesystem, network, or a database;
//! it maps already-loaded source rows to output records.

pub mod citation;
pub mod infer;
pub mod merge;
pub mod policy_sources;
pub mod taxonomy;

pub use citation::resolve_citation;
pub use infer::{infer_issuing_body, infer_jurisdiction};
pub use merge::first_non_empty;
pub use policy_sources::export_policy_sources;
pub use taxonomy::export_taxonomy_mapping;
