pub mod document;
pub mod overrides;
pub mod records;
pub mod statement;

pub use document::{DocType, SourceDocument};
pub use overrides::UrlOverride;
pub use records::{PolicySourceRecord, TaxonomyMappingRecord, UrlCheckRecord, UrlKind};
pub use statement::{PolicyStatement, StageLink};
