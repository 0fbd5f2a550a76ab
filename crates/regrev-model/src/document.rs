//! Source document types read from the source-of-record store.

/// Document type classification carried by the source store.
///
/// The first seven variants are issued by the provincial government; any
/// unrecognized value is carried verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocType {
    Act,
    Regulation,
    RegulationSchedule,
    Protocol,
    Procedure,
    TechnicalGuidance,
    WebContent,
    Other(String),
}

impl DocType {
    pub fn parse(raw: &str) -> DocType {
        match raw {
            "ACT" => DocType::Act,
            "REGULATION" => DocType::Regulation,
            "REGULATION_SCHEDULE" => DocType::RegulationSchedule,
            "PROTOCOL" => DocType::Protocol,
            "PROCEDURE" => DocType::Procedure,
            "TECHNICAL_GUIDANCE" => DocType::TechnicalGuidance,
            "WEB_CONTENT" => DocType::WebContent,
            other => DocType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DocType::Act => "ACT",
            DocType::Regulation => "REGULATION",
            DocType::RegulationSchedule => "REGULATION_SCHEDULE",
            DocType::Protocol => "PROTOCOL",
            DocType::Procedure => "PROCEDURE",
            DocType::TechnicalGuidance => "TECHNICAL_GUIDANCE",
            DocType::WebContent => "WEB_CONTENT",
            DocType::Other(raw) => raw,
        }
    }

    /// True for the document types issued by the provincial government.
    pub fn is_government(&self) -> bool {
        !matches!(self, DocType::Other(_))
    }
}

/// One regulatory document tracked by the source store. Read-only input to
/// the exporters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Unique identifier, also used as the natural key downstream.
    pub id: String,
    pub doc_type: Option<DocType>,
    /// Long official title.
    pub official_name: Option<String>,
    /// Curated short title; wins over any derived citation label.
    pub short_name: Option<String>,
    pub version: Option<String>,
    pub source_url: Option<String>,
    /// Alternate landing page on the environment site, preferred over
    /// `source_url` when present.
    pub env_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_type_round_trips_known_values() {
        for raw in [
            "ACT",
            "REGULATION",
            "REGULATION_SCHEDULE",
            "PROTOCOL",
            "PROCEDURE",
            "TECHNICAL_GUIDANCE",
            "WEB_CONTENT",
        ] {
            let parsed = DocType::parse(raw);
            assert_eq!(parsed.as_str(), raw);
            assert!(parsed.is_government());
        }
    }

    #[test]
    fn doc_type_unknown_is_carried_verbatim() {
        let parsed = DocType::parse("GUIDANCE_NOTE");
        assert_eq!(parsed, DocType::Other("GUIDANCE_NOTE".to_string()));
        assert_eq!(parsed.as_str(), "GUIDANCE_NOTE");
        assert!(!parsed.is_government());
    }
}
