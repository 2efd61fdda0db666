//! BioC-flavoured wire models for the PubTator3 API.
//!
//! Upstream payloads are trustworthy but imperfect: fields go missing,
//! offsets fall out of range, identifiers are placeholders. Every field that
//! can be absent on the wire is an `Option` with `#[serde(default)]` so a
//! sparse document deserializes instead of failing the whole response.

use serde::Deserialize;

/// A document identifier as it appears on the wire.
///
/// The live API serves PMIDs as JSON numbers; older captures and some
/// mirrors serve them as strings. Decoded by trying each shape in turn.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Number(u64),
    Text(String),
}

impl IdValue {
    /// Normalized string form of the identifier
    pub fn as_string(&self) -> String {
        match self {
            IdValue::Number(n) => n.to_string(),
            IdValue::Text(s) => s.clone(),
        }
    }
}

/// Response envelope of the search call: `{"total": n, "results": [...]}`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

/// A single search result; only the PMID is consumed downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub pmid: Option<IdValue>,
}

/// Response envelope of the export call: `{"PubTator3": [...]}`
///
/// The bare-list shape (a top-level JSON array of documents) is the
/// fallback, decoded directly as `Vec<BioCDocument>`.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportEnvelope {
    #[serde(rename = "PubTator3")]
    pub documents: Vec<BioCDocument>,
}

/// One literature document with its annotated passages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BioCDocument {
    #[serde(default)]
    pub id: Option<IdValue>,
    #[serde(default)]
    pub passages: Option<Vec<BioCPassage>>,
}

impl BioCDocument {
    /// Normalized document identifier, empty if absent
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(IdValue::as_string).unwrap_or_default()
    }
}

/// A text fragment of a document (title, abstract, ...) with annotations
/// whose offsets are expressed in this passage's own coordinate space
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BioCPassage {
    #[serde(default)]
    pub infons: Option<Infons>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub annotations: Option<Vec<Annotation>>,
}

impl BioCPassage {
    /// The passage's semantic role (`"title"`, `"abstract"`, ...), if any
    pub fn role(&self) -> Option<&str> {
        self.infons.as_ref().and_then(|i| i.kind.as_deref())
    }

    fn has_role(&self, role: &str) -> bool {
        self.role().is_some_and(|r| r.eq_ignore_ascii_case(role))
    }

    pub fn is_title(&self) -> bool {
        self.has_role("title")
    }

    pub fn is_abstract(&self) -> bool {
        self.has_role("abstract")
    }
}

/// An entity mention tagged within a passage
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Annotation {
    #[serde(default)]
    pub locations: Option<Vec<Location>>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub infons: Option<Infons>,
}

/// An (offset, length) pair in the owning passage's coordinate space.
///
/// Signed on the wire: a malformed negative value is discarded as a
/// degenerate location instead of failing the whole parse.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub length: Option<i64>,
}

/// Side-band metadata: the entity type of an annotation or the role of a
/// passage, the normalized identifier, and the upstream validity verdict
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Infons {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub identifier: Option<String>,
    /// Absent means valid
    #[serde(default)]
    pub valid: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_value_number_and_text() {
        let n: IdValue = serde_json::from_str("36113772").unwrap();
        assert_eq!(n.as_string(), "36113772");

        let s: IdValue = serde_json::from_str("\"36113772\"").unwrap();
        assert_eq!(s.as_string(), "36113772");
    }

    #[test]
    fn test_sparse_document_deserializes() {
        let doc: BioCDocument = serde_json::from_str(r#"{"id": "123"}"#).unwrap();
        assert_eq!(doc.id_string(), "123");
        assert!(doc.passages.is_none());
    }

    #[test]
    fn test_passage_roles_case_insensitive() {
        let passage: BioCPassage = serde_json::from_str(
            r#"{"infons": {"type": "TITLE"}, "text": "A title"}"#,
        )
        .unwrap();
        assert!(passage.is_title());
        assert!(!passage.is_abstract());
    }

    #[test]
    fn test_annotation_with_unknown_fields() {
        let ann: Annotation = serde_json::from_str(
            r#"{
                "id": "1",
                "text": "APOE4",
                "infons": {"type": "Gene", "identifier": "HGNC:613", "ncbi_homologene": "30951"},
                "locations": [{"offset": 0, "length": 5}]
            }"#,
        )
        .unwrap();
        assert_eq!(ann.text.as_deref(), Some("APOE4"));
        let infons = ann.infons.unwrap();
        assert_eq!(infons.kind.as_deref(), Some("Gene"));
        assert_eq!(infons.identifier.as_deref(), Some("HGNC:613"));
        assert!(infons.valid.is_none());
    }

    #[test]
    fn test_negative_location_survives_parsing() {
        let loc: Location = serde_json::from_str(r#"{"offset": -3, "length": 5}"#).unwrap();
        assert_eq!(loc.offset, Some(-3));
        assert_eq!(loc.length, Some(5));
    }
}
