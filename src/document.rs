// Article records as they flow through the pipeline.
//
// A Document is created by an upstream collector (scraper, feed reader, a
// JSON file on disk — see `ingest`) and its `content` field is rewritten in
// place by the normalizer. There is no stable external id: a document's
// identity is its position in the batch.

use serde::{Deserialize, Serialize};

/// Placeholder values substituted for fields an upstream collector failed to
/// extract. Substituting instead of dropping keeps the batch size stable, so
/// one bad source page doesn't silently shrink the comparison pool.
pub const TITLE_UNAVAILABLE: &str = "Title unavailable";
pub const CONTENT_UNAVAILABLE: &str = "Content unavailable";
pub const SOURCE_UNAVAILABLE: &str = "Source unavailable";
pub const DATE_UNAVAILABLE: &str = "Date unavailable";

/// A single news article. `content` starts raw (possibly with HTML-derived
/// whitespace noise) and is replaced by its normalized form during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub date: String,
}

impl Document {
    /// Replace missing or blank fields with explicit placeholder values.
    pub fn fill_placeholders(&mut self) {
        fill(&mut self.title, TITLE_UNAVAILABLE);
        fill(&mut self.content, CONTENT_UNAVAILABLE);
        fill(&mut self.source, SOURCE_UNAVAILABLE);
        fill(&mut self.date, DATE_UNAVAILABLE);
    }
}

fn fill(field: &mut String, placeholder: &str) {
    if field.trim().is_empty() {
        *field = placeholder.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_placeholders_blank_fields() {
        let mut doc = Document {
            title: "  ".to_string(),
            content: String::new(),
            source: "Le Monde".to_string(),
            date: String::new(),
        };
        doc.fill_placeholders();
        assert_eq!(doc.title, TITLE_UNAVAILABLE);
        assert_eq!(doc.content, CONTENT_UNAVAILABLE);
        assert_eq!(doc.source, "Le Monde");
        assert_eq!(doc.date, DATE_UNAVAILABLE);
    }

    #[test]
    fn test_fill_placeholders_keeps_populated_fields() {
        let mut doc = Document {
            title: "COP16".to_string(),
            content: "Un accord mondial".to_string(),
            source: "RFI".to_string(),
            date: "2024-12-14".to_string(),
        };
        let before = doc.clone();
        doc.fill_placeholders();
        assert_eq!(doc, before);
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_empty() {
        let doc: Document = serde_json::from_str(r#"{"title": "A"}"#).unwrap();
        assert_eq!(doc.title, "A");
        assert!(doc.content.is_empty());
        assert!(doc.source.is_empty());
        assert!(doc.date.is_empty());
    }
}
