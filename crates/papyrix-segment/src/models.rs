//! Data models for outline input and chunk output.

use serde::{Deserialize, Serialize};

/// Structured outline of one document, produced by the external
/// extraction service. Field names mirror the extraction JSON exactly;
/// every field is optional on the wire and defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentOutline {
    #[serde(rename = "Title", default)]
    pub title: String,
    /// Authors in the order they are mentioned.
    #[serde(rename = "Authors", default)]
    pub authors: Vec<String>,
    #[serde(rename = "Abstract", default)]
    pub abstract_text: String,
    #[serde(rename = "Keywords", default)]
    pub keywords: Vec<String>,
    /// Section titles in document order. May repeat or near-duplicate;
    /// the segmenter matches them as given.
    #[serde(rename = "Sections", default)]
    pub sections: Vec<String>,
}

/// Flattened form of an outline: list fields joined into single strings,
/// ready to be attached to chunks as metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedMetadata {
    pub title: String,
    pub authors: String,
    pub abstract_text: String,
    pub keywords: String,
    pub sections: String,
}

impl SimplifiedMetadata {
    /// Delimiter used when flattening list fields.
    pub const JOIN_DELIMITER: &'static str = ", ";

    pub fn from_outline(outline: &DocumentOutline) -> Self {
        Self {
            title: outline.title.clone(),
            authors: outline.authors.join(Self::JOIN_DELIMITER),
            abstract_text: outline.abstract_text.clone(),
            keywords: outline.keywords.join(Self::JOIN_DELIMITER),
            sections: outline.sections.join(Self::JOIN_DELIMITER),
        }
    }
}

/// Label attached to preamble text found before the first located section.
pub const DOCUMENT_HEADER_LABEL: &str = "Document_header";

/// One retrievable span of document text, labeled with its section.
///
/// Carries exactly the metadata the embedding/storage collaborator needs;
/// no further derivation happens downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionChunk {
    pub section_title: String,
    pub document_title: String,
    pub authors: String,
    pub content: String,
}

/// One document's abstract, carried with the outline metadata minus the
/// abstract field itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbstractChunk {
    pub title: String,
    pub authors: String,
    pub keywords: String,
    pub sections: String,
    pub content: String,
}
