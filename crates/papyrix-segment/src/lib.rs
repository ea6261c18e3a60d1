//! papyrix-segment — Outline re-alignment and section chunking.
//!
//! The core of Papyrix: given the section titles an extraction service
//! believes a document has, and the document's raw lines, recover where
//! each section actually starts and carve the document into labeled,
//! non-overlapping chunks:
//! - Title matching ([`matcher`]): approximate, forward-only line search
//! - Segmentation ([`segmenter`]): ordered span discovery, chunk emission
//! - Data models ([`models`]): outline input, chunk output
//!
//! Everything in this crate is pure and synchronous; all I/O lives in
//! `papyrix-corpus`.

pub mod matcher;
pub mod models;
pub mod segmenter;

pub use matcher::{find_best_match, MatcherConfig, SimilarityMetric};
pub use models::{
    AbstractChunk, DocumentOutline, SectionChunk, SimplifiedMetadata, DOCUMENT_HEADER_LABEL,
};
pub use segmenter::segment_document;
