//! Corpus building: segmentation orchestrated across a document store.
//!
//! Walks every stored document in order, segments it into section
//! chunks, derives one abstract chunk where a non-empty abstract exists,
//! and accumulates both collections. A document that cannot be loaded is
//! recorded and skipped; it never aborts the run, and chunks already
//! produced for other documents are kept.

use std::time::Instant;

use papyrix_segment::{
    segment_document, AbstractChunk, MatcherConfig, SectionChunk, SimplifiedMetadata,
};
use tracing::{debug, info, warn};

use crate::store::DocumentStore;

/// Both chunk collections for one corpus build, document order preserved.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub section_chunks: Vec<SectionChunk>,
    pub abstract_chunks: Vec<AbstractChunk>,
}

/// Counters and non-fatal errors for one run.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct CorpusBuildSummary {
    pub documents_listed: usize,
    pub documents_segmented: usize,
    pub documents_skipped: usize,
    pub section_chunks: usize,
    pub abstract_chunks: usize,
    pub errors: Vec<String>,
    pub duration_ms: u64,
}

/// Outcome of one corpus build.
#[derive(Debug)]
pub struct CorpusBuildResult {
    pub corpus: Corpus,
    pub summary: CorpusBuildSummary,
}

/// Build the full corpus from every document in the store.
///
/// Only a store listing failure propagates as an error; everything
/// per-document is accumulated in the summary instead.
pub async fn build_corpus(
    store: &dyn DocumentStore,
    matcher: &MatcherConfig,
) -> papyrix_common::Result<CorpusBuildResult> {
    let t0 = Instant::now();
    let names = store.list().await?;
    info!(documents = names.len(), "Starting corpus build");

    let mut corpus = Corpus::default();
    let mut summary = CorpusBuildSummary {
        documents_listed: names.len(),
        ..CorpusBuildSummary::default()
    };

    for name in &names {
        let doc = match store.load(name).await {
            Ok(doc) => doc,
            Err(e) => {
                warn!(document = %name, error = %e, "Document skipped");
                summary.documents_skipped += 1;
                summary.errors.push(format!("{name}: {e}"));
                continue;
            }
        };

        let metadata = SimplifiedMetadata::from_outline(&doc.outline);

        let chunks = segment_document(
            &doc.outline.title,
            &doc.lines,
            &doc.outline.sections,
            &metadata,
            matcher,
        );
        debug!(
            document = %name,
            sections = doc.outline.sections.len(),
            chunks = chunks.len(),
            "Document segmented"
        );
        corpus.section_chunks.extend(chunks);

        if !doc.outline.abstract_text.trim().is_empty() {
            corpus.abstract_chunks.push(AbstractChunk {
                title: metadata.title.clone(),
                authors: metadata.authors.clone(),
                keywords: metadata.keywords.clone(),
                sections: metadata.sections.clone(),
                content: doc.outline.abstract_text.clone(),
            });
        }

        summary.documents_segmented += 1;
    }

    summary.section_chunks = corpus.section_chunks.len();
    summary.abstract_chunks = corpus.abstract_chunks.len();
    summary.duration_ms = t0.elapsed().as_millis() as u64;

    info!(
        documents   = summary.documents_segmented,
        skipped     = summary.documents_skipped,
        sections    = summary.section_chunks,
        abstracts   = summary.abstract_chunks,
        duration_ms = summary.duration_ms,
        errors      = summary.errors.len(),
        "Corpus build complete"
    );

    Ok(CorpusBuildResult { corpus, summary })
}
