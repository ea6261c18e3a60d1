//! Corpus sinks: the write side of the pipeline.
//!
//! Embedding and vector-store persistence happen outside this system;
//! the sink trait is the narrow surface those collaborators implement.
//! The JSON file sink ships both collections as plain arrays for
//! downstream indexing.

use std::path::PathBuf;

use async_trait::async_trait;
use papyrix_common::Result;
use papyrix_segment::{AbstractChunk, SectionChunk};
use tracing::info;

/// Write interface for a built corpus.
#[async_trait]
pub trait CorpusSink: Send + Sync {
    async fn store_sections(&self, chunks: &[SectionChunk]) -> Result<()>;
    async fn store_abstracts(&self, chunks: &[AbstractChunk]) -> Result<()>;
}

/// Writes each collection as a pretty-printed JSON array.
pub struct JsonFileSink {
    sections_path: PathBuf,
    abstracts_path: PathBuf,
}

impl JsonFileSink {
    pub fn new(sections_path: impl Into<PathBuf>, abstracts_path: impl Into<PathBuf>) -> Self {
        Self {
            sections_path: sections_path.into(),
            abstracts_path: abstracts_path.into(),
        }
    }
}

#[async_trait]
impl CorpusSink for JsonFileSink {
    async fn store_sections(&self, chunks: &[SectionChunk]) -> Result<()> {
        let body = serde_json::to_vec_pretty(chunks)?;
        tokio::fs::write(&self.sections_path, body).await?;
        info!(
            path = %self.sections_path.display(),
            chunks = chunks.len(),
            "Section chunks written"
        );
        Ok(())
    }

    async fn store_abstracts(&self, chunks: &[AbstractChunk]) -> Result<()> {
        let body = serde_json::to_vec_pretty(chunks)?;
        tokio::fs::write(&self.abstracts_path, body).await?;
        info!(
            path = %self.abstracts_path.display(),
            chunks = chunks.len(),
            "Abstract chunks written"
        );
        Ok(())
    }
}
