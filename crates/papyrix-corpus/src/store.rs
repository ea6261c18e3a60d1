//! Document stores: the read side of the corpus builder.
//!
//! Outlines and raw text are produced by external collaborators (PDF
//! conversion, structured extraction) and land on disk as `<stem>.json`
//! / `<stem>.md` pairs. The store trait keeps that I/O out of the
//! segmentation core and lets tests run against an in-memory store.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use papyrix_common::{PapyrixError, Result};
use papyrix_segment::DocumentOutline;

/// One document's collaborator-supplied inputs.
#[derive(Debug, Clone)]
pub struct StoredDocument {
    /// Store-unique document name (the file stem for filesystem stores).
    pub name: String,
    pub outline: DocumentOutline,
    /// Raw text lines, original terminators preserved.
    pub lines: Vec<String>,
}

/// Read interface over a collection of ingested documents.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Names of all documents that have an outline, in a deterministic
    /// order.
    async fn list(&self) -> Result<Vec<String>>;

    /// Load one document's outline and raw text.
    ///
    /// Returns [`PapyrixError::MissingDocument`] when the raw text for
    /// an existing outline is unavailable.
    async fn load(&self, name: &str) -> Result<StoredDocument>;
}

// ── Filesystem store ─────────────────────────────────────────────────────────

/// Store over a directory of `<stem>.json` outline / `<stem>.md` raw-text
/// pairs, the layout the extraction collaborator writes.
pub struct FsDocumentStore {
    documents_dir: PathBuf,
}

impl FsDocumentStore {
    pub fn new(documents_dir: impl Into<PathBuf>) -> Self {
        Self {
            documents_dir: documents_dir.into(),
        }
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.documents_dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    names.push(stem.to_string());
                }
            }
        }
        // Directory order is platform-dependent; sort so corpus order is
        // stable across runs.
        names.sort();
        Ok(names)
    }

    async fn load(&self, name: &str) -> Result<StoredDocument> {
        let outline_path = self.documents_dir.join(format!("{name}.json"));
        let text_path = self.documents_dir.join(format!("{name}.md"));

        let outline_raw = tokio::fs::read_to_string(&outline_path).await?;
        let outline: DocumentOutline = serde_json::from_str(&outline_raw)?;

        let text = tokio::fs::read_to_string(&text_path).await.map_err(|_| {
            PapyrixError::MissingDocument(format!(
                "raw text not found for {name} ({})",
                text_path.display()
            ))
        })?;
        let lines = text.split_inclusive('\n').map(str::to_string).collect();

        Ok(StoredDocument {
            name: name.to_string(),
            outline,
            lines,
        })
    }
}

// ── In-memory store ──────────────────────────────────────────────────────────

/// In-memory store for tests and for callers that already hold the data.
/// Documents come back in name order; `None` raw text models a document
/// whose conversion output went missing.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: BTreeMap<String, (DocumentOutline, Option<Vec<String>>)>,
}

impl MemoryDocumentStore {
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        outline: DocumentOutline,
        lines: Option<Vec<String>>,
    ) {
        self.documents.insert(name.into(), (outline, lines));
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self) -> Result<Vec<String>> {
        Ok(self.documents.keys().cloned().collect())
    }

    async fn load(&self, name: &str) -> Result<StoredDocument> {
        let (outline, lines) = self
            .documents
            .get(name)
            .ok_or_else(|| PapyrixError::MissingDocument(format!("no outline for {name}")))?;
        let lines = lines
            .clone()
            .ok_or_else(|| PapyrixError::MissingDocument(format!("raw text not found for {name}")))?;
        Ok(StoredDocument {
            name: name.to_string(),
            outline: outline.clone(),
            lines,
        })
    }
}
