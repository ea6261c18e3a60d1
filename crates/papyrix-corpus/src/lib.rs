//! papyrix-corpus — Corpus assembly over a document store.
//!
//! Orchestrates the flow around the segmentation core:
//! - list documents in a store
//! - load each outline + raw text pair
//! - segment into section chunks, derive one abstract chunk
//! - aggregate both collections in store order
//! - hand the corpus to a sink for downstream embedding/indexing
//!
//! Per-document failures are logged and skipped; a run only fails when
//! the store itself is unreadable or the sink cannot write.

pub mod builder;
pub mod sink;
pub mod store;

pub use builder::{build_corpus, Corpus, CorpusBuildResult, CorpusBuildSummary};
pub use sink::{CorpusSink, JsonFileSink};
pub use store::{DocumentStore, FsDocumentStore, MemoryDocumentStore, StoredDocument};
