//! papyrix — corpus build entry point.
//!
//! Reads every outline/raw-text pair from the configured documents
//! directory, re-aligns outlines against the text, and writes the two
//! chunk collections as JSON for the embedding/indexing collaborator.
//!
//! Usage: `papyrix [config.toml]`. Config resolution order: CLI
//! argument, `PAPYRIX_CONFIG`, `./papyrix.toml`, built-in defaults.

use std::path::PathBuf;

use anyhow::Context;
use papyrix_config::PapyrixConfig;
use papyrix_corpus::{build_corpus, CorpusSink, FsDocumentStore, JsonFileSink};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = PapyrixConfig::resolve(config_path.as_deref())
        .context("failed to load configuration")?;

    info!(
        documents_dir = %config.store.documents_dir.display(),
        min_score = config.matcher.min_score,
        "Papyrix starting"
    );

    let store = FsDocumentStore::new(&config.store.documents_dir);
    let result = build_corpus(&store, &config.matcher)
        .await
        .context("corpus build failed")?;

    let sink = JsonFileSink::new(&config.export.sections_path, &config.export.abstracts_path);
    sink.store_sections(&result.corpus.section_chunks)
        .await
        .context("failed to write section chunks")?;
    sink.store_abstracts(&result.corpus.abstract_chunks)
        .await
        .context("failed to write abstract chunks")?;

    // Skipped documents are partial-result territory, not a run failure.
    if !result.summary.errors.is_empty() {
        info!(
            skipped = result.summary.documents_skipped,
            "Corpus built with skipped documents"
        );
    }

    Ok(())
}
