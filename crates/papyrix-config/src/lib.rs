//! papyrix-config — Runtime configuration for the Papyrix pipeline.
//!
//! Loaded from a TOML file. Every section and field has a default, so a
//! missing file, a missing section, or a partial section all yield a
//! usable configuration.

use std::path::{Path, PathBuf};

use papyrix_common::{PapyrixError, Result};
use serde::{Deserialize, Serialize};

pub use papyrix_segment::{MatcherConfig, SimilarityMetric};

/// Environment variable naming the config file to load.
pub const CONFIG_ENV_VAR: &str = "PAPYRIX_CONFIG";

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "papyrix.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PapyrixConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub matcher: MatcherConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

// ── Document store ───────────────────────────────────────────────────────────

/// Where collaborator-produced outlines and raw text live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding `<stem>.json` outline / `<stem>.md` raw-text pairs.
    #[serde(default = "default_documents_dir")]
    pub documents_dir: PathBuf,
}

fn default_documents_dir() -> PathBuf {
    PathBuf::from("output")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            documents_dir: default_documents_dir(),
        }
    }
}

// ── Corpus export ────────────────────────────────────────────────────────────

/// Where the built chunk collections are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_sections_path")]
    pub sections_path: PathBuf,

    #[serde(default = "default_abstracts_path")]
    pub abstracts_path: PathBuf,
}

fn default_sections_path() -> PathBuf {
    PathBuf::from("all_sections.json")
}

fn default_abstracts_path() -> PathBuf {
    PathBuf::from("all_abstracts.json")
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            sections_path: default_sections_path(),
            abstracts_path: default_abstracts_path(),
        }
    }
}

// ── Loading ──────────────────────────────────────────────────────────────────

impl PapyrixConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| PapyrixError::Config(format!("read {}: {e}", path.display())))?;
        toml::from_str(&raw)
            .map_err(|e| PapyrixError::Config(format!("parse {}: {e}", path.display())))
    }

    /// Resolve configuration from the usual places, in priority order:
    /// an explicit path, the `PAPYRIX_CONFIG` environment variable, a
    /// `papyrix.toml` in the working directory, built-in defaults.
    ///
    /// An explicitly named file (argument or env var) must exist; only
    /// the working-directory fallback is allowed to be absent.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_toml_file(path);
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_toml_file(Path::new(&path));
        }
        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.exists() {
            return Self::from_toml_file(fallback);
        }
        Ok(Self::default())
    }
}
