//! papyrix-common — Shared error types used across all Papyrix crates.

pub mod error;

pub use error::{PapyrixError, Result};
