//! Environment-driven configuration for the review core
//!
//! Resolved once at process start and injected into the components that
//! need it.

use crate::generative::GenerativeConfig;
use std::path::PathBuf;

/// Top-level configuration for an analysis service.
#[derive(Debug, Clone)]
pub struct ReviewConfig {
    /// Directory holding the tantivy reference index
    pub index_path: PathBuf,
    /// Generative-service settings (credential may be absent)
    pub generative: GenerativeConfig,
}

impl ReviewConfig {
    /// Load configuration from environment variables.
    ///
    /// Expected variables:
    /// - REVIEW_INDEX_PATH: reference index directory (default ./data/reference_index)
    /// - GEMINI_API_KEY / GEMINI_MODEL / GEMINI_BASE_URL / GEMINI_TIMEOUT_SECS
    pub fn from_env() -> Self {
        let index_path = std::env::var("REVIEW_INDEX_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data/reference_index"));

        Self {
            index_path,
            generative: GenerativeConfig::from_env(),
        }
    }

    pub fn local(index_path: impl Into<PathBuf>) -> Self {
        Self {
            index_path: index_path.into(),
            generative: GenerativeConfig::default(),
        }
    }
}
