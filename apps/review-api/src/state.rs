//! Application state for the review server
//!
//! Holds the shared reference store and the review pipeline built from
//! configuration resolved once at startup.

use anyhow::Result;
use review_core::{
    ClauseChecker, FindingsClient, ReferenceIndex, ReviewConfig, ReviewPipeline,
    TantivyReferenceStore,
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Shared application state
pub struct AppState {
    /// Reference corpus index (concurrent reads are safe)
    pub store: Arc<TantivyReferenceStore>,
    /// Review pipeline over the shared store
    pub pipeline: ReviewPipeline,
    /// Whether the generative pass is configured or running degraded
    pub generative_enabled: bool,
    /// Tantivy allows a single writer at a time; ingest is serialized
    pub write_guard: Mutex<()>,
}

impl AppState {
    /// Initialize application state from environment configuration.
    pub fn new() -> Result<Self> {
        let config = ReviewConfig::from_env();
        info!("Opening reference index at {:?}", config.index_path);
        let store = Arc::new(TantivyReferenceStore::open_or_create(&config.index_path)?);

        let generative_enabled = config.generative.has_credential();
        if !generative_enabled {
            info!("No generative-service credential configured; running heuristics-only");
        }

        let index = ReferenceIndex::new(store.clone());
        let findings = FindingsClient::from_config(&config.generative)?;
        let pipeline = ReviewPipeline::new(ClauseChecker::new(index, findings));

        Ok(Self {
            store,
            pipeline,
            generative_enabled,
            write_guard: Mutex::new(()),
        })
    }
}
