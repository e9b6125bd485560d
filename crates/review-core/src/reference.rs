//! Reference index adapter over a nearest-neighbor text index
//!
//! The underlying index is a black box behind [`SimilaritySearch`]; this
//! adapter normalizes its hits into [`ReferencePassage`] values (bounded
//! snippet length, defaulted metadata) and never fails the caller:
//! internal errors degrade to an empty passage list with a recorded
//! reason, so clause checking can always proceed heuristics-only.

use async_trait::async_trait;
use shared_types::ReferencePassage;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

/// Maximum passage length carried into a prompt, ellipsis excluded
pub const SNIPPET_MAX_LEN: usize = 1000;

/// One raw hit from the underlying index, in descending similarity order.
#[derive(Debug, Clone)]
pub struct RawPassage {
    pub content: String,
    pub metadata: HashMap<String, String>,
}

/// Nearest-neighbor search boundary consumed by the reference index.
#[async_trait]
pub trait SimilaritySearch: Send + Sync {
    async fn similarity_search(&self, query: &str, k: usize) -> anyhow::Result<Vec<RawPassage>>;
}

/// Outcome of a retrieval attempt. `degraded` carries the reason when the
/// underlying index failed and the passage list is empty because of it.
#[derive(Debug, Clone, Default)]
pub struct RetrievalOutcome {
    pub passages: Vec<ReferencePassage>,
    pub degraded: Option<String>,
}

impl RetrievalOutcome {
    /// Assemble the prompt context: `Source: <src>\n<snippet>` per passage,
    /// blank-line separated. Empty string when there are no passages.
    pub fn context_block(&self) -> String {
        self.passages
            .iter()
            .map(|p| format!("Source: {}\n{}", p.source, p.text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Read-only adapter over the shared reference corpus index.
#[derive(Clone)]
pub struct ReferenceIndex {
    inner: Arc<dyn SimilaritySearch>,
}

impl ReferenceIndex {
    pub fn new(inner: Arc<dyn SimilaritySearch>) -> Self {
        Self { inner }
    }

    /// Fetch the top-k passages for a query.
    ///
    /// `category_filter` narrows results to hits carrying matching category
    /// metadata; hits without category metadata pass through unfiltered
    /// (an index that doesn't support categories is silently accepted).
    pub async fn retrieve(
        &self,
        query: &str,
        k: usize,
        category_filter: Option<&str>,
    ) -> RetrievalOutcome {
        let hits = match self.inner.similarity_search(query, k).await {
            Ok(hits) => hits,
            Err(err) => {
                warn!("reference retrieval failed, continuing without context: {err:#}");
                return RetrievalOutcome {
                    passages: Vec::new(),
                    degraded: Some(err.to_string()),
                };
            }
        };

        let passages = hits
            .into_iter()
            .filter(|hit| match (category_filter, hit.metadata.get("category")) {
                (Some(wanted), Some(got)) => wanted == got,
                _ => true,
            })
            .map(|hit| {
                let source = hit
                    .metadata
                    .get("source")
                    .or_else(|| hit.metadata.get("url"))
                    .cloned()
                    .unwrap_or_else(|| "unknown".to_string());
                ReferencePassage {
                    source,
                    text: clean_snippet(&hit.content),
                    category: hit.metadata.get("category").cloned(),
                }
            })
            .collect();

        RetrievalOutcome {
            passages,
            degraded: None,
        }
    }
}

/// Trim and bound a passage to `SNIPPET_MAX_LEN` characters, marking
/// truncation with an ellipsis.
fn clean_snippet(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() > SNIPPET_MAX_LEN {
        let cut: String = trimmed.chars().take(SNIPPET_MAX_LEN).collect();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
