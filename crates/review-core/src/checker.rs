//! Per-clause orchestration: heuristics, retrieval, generative findings,
//! and dedup merge

use crate::findings::{FindingsClient, ModelFindings, SkipReason};
use crate::reference::ReferenceIndex;
use clause_engine::ClauseRuleEngine;
use shared_types::Issue;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Passages retrieved per clause
pub const RETRIEVAL_K: usize = 4;

/// Clause checker: combines the heuristic rule engine, the reference
/// index and the generative findings client into one issue list per
/// clause.
///
/// Never fails: retrieval and generative failures degrade to the
/// heuristic findings for that clause.
pub struct ClauseChecker {
    engine: ClauseRuleEngine,
    index: ReferenceIndex,
    findings: FindingsClient,
}

impl ClauseChecker {
    pub fn new(index: ReferenceIndex, findings: FindingsClient) -> Self {
        Self {
            engine: ClauseRuleEngine::new(),
            index,
            findings,
        }
    }

    /// Check one clause and return its merged, deduplicated issue list.
    ///
    /// Heuristic issues come first in rule order; model issues are
    /// appended in model order unless their `issue` text is already
    /// present (exact case-sensitive match, no fuzzy merging).
    pub async fn check(&self, clause_text: &str, paragraph_index: usize) -> Vec<Issue> {
        let mut issues = self.engine.evaluate(clause_text, paragraph_index);

        let retrieval = self.index.retrieve(clause_text, RETRIEVAL_K, None).await;
        if let Some(reason) = &retrieval.degraded {
            warn!(paragraph_index, "retrieval degraded for clause: {reason}");
        }
        let context = retrieval.context_block();

        match self
            .findings
            .analyze_clause(clause_text, paragraph_index, &context)
            .await
        {
            ModelFindings::Found(model_issues) => {
                let mut seen: HashSet<String> =
                    issues.iter().map(|i| i.issue.clone()).collect();
                for issue in model_issues {
                    if seen.insert(issue.issue.clone()) {
                        issues.push(issue);
                    }
                }
            }
            ModelFindings::Skipped(SkipReason::MissingCredential) => {
                debug!(paragraph_index, "generative pass disabled, heuristics only");
            }
            ModelFindings::Skipped(reason) => {
                warn!(paragraph_index, "generative pass skipped: {reason}");
            }
        }

        issues
    }
}
