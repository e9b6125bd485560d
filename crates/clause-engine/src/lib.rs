pub mod patterns;
pub mod rules;

use shared_types::Issue;

/// Heuristic clause rule engine.
///
/// Pure pattern-based checks over a single clause's text: no I/O, no model
/// calls, deterministic output. Rule order is fixed, so callers may rely on
/// stable per-clause issue ordering.
pub struct ClauseRuleEngine;

impl ClauseRuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run every rule against one clause and collect the findings.
    pub fn evaluate(&self, clause_text: &str, paragraph_index: usize) -> Vec<Issue> {
        let text_lower = clause_text.to_lowercase();
        let mut issues = Vec::new();

        issues.extend(rules::jurisdiction::check_jurisdiction(&text_lower, paragraph_index));
        issues.extend(rules::jurisdiction::check_governing_law(&text_lower, paragraph_index));
        issues.extend(rules::execution::check_execution_block(&text_lower, paragraph_index));
        issues.extend(rules::ambiguity::check_ambiguous_language(&text_lower, paragraph_index));
        issues.extend(rules::ownership::check_ubo_disclosure(&text_lower, paragraph_index));

        issues
    }
}

impl Default for ClauseRuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared_types::Severity;

    #[test]
    fn test_governed_by_uae_federal_courts_yields_two_high_issues() {
        let engine = ClauseRuleEngine::new();
        let issues = engine.evaluate(
            "This Agreement shall be governed by the laws of the UAE federal courts.",
            0,
        );

        assert_eq!(issues.len(), 2);
        assert!(issues[0].issue.contains("Incorrect jurisdiction"));
        assert!(issues[1].issue.contains("Governing law clause"));
        assert!(issues.iter().all(|i| i.severity == Severity::High));
    }

    #[test]
    fn test_reasonable_endeavours_yields_single_low_issue() {
        let engine = ClauseRuleEngine::new();
        let issues = engine.evaluate(
            "The parties shall use reasonable endeavours to complete the transfer.",
            0,
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Low);
        assert!(issues[0].issue.contains("reasonable endeavours"));
    }

    #[test]
    fn test_clean_clause_yields_no_issues() {
        let engine = ClauseRuleEngine::new();
        let issues = engine.evaluate(
            "The registered office of the company is at Al Maryah Island, Abu Dhabi.",
            0,
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_paragraph_index_propagates_to_every_issue() {
        let engine = ClauseRuleEngine::new();
        let issues = engine.evaluate(
            "Shareholders agree this is governed by the laws of the UAE federal courts, \
             using best efforts to comply.",
            17,
        );
        assert!(!issues.is_empty());
        assert!(issues.iter().all(|i| i.paragraph_index == 17));
    }

    proptest! {
        /// Repeated evaluation of the same clause yields identical,
        /// identically-ordered output.
        #[test]
        fn prop_evaluate_is_deterministic(text in ".{0,400}", idx in 0usize..500) {
            let engine = ClauseRuleEngine::new();
            let a = engine.evaluate(&text, idx);
            let b = engine.evaluate(&text, idx);
            prop_assert_eq!(a.len(), b.len());
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert_eq!(&x.issue, &y.issue);
                prop_assert_eq!(x.severity, y.severity);
                prop_assert_eq!(x.paragraph_index, y.paragraph_index);
            }
        }

        /// Within one clause, rule descriptions never collide.
        #[test]
        fn prop_rule_issue_texts_are_unique(text in ".{0,400}") {
            let engine = ClauseRuleEngine::new();
            let issues = engine.evaluate(&text, 0);
            let mut seen = std::collections::HashSet::new();
            for issue in &issues {
                prop_assert!(seen.insert(issue.issue.clone()));
            }
        }
    }
}
