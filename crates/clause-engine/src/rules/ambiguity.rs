use crate::patterns::AMBIGUOUS_PHRASES;
use shared_types::{Issue, Severity};

/// Check for hedging phrases that make an obligation ambiguous or
/// non-binding. Only the first matching phrase per clause is reported.
pub fn check_ambiguous_language(text_lower: &str, paragraph_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    for phrase in AMBIGUOUS_PHRASES {
        if text_lower.contains(phrase) {
            issues.push(Issue {
                paragraph_index,
                issue: format!("Ambiguous/non-binding phrase detected: '{}'.", phrase),
                severity: Severity::Low,
                suggestion: format!(
                    "Consider replacing '{}' with a precise obligation or timescale.",
                    phrase
                ),
                citation: String::new(),
                alt_clause: None,
                clause_type: None,
                confidence: None,
            });
            break;
        }
    }

    issues
}
