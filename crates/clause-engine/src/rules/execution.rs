use crate::patterns::{
    contains_any, AGREEMENT_KEYWORDS, EXECUTION_LENGTH_THRESHOLD, SIGNATURE_KEYWORDS,
};
use shared_types::{Issue, Severity};

/// Check for a possible missing signature / execution block.
///
/// Only long clauses that read like an agreement body or closing section
/// are flagged; short operative clauses legitimately carry no signature
/// language.
pub fn check_execution_block(text_lower: &str, paragraph_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if contains_any(text_lower, SIGNATURE_KEYWORDS) {
        return issues;
    }

    if text_lower.len() > EXECUTION_LENGTH_THRESHOLD
        && contains_any(text_lower, AGREEMENT_KEYWORDS)
    {
        issues.push(Issue {
            paragraph_index,
            issue: "Possible missing signature / execution block.".to_string(),
            severity: Severity::Medium,
            suggestion: "Ensure there is a signature block with printed name, title and date."
                .to_string(),
            citation: "ADGM execution signature guidance (template)".to_string(),
            alt_clause: None,
            clause_type: None,
            confidence: None,
        });
    }

    issues
}
