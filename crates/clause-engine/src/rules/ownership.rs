use crate::patterns::{contains_any, OWNERSHIP_KEYWORDS, UBO_KEYWORDS};
use shared_types::{Issue, Severity};

/// Check for ownership/shareholding clauses that never reference UBO
/// (ultimate beneficial owner) disclosure.
pub fn check_ubo_disclosure(text_lower: &str, paragraph_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if contains_any(text_lower, OWNERSHIP_KEYWORDS) && !contains_any(text_lower, UBO_KEYWORDS) {
        issues.push(Issue {
            paragraph_index,
            issue: "Clause concerns ownership/shareholders but UBO disclosures are not referenced."
                .to_string(),
            severity: Severity::Medium,
            suggestion: "Ensure the document includes/links to an UBO declaration form where \
                         relevant."
                .to_string(),
            citation: "ADGM registry/UBO guidance (check ADGM docs)".to_string(),
            alt_clause: None,
            clause_type: None,
            confidence: None,
        });
    }

    issues
}
