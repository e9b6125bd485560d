use crate::patterns::DISALLOWED_JURISDICTION_RE;
use shared_types::{Issue, Severity};

/// Check for references to a disallowed jurisdiction (UAE federal courts
/// rather than ADGM)
pub fn check_jurisdiction(text_lower: &str, paragraph_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if DISALLOWED_JURISDICTION_RE.is_match(text_lower) {
        issues.push(Issue {
            paragraph_index,
            issue: "Incorrect jurisdiction referenced (mentions UAE federal courts).".to_string(),
            severity: Severity::High,
            suggestion: "Replace with explicit ADGM jurisdiction clause, e.g. 'This agreement is \
                         governed by the laws of the Abu Dhabi Global Market (ADGM).'"
                .to_string(),
            citation: "ADGM Companies Regulations 2020, Art. 6 (example)".to_string(),
            alt_clause: Some(
                "This agreement is governed by the laws of the Abu Dhabi Global Market (ADGM), \
                 and the ADGM Courts shall have exclusive jurisdiction."
                    .to_string(),
            ),
            clause_type: None,
            confidence: None,
        });
    }

    issues
}

/// Check for a governing-law clause that never names ADGM
pub fn check_governing_law(text_lower: &str, paragraph_index: usize) -> Vec<Issue> {
    let mut issues = Vec::new();

    if text_lower.contains("governed by") && !text_lower.contains("adgm") {
        issues.push(Issue {
            paragraph_index,
            issue: "Governing law clause present but does not specify ADGM.".to_string(),
            severity: Severity::High,
            suggestion: "Modify governing law clause to explicitly reference ADGM jurisdiction."
                .to_string(),
            citation: "ADGM Companies Regulations 2020, Art. 6 (example)".to_string(),
            alt_clause: None,
            clause_type: None,
            confidence: None,
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_uae_federal_courts() {
        let issues = check_jurisdiction("disputes are referred to the uae federal courts.", 0);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert!(issues[0].issue.contains("UAE federal courts"));
    }

    #[test]
    fn test_accepts_adgm_jurisdiction() {
        let issues = check_jurisdiction("the adgm courts shall have exclusive jurisdiction.", 0);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_governing_law_without_adgm() {
        let issues = check_governing_law("this agreement shall be governed by the laws of dubai.", 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].paragraph_index, 2);
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn test_governing_law_with_adgm_is_clean() {
        let issues = check_governing_law("governed by the laws of the adgm.", 0);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_no_governing_law_clause_is_clean() {
        let issues = check_governing_law("the consultant shall deliver monthly reports.", 0);
        assert!(issues.is_empty());
    }
}
