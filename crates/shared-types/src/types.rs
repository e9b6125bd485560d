use std::collections::BTreeSet;

/// Severity of a compliance finding.
///
/// Serializes as the exact strings the generative-service contract uses
/// ("Low" / "Medium" / "High").
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Case-insensitive parse with `Medium` as the fallback for anything
    /// the model invents outside the contract.
    pub fn parse_lenient(s: &str) -> Severity {
        match s.trim().to_lowercase().as_str() {
            "low" => Severity::Low,
            "high" => Severity::High,
            _ => Severity::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One compliance finding against a single clause.
///
/// `issue` is the dedup key: within one clause's result list the issue
/// descriptions are unique by exact case-sensitive match.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Issue {
    pub paragraph_index: usize,
    pub issue: String,
    pub severity: Severity,
    pub suggestion: String,
    pub citation: String, // may be empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_clause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>, // [0, 1]
}

/// A retrieved reference passage with source attribution.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ReferencePassage {
    pub source: String,
    pub text: String,
    pub category: Option<String>,
}

/// One non-empty paragraph of an uploaded document, with its position in
/// the original document preserved.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct Paragraph {
    pub index: usize,
    pub text: String,
}

/// Per-document review results.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct DocumentReport {
    pub document: String,
    pub detected_types: BTreeSet<String>,
    pub issues_found: Vec<Issue>,
}

/// Aggregate report for one analysis run. Built fresh per run, suitable
/// for direct JSON serialization; persistence is an external concern.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct AnalysisReport {
    pub process: String,
    pub documents_uploaded: usize,
    pub uploaded_document_types: BTreeSet<String>,
    pub required_documents: usize,
    pub missing_documents: BTreeSet<String>,
    pub issues_found: Vec<DocumentReport>,
    pub checklist_message: String,
    pub total_issues: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_severity_serializes_as_contract_strings() {
        assert_eq!(serde_json::to_string(&Severity::Low).unwrap(), "\"Low\"");
        assert_eq!(serde_json::to_string(&Severity::High).unwrap(), "\"High\"");
    }

    #[test]
    fn test_severity_lenient_parse() {
        assert_eq!(Severity::parse_lenient("low"), Severity::Low);
        assert_eq!(Severity::parse_lenient("HIGH"), Severity::High);
        assert_eq!(Severity::parse_lenient(" Medium "), Severity::Medium);
        assert_eq!(Severity::parse_lenient("critical"), Severity::Medium);
    }

    #[test]
    fn test_issue_optional_fields_omitted() {
        let issue = Issue {
            paragraph_index: 3,
            issue: "Governing law clause present but does not specify ADGM.".to_string(),
            severity: Severity::High,
            suggestion: "Reference ADGM jurisdiction explicitly.".to_string(),
            citation: String::new(),
            alt_clause: None,
            clause_type: None,
            confidence: None,
        };
        let json = serde_json::to_value(&issue).unwrap();
        assert!(json.get("alt_clause").is_none());
        assert!(json.get("clause_type").is_none());
        assert_eq!(json["paragraph_index"], 3);
    }
}
