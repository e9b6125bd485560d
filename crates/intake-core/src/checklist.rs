//! Required-vs-uploaded checklist comparison and status messaging

use crate::catalog::Process;
use std::collections::BTreeSet;

/// Result of comparing an uploaded document-type set against a process
/// checklist. `missing = required − uploaded`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistStatus {
    pub required: BTreeSet<String>,
    pub missing: BTreeSet<String>,
    pub uploaded_count: usize,
    pub required_count: usize,
}

impl ChecklistStatus {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare uploaded document types against the process checklist.
pub fn compare(process: Process, uploaded_types: &BTreeSet<String>) -> ChecklistStatus {
    let required: BTreeSet<String> = process
        .required_documents()
        .iter()
        .map(|s| s.to_string())
        .collect();

    let missing: BTreeSet<String> = required.difference(uploaded_types).cloned().collect();

    ChecklistStatus {
        uploaded_count: uploaded_types.len(),
        required_count: required.len(),
        required,
        missing,
    }
}

/// Build the human-readable checklist status message, naming missing
/// documents verbatim.
pub fn build_message(process: Process, uploaded_types: &BTreeSet<String>) -> String {
    let status = compare(process, uploaded_types);

    let intent = match process {
        Process::CompanyIncorporation => "incorporate a company in ADGM".to_string(),
        other => format!("perform the process: {}", other),
    };

    if status.missing.is_empty() {
        format!(
            "It appears that you're trying to {}. All required documents ({}) appear to be uploaded.",
            intent, status.required_count
        )
    } else {
        let missing_names = status
            .missing
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join("', '");
        format!(
            "It appears that you're trying to {}. Based on our reference list, you have uploaded \
             {} out of {} required documents. The missing document(s) appears to be: '{}'.",
            intent, status.uploaded_count, status.required_count, missing_names
        )
    }
}
