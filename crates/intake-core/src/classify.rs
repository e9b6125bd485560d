//! Document-type detection and process resolution

use crate::catalog::{Process, DOC_TYPE_KEYWORDS};
use std::collections::BTreeSet;

/// Detect document-type labels present in a text sample.
///
/// Case-insensitive substring matching against the catalog keyword
/// variants. Detection is many-to-one and union-based: a sample may match
/// zero, one, or several labels, and no label takes precedence.
pub fn detect_document_types(text: &str) -> BTreeSet<String> {
    let text_lower = text.to_lowercase();
    let mut matches = BTreeSet::new();

    for (label, variants) in DOC_TYPE_KEYWORDS {
        if variants.iter().any(|kw| text_lower.contains(kw)) {
            matches.insert((*label).to_string());
        }
    }

    matches
}

/// Resolve the legal process being attempted from the uploaded type set.
///
/// Processes are tested in fixed priority order; the first whose indicator
/// set intersects the uploads wins. Returns `None` when nothing matches
/// (callers default to Company Incorporation).
pub fn detect_process(uploaded_types: &BTreeSet<String>) -> Option<Process> {
    Process::DETECTION_ORDER
        .iter()
        .copied()
        .find(|process| {
            process
                .indicator_documents()
                .iter()
                .any(|label| uploaded_types.contains(*label))
        })
}
