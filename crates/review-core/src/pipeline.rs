//! Batch review pipeline: per-document clause checking, type detection,
//! process resolution and report assembly

use crate::checker::ClauseChecker;
use crate::text::{split_paragraphs, DocumentParser};
use intake_core::{build_message, compare, detect_document_types, detect_process, Process};
use shared_types::{AnalysisReport, DocumentReport, Paragraph};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Only clauses touching these topics are sent through the checker,
/// bounding generative-service calls per document.
pub const CLAUSE_TRIGGER_KEYWORDS: &[&str] = &[
    "jurisdiction",
    "govern",
    "governing",
    "court",
    "signatur",
    "director",
    "member",
    "ubo",
    "share",
    "agreement",
    "witness",
    "execution",
];

/// Paragraphs sampled from the top of each document for type detection
pub const TYPE_SAMPLE_PARAGRAPHS: usize = 15;

/// One uploaded document as raw text.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct InputDocument {
    pub filename: String,
    pub text: String,
}

/// A document that could not be parsed; the rest of the batch continues.
#[derive(Debug)]
pub struct DocumentFailure {
    pub document: String,
    pub error: anyhow::Error,
}

/// Outcome of a file-based batch: best-effort report plus per-document
/// parse failures.
#[derive(Debug)]
pub struct BatchOutcome {
    pub report: AnalysisReport,
    pub failures: Vec<DocumentFailure>,
}

/// Review pipeline over a shared clause checker.
pub struct ReviewPipeline {
    checker: ClauseChecker,
}

impl ReviewPipeline {
    pub fn new(checker: ClauseChecker) -> Self {
        Self { checker }
    }

    /// Review one document's paragraphs: detect its types and check every
    /// clause-bearing paragraph.
    pub async fn review_paragraphs(
        &self,
        document: &str,
        paragraphs: &[Paragraph],
    ) -> DocumentReport {
        let sample: Vec<&str> = paragraphs
            .iter()
            .take(TYPE_SAMPLE_PARAGRAPHS)
            .map(|p| p.text.as_str())
            .collect();
        let detected_types = detect_document_types(&sample.join("\n"));

        let mut issues_found = Vec::new();
        for paragraph in paragraphs {
            if !bears_clause(&paragraph.text) {
                continue;
            }
            let issues = self.checker.check(&paragraph.text, paragraph.index).await;
            issues_found.extend(issues);
        }

        info!(
            document,
            issues = issues_found.len(),
            types = detected_types.len(),
            "document reviewed"
        );

        DocumentReport {
            document: document.to_string(),
            detected_types,
            issues_found,
        }
    }

    /// Analyze a batch of in-memory text documents into one report.
    pub async fn analyze_documents(&self, documents: &[InputDocument]) -> AnalysisReport {
        let mut reports = Vec::with_capacity(documents.len());
        for doc in documents {
            let paragraphs = split_paragraphs(&doc.text);
            reports.push(self.review_paragraphs(&doc.filename, &paragraphs).await);
        }
        build_report(reports, documents.len())
    }

    /// Analyze a batch of files through a parsing collaborator. One
    /// unreadable document never aborts the rest; its failure is reported
    /// alongside the best-effort report.
    pub async fn analyze_files(
        &self,
        parser: &dyn DocumentParser,
        paths: &[PathBuf],
    ) -> BatchOutcome {
        let mut reports = Vec::new();
        let mut failures = Vec::new();

        for path in paths {
            let document = display_name(path);
            match parser.parse(path) {
                Ok(paragraphs) => {
                    reports.push(self.review_paragraphs(&document, &paragraphs).await);
                }
                Err(error) => {
                    warn!(%document, "document could not be parsed: {error:#}");
                    failures.push(DocumentFailure { document, error });
                }
            }
        }

        let parsed = reports.len();
        BatchOutcome {
            report: build_report(reports, parsed),
            failures,
        }
    }
}

/// Whether a paragraph warrants a clause check.
fn bears_clause(text: &str) -> bool {
    let text_lower = text.to_lowercase();
    CLAUSE_TRIGGER_KEYWORDS.iter().any(|kw| text_lower.contains(kw))
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Assemble the aggregate report: union of detected types, resolved
/// process (Company Incorporation by default), checklist status.
fn build_report(reports: Vec<DocumentReport>, documents_uploaded: usize) -> AnalysisReport {
    let uploaded_document_types: BTreeSet<String> = reports
        .iter()
        .flat_map(|r| r.detected_types.iter().cloned())
        .collect();

    let process =
        detect_process(&uploaded_document_types).unwrap_or(Process::CompanyIncorporation);
    let status = compare(process, &uploaded_document_types);
    let checklist_message = build_message(process, &uploaded_document_types);
    let total_issues = reports.iter().map(|r| r.issues_found.len()).sum();

    AnalysisReport {
        process: process.name().to_string(),
        documents_uploaded,
        uploaded_document_types,
        required_documents: status.required_count,
        missing_documents: status.missing,
        issues_found: reports,
        checklist_message,
        total_issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::findings::FindingsClient;
    use crate::reference::ReferenceIndex;
    use crate::store::TantivyReferenceStore;
    use crate::text::TextDocument;
    use std::sync::Arc;

    fn heuristics_pipeline() -> ReviewPipeline {
        let store = TantivyReferenceStore::in_memory().expect("in-memory store");
        let index = ReferenceIndex::new(Arc::new(store));
        ReviewPipeline::new(ClauseChecker::new(index, FindingsClient::disabled()))
    }

    fn doc(filename: &str, text: &str) -> InputDocument {
        InputDocument {
            filename: filename.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_clause_gating() {
        assert!(bears_clause("This Agreement is binding."));
        assert!(bears_clause("Subject to the jurisdiction of the courts"));
        assert!(!bears_clause("The quarterly budget is attached."));
    }

    #[tokio::test]
    async fn test_single_aoa_resolves_incorporation_with_seven_missing() {
        let pipeline = heuristics_pipeline();
        let report = pipeline
            .analyze_documents(&[doc(
                "aoa.txt",
                "ARTICLES OF ASSOCIATION\nThe company is incorporated in ADGM.",
            )])
            .await;

        assert_eq!(report.process, "Company Incorporation");
        assert_eq!(report.documents_uploaded, 1);
        assert!(report.uploaded_document_types.contains("Articles of Association"));
        assert_eq!(report.required_documents, 8);
        assert_eq!(report.missing_documents.len(), 7);
        assert!(!report.missing_documents.contains("Articles of Association"));
        assert!(report.checklist_message.contains("incorporate a company in ADGM"));
    }

    #[tokio::test]
    async fn test_issues_collected_per_document() {
        let pipeline = heuristics_pipeline();
        let report = pipeline
            .analyze_documents(&[doc(
                "agreement.txt",
                "Recitals.\nThis Agreement shall be governed by the laws of the UAE federal courts.",
            )])
            .await;

        assert_eq!(report.issues_found.len(), 1);
        let issues = &report.issues_found[0].issues_found;
        assert_eq!(issues.len(), 2);
        assert!(issues.iter().all(|i| i.paragraph_index == 1));
        assert_eq!(report.total_issues, 2);
    }

    #[tokio::test]
    async fn test_empty_batch_defaults_to_incorporation() {
        let pipeline = heuristics_pipeline();
        let report = pipeline.analyze_documents(&[]).await;

        assert_eq!(report.process, "Company Incorporation");
        assert_eq!(report.documents_uploaded, 0);
        assert_eq!(report.missing_documents.len(), 8);
        assert_eq!(report.total_issues, 0);
    }

    #[tokio::test]
    async fn test_non_clause_paragraphs_are_not_checked() {
        let pipeline = heuristics_pipeline();
        let report = pipeline
            .analyze_documents(&[doc(
                "memo.txt",
                // "reasonable endeavours" alone carries no trigger keyword
                "The caterer will use reasonable endeavours to provide lunch.",
            )])
            .await;
        assert_eq!(report.total_issues, 0);
    }

    #[tokio::test]
    async fn test_unreadable_file_does_not_abort_batch() {
        let dir = tempfile::tempdir().expect("tempdir");
        let good = dir.path().join("board_resolution.txt");
        std::fs::write(&good, "BOARD RESOLUTION\nSigned by the directors.").expect("write");
        let missing = dir.path().join("missing.txt");

        let pipeline = heuristics_pipeline();
        let outcome = pipeline
            .analyze_files(&TextDocument, &[missing.clone(), good.clone()])
            .await;

        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].document, "missing.txt");
        assert_eq!(outcome.report.documents_uploaded, 1);
        assert!(outcome
            .report
            .uploaded_document_types
            .contains("Board Resolution"));
    }
}
