//! Plain-text implementation of the document parse/annotate boundary
//!
//! The docx collaborator lives outside this core; what crosses the
//! boundary is a paragraph list in and an annotated copy out. This module
//! provides those operations for plain-text documents plus the pure
//! helpers the pipeline and the API reuse on in-memory text.

use shared_types::{Issue, Paragraph};
use std::collections::HashMap;
use std::path::Path;

/// Document parsing boundary: non-empty paragraphs, original ordering and
/// indices preserved.
pub trait DocumentParser {
    fn parse(&self, path: &Path) -> anyhow::Result<Vec<Paragraph>>;
}

/// Document annotation boundary: write a reviewed copy with an inline
/// annotation block after each flagged paragraph.
pub trait DocumentAnnotator {
    fn annotate(&self, path: &Path, issues: &[Issue], output_path: &Path) -> anyhow::Result<()>;
}

/// Split raw text into indexed paragraphs. Blank lines keep their index
/// (so annotation can be re-applied positionally) but are not returned.
pub fn split_paragraphs(text: &str) -> Vec<Paragraph> {
    text.lines()
        .enumerate()
        .filter_map(|(index, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(Paragraph {
                    index,
                    text: trimmed.to_string(),
                })
            }
        })
        .collect()
}

/// Render a reviewed copy of the text with annotation blocks inserted
/// after each flagged paragraph.
pub fn annotate_text(text: &str, issues: &[Issue]) -> String {
    let mut issues_by_index: HashMap<usize, Vec<&Issue>> = HashMap::new();
    for issue in issues {
        issues_by_index.entry(issue.paragraph_index).or_default().push(issue);
    }

    let mut out = String::new();
    for (index, line) in text.lines().enumerate() {
        out.push_str(line);
        out.push('\n');

        if let Some(flagged) = issues_by_index.get(&index) {
            for issue in flagged {
                out.push_str(&format!(
                    "  ⚠ ISSUE [{}]: {}\n    Suggestion: {}\n",
                    issue.severity, issue.issue, issue.suggestion
                ));
                if !issue.citation.is_empty() {
                    out.push_str(&format!("    Citation: {}\n", issue.citation));
                }
                if let Some(alt) = &issue.alt_clause {
                    out.push_str(&format!("    Alternative clause: {}\n", alt));
                }
            }
        }
    }
    out
}

/// Plain-text document collaborator.
pub struct TextDocument;

impl DocumentParser for TextDocument {
    fn parse(&self, path: &Path) -> anyhow::Result<Vec<Paragraph>> {
        let text = std::fs::read_to_string(path)?;
        Ok(split_paragraphs(&text))
    }
}

impl DocumentAnnotator for TextDocument {
    fn annotate(&self, path: &Path, issues: &[Issue], output_path: &Path) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(path)?;
        std::fs::write(output_path, annotate_text(&text, issues))?;
        Ok(())
    }
}
