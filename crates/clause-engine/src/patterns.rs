//! Keyword tables and regex patterns shared by the clause rules

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Disallowed jurisdiction phrases (UAE federal instead of ADGM)
    pub static ref DISALLOWED_JURISDICTION_RE: Regex =
        Regex::new(r"\b(uae federal courts|federal courts of the uae|uae courts)\b")
            .expect("jurisdiction pattern is valid");
}

/// Signature/execution terms whose absence flags a possible missing
/// execution block
pub const SIGNATURE_KEYWORDS: &[&str] = &["signature", "signed by", "for and on behalf of"];

/// Markers that a clause is an agreement body or closing section
pub const AGREEMENT_KEYWORDS: &[&str] = &["agreement", "this agreement", "in witness"];

/// Ownership/shareholding terms that should be accompanied by UBO
/// disclosure language
pub const OWNERSHIP_KEYWORDS: &[&str] = &["shareholder", "shares", "beneficial owner"];

/// UBO disclosure terms
pub const UBO_KEYWORDS: &[&str] = &["ubo", "ultimate beneficial owner"];

/// Hedging phrases that commonly indicate ambiguous or non-binding
/// obligations. Checked in order; only the first match is reported.
pub const AMBIGUOUS_PHRASES: &[&str] = &[
    "best efforts",
    "reasonable endeavours",
    "endeavour",
    "as soon as reasonably practicable",
    "subject to availability",
    "to the extent possible",
    "where possible",
];

/// Clauses shorter than this are not treated as execution sections
pub const EXECUTION_LENGTH_THRESHOLD: usize = 200;

/// Check whether any keyword from the group appears in the (lowercased) text
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| text.contains(kw))
}
