//! Intake Core - document-type classification and checklist completeness
//!
//! Maps free document text to known document-type labels, resolves the
//! legal process being attempted from the uploaded type set, and computes
//! required-vs-missing checklist status for that process.

pub mod catalog;
pub mod checklist;
pub mod classify;

pub use catalog::Process;
pub use checklist::{build_message, compare, ChecklistStatus};
pub use classify::{detect_document_types, detect_process};
