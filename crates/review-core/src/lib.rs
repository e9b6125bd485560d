//! Review Core - clause-checking pipeline for company-formation filings
//!
//! This crate provides:
//! - Reference index adapter over a nearest-neighbor text index (tantivy)
//! - Generative findings client with a strict JSON-output contract
//! - Tolerant JSON extraction for model responses
//! - Per-clause orchestration (heuristics + RAG) with dedup
//! - Batch document pipeline and report assembly
//! - Configuration management

pub mod checker;
pub mod config;
pub mod extract;
pub mod findings;
pub mod generative;
pub mod pipeline;
pub mod reference;
pub mod store;
pub mod text;

// Re-export commonly used types
pub use checker::ClauseChecker;
pub use config::ReviewConfig;
pub use findings::{FindingsClient, ModelFindings, SkipReason};
pub use generative::{GeminiClient, GenerativeConfig, TextCompletion};
pub use pipeline::{BatchOutcome, InputDocument, ReviewPipeline};
pub use reference::{RawPassage, ReferenceIndex, RetrievalOutcome, SimilaritySearch};
pub use store::TantivyReferenceStore;
pub use text::{annotate_text, split_paragraphs, DocumentAnnotator, DocumentParser, TextDocument};
