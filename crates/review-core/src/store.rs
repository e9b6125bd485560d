//! Tantivy-backed reference store
//!
//! Concrete [`SimilaritySearch`] implementation: reference materials are
//! chunked and indexed for BM25 matching. The schema keeps `source` and
//! `category` as stored metadata so retrieval can attribute passages.

use crate::reference::{RawPassage, SimilaritySearch};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use tantivy::collector::TopDocs;
use tantivy::query::QueryParser;
use tantivy::schema::*;
use tantivy::{Index, IndexWriter, ReloadPolicy, TantivyDocument};

/// Chunk size tuned for legal reference text: small chunks with generous
/// overlap keep clause-level context intact.
pub const CHUNK_SIZE: usize = 600;
pub const CHUNK_OVERLAP: usize = 180;

pub struct TantivyReferenceStore {
    index: Index,
    source_field: Field,
    category_field: Field,
    content_field: Field,
}

impl TantivyReferenceStore {
    /// Open an existing index at the given path, or create a new one.
    pub fn open_or_create(index_path: &Path) -> Result<Self> {
        let schema = Self::build_schema();

        // An empty directory is not yet an index; look for tantivy's meta file.
        let index = if index_path.join("meta.json").exists() {
            Index::open_in_dir(index_path)?
        } else {
            std::fs::create_dir_all(index_path)?;
            Index::create_in_dir(index_path, schema.clone())?
        };

        Ok(Self::from_index(index, &schema))
    }

    /// Create an in-memory store (for testing).
    pub fn in_memory() -> Result<Self> {
        let schema = Self::build_schema();
        let index = Index::create_in_ram(schema.clone());
        Ok(Self::from_index(index, &schema))
    }

    fn build_schema() -> Schema {
        let mut schema_builder = Schema::builder();
        schema_builder.add_text_field("source", STRING | STORED);
        schema_builder.add_text_field("category", STRING | STORED);
        schema_builder.add_text_field("content", TEXT | STORED);
        schema_builder.build()
    }

    fn from_index(index: Index, schema: &Schema) -> Self {
        let source_field = schema.get_field("source").expect("schema has source");
        let category_field = schema.get_field("category").expect("schema has category");
        let content_field = schema.get_field("content").expect("schema has content");
        Self {
            index,
            source_field,
            category_field,
            content_field,
        }
    }

    /// Chunk and index one reference document. Returns the number of
    /// chunks written.
    pub fn add_reference(&self, source: &str, category: Option<&str>, text: &str) -> Result<usize> {
        let chunks = chunk_text(text, CHUNK_SIZE, CHUNK_OVERLAP);
        if chunks.is_empty() {
            return Ok(0);
        }

        let mut index_writer: IndexWriter = self.index.writer(50_000_000)?;
        for chunk in &chunks {
            let mut doc = TantivyDocument::new();
            doc.add_text(self.source_field, source);
            if let Some(category) = category {
                doc.add_text(self.category_field, category);
            }
            doc.add_text(self.content_field, chunk);
            index_writer.add_document(doc)?;
        }
        index_writer.commit()?;

        Ok(chunks.len())
    }

    /// Number of indexed chunks.
    pub fn passage_count(&self) -> Result<usize> {
        let reader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;
        Ok(reader.searcher().num_docs() as usize)
    }

    fn search_sync(&self, query: &str, k: usize) -> Result<Vec<RawPassage>> {
        let reader = self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::OnCommitWithDelay)
            .try_into()?;
        let searcher = reader.searcher();

        // Clause text is not query syntax; parse leniently and take
        // whatever terms survive.
        let query_parser = QueryParser::for_index(&self.index, vec![self.content_field]);
        let (query, _errors) = query_parser.parse_query_lenient(query);

        let top_docs = searcher.search(&query, &TopDocs::with_limit(k))?;

        let mut passages = Vec::with_capacity(top_docs.len());
        for (_score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher.doc(doc_address)?;
            let text_of = |field: Field| {
                doc.get_first(field)
                    .and_then(|v| v.as_str())
                    .map(str::to_string)
            };

            let mut metadata = HashMap::new();
            if let Some(source) = text_of(self.source_field) {
                metadata.insert("source".to_string(), source);
            }
            if let Some(category) = text_of(self.category_field) {
                metadata.insert("category".to_string(), category);
            }

            passages.push(RawPassage {
                content: text_of(self.content_field).unwrap_or_default(),
                metadata,
            });
        }

        Ok(passages)
    }
}

#[async_trait]
impl SimilaritySearch for TantivyReferenceStore {
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<RawPassage>> {
        self.search_sync(query, k)
    }
}

/// Split text into overlapping chunks of at most `chunk_size` characters,
/// preferring whitespace boundaries.
fn chunk_text(text: &str, chunk_size: usize, overlap: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut chunks = Vec::new();
    let step = chunk_size.saturating_sub(overlap).max(1);

    let mut start = 0;
    while start < chars.len() {
        let mut end = (start + chunk_size).min(chars.len());
        if end < chars.len() {
            if let Some(ws) = (start + step..end).rev().find(|&i| chars[i].is_whitespace()) {
                end = ws;
            }
        }

        let chunk: String = chars[start..end].iter().collect();
        let trimmed = chunk.trim();
        if !trimmed.is_empty() {
            chunks.push(trimmed.to_string());
        }

        if end >= chars.len() {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }

    chunks
}
