//! HTTP request handlers for the review API
//!
//! Provides handlers for:
//! - Health checks
//! - Reference corpus ingestion
//! - Batch document analysis

use axum::{extract::State, http::StatusCode, Json};
use review_core::{annotate_text, InputDocument};
use serde::{Deserialize, Serialize};
use shared_types::AnalysisReport;
use std::sync::Arc;
use tracing::{error, info};

use crate::state::AppState;

// ============================================================================
// Request/Response types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ReferenceRequest {
    pub source: String,
    pub category: Option<String>,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ReferenceResponse {
    pub source: String,
    pub chunks_indexed: usize,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub documents: Vec<InputDocument>,
}

#[derive(Debug, Serialize)]
pub struct AnnotatedDocument {
    pub document: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub report: AnalysisReport,
    pub annotated_documents: Vec<AnnotatedDocument>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub reference_passages: usize,
    pub generative: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health(
    State(state): State<Arc<AppState>>,
) -> Result<Json<HealthResponse>, (StatusCode, String)> {
    let reference_passages = state.store.passage_count().map_err(|e| {
        error!("Failed to read reference index: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Reference index unavailable: {}", e),
        )
    })?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        reference_passages,
        generative: if state.generative_enabled {
            "configured".to_string()
        } else {
            "disabled".to_string()
        },
    }))
}

/// Index a reference document into the corpus
pub async fn add_reference(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ReferenceRequest>,
) -> Result<Json<ReferenceResponse>, (StatusCode, String)> {
    if request.text.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "Reference text must not be empty".to_string(),
        ));
    }

    info!("Indexing reference: source='{}'", request.source);

    let _guard = state.write_guard.lock().await;
    let chunks_indexed = state
        .store
        .add_reference(&request.source, request.category.as_deref(), &request.text)
        .map_err(|e| {
            error!("Failed to index reference '{}': {}", request.source, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Indexing failed: {}", e),
            )
        })?;

    Ok(Json(ReferenceResponse {
        source: request.source,
        chunks_indexed,
    }))
}

/// Analyze a batch of documents and return the compliance report
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, (StatusCode, String)> {
    if request.documents.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "At least one document is required".to_string(),
        ));
    }

    info!("Analyzing batch of {} document(s)", request.documents.len());

    let report = state.pipeline.analyze_documents(&request.documents).await;

    let annotated_documents = request
        .documents
        .iter()
        .zip(report.issues_found.iter())
        .map(|(doc, doc_report)| AnnotatedDocument {
            document: doc.filename.clone(),
            text: annotate_text(&doc.text, &doc_report.issues_found),
        })
        .collect();

    Ok(Json(AnalyzeResponse {
        report,
        annotated_documents,
    }))
}
