use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use nyaya_core::{
    draft::DraftSession,
    error::ApiError,
    types::{CompareSide, DocumentPayload, Turn},
};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;

use crate::AppState;

// ── Error mapping ─────────────────────────────────────────────────────────

/// Client-input errors become 400; anything the Generation Service threw
/// becomes a generic 500 carrying the upstream message.
pub(crate) struct AppError(ApiError);

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        Self(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.0.is_bad_input() {
            StatusCode::BAD_REQUEST
        } else {
            tracing::error!("upstream error: {}", self.0);
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

fn require<T>(value: Option<T>, msg: &str) -> Result<T, AppError> {
    value.ok_or_else(|| ApiError::bad_input(msg).into())
}

// ── Request body types ────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FileBody {
    file: Option<DocumentPayload>,
}

#[derive(Deserialize)]
struct ChatBody {
    file: Option<DocumentPayload>,
    input: Option<String>,
    #[serde(default)]
    messages: Vec<Turn>,
}

#[derive(Deserialize)]
struct CompareBody {
    doc1: Option<CompareSide>,
    doc2: Option<CompareSide>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftStartBody {
    doc_type: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DraftTurnBody {
    doc_type: Option<String>,
    #[serde(default)]
    turns: Vec<Turn>,
}

// ── Router ────────────────────────────────────────────────────────────────

pub fn router(state: Arc<AppState>, max_body_mb: usize) -> Router {
    Router::new()
        // Health
        .route("/api/health", get(health))
        // Single-document analysis
        .route("/api/summarize", post(summarize))
        .route("/api/issues", post(issues))
        .route("/api/chat", post(chat))
        // Comparison
        .route("/api/compare", post(compare))
        // Draft generator
        .route("/api/generator/start", post(generator_start))
        .route("/api/generator/chat", post(generator_chat))
        .route("/api/generator/final", post(generator_final))
        .route("/api/generator/random", post(generator_random))
        // File payloads arrive base64-inline in JSON
        .layer(DefaultBodyLimit::max(max_body_mb * 1024 * 1024))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn summarize(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FileBody>,
) -> Result<Json<Value>, AppError> {
    let file = require(body.file, "missing file.data")?;
    let text = state.orchestrator.summarize(&file).await?;
    Ok(Json(json!({ "text": text })))
}

async fn issues(
    State(state): State<Arc<AppState>>,
    Json(body): Json<FileBody>,
) -> Result<Json<Value>, AppError> {
    let file = require(body.file, "missing file.data")?;
    let text = state.orchestrator.detect_issues(&file).await?;
    Ok(Json(json!({ "text": text })))
}

async fn chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ChatBody>,
) -> Result<Json<Value>, AppError> {
    let file = require(body.file, "missing file.data")?;
    let input = require(body.input, "input required")?;
    let text = state
        .orchestrator
        .chat_turn(&file, &input, &body.messages)
        .await?;
    Ok(Json(json!({ "text": text })))
}

async fn compare(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CompareBody>,
) -> Result<Json<Value>, AppError> {
    let doc1 = require(body.doc1, "doc1 and doc2 required")?;
    let doc2 = require(body.doc2, "doc1 and doc2 required")?;
    let text = state.orchestrator.compare(&doc1, &doc2).await?;
    Ok(Json(json!({ "text": text })))
}

// Draft generator — the server holds no session store; each request
// carries the document type plus the turns so far, and the session is
// rebuilt here and threaded through the orchestrator.

async fn generator_start(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DraftStartBody>,
) -> Result<Json<Value>, AppError> {
    let doc_type = require(body.doc_type, "docType required")?;
    let (template, first_question) = state.orchestrator.draft_start(&doc_type).await?;
    Ok(Json(json!({
        "template": template,
        "firstQuestion": first_question,
    })))
}

async fn generator_chat(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DraftTurnBody>,
) -> Result<Json<Value>, AppError> {
    let doc_type = require(body.doc_type, "docType required")?;
    let session = DraftSession::resume(doc_type, body.turns)?;
    let text = state.orchestrator.draft_next_turn(&session).await?;
    Ok(Json(json!({ "text": text })))
}

async fn generator_final(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DraftTurnBody>,
) -> Result<Json<Value>, AppError> {
    let doc_type = require(body.doc_type, "docType required")?;
    let session = DraftSession::resume(doc_type, body.turns)?;
    let text = state.orchestrator.draft_finalize(&session).await?;
    Ok(Json(json!({ "text": text })))
}

async fn generator_random(
    State(state): State<Arc<AppState>>,
    Json(body): Json<DraftStartBody>,
) -> Result<Json<Value>, AppError> {
    let doc_type = require(body.doc_type, "docType required")?;
    let text = state.orchestrator.draft_random_demo(&doc_type).await?;
    Ok(Json(json!({ "text": text })))
}
