//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::a2ui::ComponentKind;
use crate::dispatch::RenderedInstruction;
use crate::errors::AppError;
use crate::generation::generator::{answer_query, generate_content, GenerationResult};
use crate::state::AppState;
use crate::templates::{FormatId, REGISTRY_VERSION};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct FormatInfo {
    pub format: FormatId,
    pub structured_reply: bool,
    pub required_components: Vec<ComponentKind>,
}

#[derive(Debug, Serialize)]
pub struct FormatsResponse {
    pub registry_version: &'static str,
    pub formats: Vec<FormatInfo>,
}

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ClassifyResponse {
    pub format: Option<FormatId>,
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct FormatRequest {
    pub format: String,
    #[serde(default)]
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    pub message: String,
    /// Accepted for client compatibility; conversations are stateless.
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub request_id: Uuid,
    #[serde(flatten)]
    pub result: GenerationResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/formats
pub async fn handle_list_formats(State(state): State<AppState>) -> Json<FormatsResponse> {
    let registry = state.dispatcher.registry();
    let formats = registry
        .supported_formats()
        .into_iter()
        .filter_map(|format| registry.lookup(format))
        .map(|template| FormatInfo {
            format: template.format_id,
            structured_reply: state.dispatcher.expects_structured_reply(template.format_id),
            required_components: template.required_components.to_vec(),
        })
        .collect();

    Json(FormatsResponse {
        registry_version: REGISTRY_VERSION,
        formats,
    })
}

/// POST /api/v1/classify
///
/// Shows which format a free-text message would be routed to, without
/// calling the model.
pub async fn handle_classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let classification = state.dispatcher.classify(&request.message);
    let format = classification.format();
    let topic = classification.into_topic();
    Json(ClassifyResponse { format, topic })
}

/// POST /api/v1/render
///
/// Instruction preview. `format` may be a format id or a message to classify.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(request): Json<FormatRequest>,
) -> Result<Json<RenderedInstruction>, AppError> {
    let rendered = state
        .dispatcher
        .dispatch(&request.format, &request.topic, &state.snapshot)?;
    Ok(Json(rendered))
}

/// POST /api/v1/generate
///
/// Strict: `format` must be a registered format id.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<FormatRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let format = state.dispatcher.format_for(&request.format)?;

    let span = info_span!("generate", request_id = %Uuid::new_v4(), %format);
    let result = generate_content(&state, format, &request.topic)
        .instrument(span)
        .await?;
    Ok(Json(result))
}

/// POST /a2ui-agent/a2a/query
///
/// Agent entry point used by the portfolio front end.
pub async fn handle_query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, AppError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation("message cannot be empty".to_string()));
    }

    let request_id = Uuid::new_v4();
    let span = info_span!(
        "query",
        %request_id,
        session_id = request.session_id.as_deref().unwrap_or("-")
    );
    let result = async {
        info!(chars = message.len(), "Query received");
        answer_query(&state, message).await
    }
    .instrument(span)
    .await?;

    Ok(Json(QueryResponse { request_id, result }))
}
