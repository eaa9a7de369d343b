use anyhow::Result;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::{extract::State, http::header, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use termcloud::document::parse_documents;
use termcloud::{score, Document, ScoreConfig, ScoreError, ScoredTerm};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Deserialize)]
pub struct ScoreRequest {
    /// Raw JSON so malformed documents are reported per position.
    pub documents: serde_json::Value,
    #[serde(default)]
    pub config: Option<ScoreConfig>,
}

#[derive(Serialize)]
pub struct WordCloudResponse {
    pub num_docs: usize,
    pub took_s: f64,
    pub words: Vec<ScoredTerm>,
}

#[derive(Clone)]
pub struct AppState {
    /// Serialized cloud for the startup corpus; cloning only bumps a refcount.
    pub cloud_json: Bytes,
    pub config: ScoreConfig,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

fn api_error(status: StatusCode, message: impl ToString) -> ApiError {
    (status, Json(serde_json::json!({ "error": message.to_string() })))
}

fn score_timed(docs: &[Document], config: &ScoreConfig) -> Result<WordCloudResponse, ScoreError> {
    let start = Instant::now();
    let words = score(docs, config)?;
    Ok(WordCloudResponse { num_docs: docs.len(), took_s: start.elapsed().as_secs_f64(), words })
}

/// Comma-separated origins restrict CORS; unset, empty or unparsable lists allow any origin.
pub fn cors_layer(allowed_origins: Option<&str>) -> CorsLayer {
    let origins: Vec<_> = allowed_origins
        .into_iter()
        .flat_map(|val| val.split(','))
        .filter_map(|s| s.trim().parse().ok())
        .collect();
    let allow = if origins.is_empty() { AllowOrigin::any() } else { AllowOrigin::list(origins) };
    CorsLayer::new().allow_origin(allow).allow_methods(Any).allow_headers(Any)
}

pub fn build_app(documents: Vec<Document>, config: ScoreConfig) -> Result<Router> {
    let cloud = score_timed(&documents, &config)?;
    tracing::info!(num_docs = cloud.num_docs, terms = cloud.words.len(), took_s = cloud.took_s, "word cloud ready");
    let cloud_json = Bytes::from(serde_json::to_vec(&cloud)?);
    let cors = cors_layer(std::env::var("CORS_ALLOW_ORIGIN").ok().as_deref());

    Ok(Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/wordcloud", get(cloud_handler).post(score_handler))
        .with_state(AppState { cloud_json, config })
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

pub async fn cloud_handler(State(state): State<AppState>) -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "application/json")], state.cloud_json)
}

pub async fn score_handler(
    State(state): State<AppState>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<WordCloudResponse>, ApiError> {
    let Json(req) = payload.map_err(|rejection| api_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text()))?;
    let docs = parse_documents(&req.documents).map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;
    let config = req.config.unwrap_or_else(|| state.config.clone());

    let resp = tokio::task::spawn_blocking(move || score_timed(&docs, &config))
        .await
        .map_err(|e| api_error(StatusCode::INTERNAL_SERVER_ERROR, e))?
        .map_err(|e| api_error(StatusCode::UNPROCESSABLE_ENTITY, e))?;
    tracing::debug!(num_docs = resp.num_docs, terms = resp.words.len(), "scored posted corpus");
    Ok(Json(resp))
}
