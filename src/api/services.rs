use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use http_body_util::BodyExt;
use tracing::Instrument;
use uuid::Uuid;

use super::{
    error::ApiError,
    models::{HealthResponse, IngestResponse},
    state::AppState,
    utils::{body_as_text, parse_content_type, status_for, validate_body_size},
};

/// Asset extraction endpoint (POST /api/assets)
///
/// ## Flow:
/// 1. Check Content-Type (when sent) and body size, decode UTF-8
/// 2. Decode the envelope, then the asset list inside it
/// 3. Resolve the collection name from the blob-less asset
/// 4. Upload every asset in order, awaiting each write
/// 5. Answer 200 / 207 / 500 depending on how many assets were stored
///
/// Malformed payloads and a missing collection marker are rejected before
/// anything is written.
pub async fn ingest_assets(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: axum::body::Body,
) -> Result<impl IntoResponse, ApiError> {
    let result = handle_ingest(&state, &headers, body).await;

    match &result {
        Ok(_) => state.metrics.request_accepted(),
        Err(_) => state.metrics.request_rejected(),
    }

    result
}

async fn handle_ingest(
    state: &AppState,
    headers: &HeaderMap,
    body: axum::body::Body,
) -> Result<(StatusCode, Json<IngestResponse>), ApiError> {
    if let Some(content_type) = headers.get(axum::http::header::CONTENT_TYPE) {
        let content_type = content_type.to_str().map_err(|_| {
            ApiError::InvalidPayload("Content-Type is not valid ASCII".into())
        })?;
        parse_content_type(content_type)?;
    }

    let body = read_body(body, state.config.server.max_payload_bytes).await?;

    let request_id = Uuid::now_v7().to_string();
    let span = tracing::info_span!("ingest", %request_id, collection = tracing::field::Empty);

    let report = state
        .ingestor
        .ingest(&state.storage, &body)
        .instrument(span)
        .await?;

    for outcome in &report.assets {
        if outcome.is_stored() {
            state.metrics.asset_stored(outcome.keys.len());
        } else {
            state.metrics.asset_failed(outcome.keys.len());
        }
    }
    tracing::debug!(%request_id, metrics = ?state.metrics.snapshot(), "Ingest counters");

    let response = IngestResponse::from_report(request_id, report);
    Ok((status_for(response.status), Json(response)))
}

/// Reads request body, validates size and decodes it as UTF-8
///
/// Decompression is handled by RequestDecompressionLayer, so this receives
/// already-decompressed data.
async fn read_body(body: axum::body::Body, max_size: usize) -> Result<String, ApiError> {
    let data = body
        .collect()
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))?
        .to_bytes()
        .to_vec();

    validate_body_size(&data, max_size)?;

    body_as_text(data)
}

/// Health check endpoint (GET /health)
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    use std::collections::HashMap;

    let mut components = HashMap::new();
    components.insert("api".to_string(), "healthy".to_string());
    components.insert(
        "storage".to_string(),
        format!("healthy ({})", state.storage.container),
    );

    let response = HealthResponse {
        status: "healthy".to_string(),
        components,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}
