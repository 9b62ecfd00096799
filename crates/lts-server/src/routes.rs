use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use lts_core::{GenerationResult, RawRequest};
use serde_json::{json, Value};
use tracing::{error, info, info_span, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn generate_routes() -> Router<AppState> {
    Router::new().route("/api/generate", post(generate))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "started_at": state.started_at.to_rfc3339(),
        "uptime_secs": state.uptime_secs(),
        "generations": state.generations(),
    }))
}

async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<RawRequest>, JsonRejection>,
) -> Response {
    let request_id = Uuid::new_v4().to_string();
    let span = info_span!("generate", request_id = %request_id);
    let mut response = span.in_scope(|| match handle_generate(&state, payload) {
        Ok(result) => Json(result).into_response(),
        Err(err) => err.into_response(),
    });
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn handle_generate(
    state: &AppState,
    payload: Result<Json<RawRequest>, JsonRejection>,
) -> Result<GenerationResult, ApiError> {
    let Json(raw) = payload.map_err(|rejection| {
        warn!(%rejection, "rejected payload");
        ApiError::bad_request("Invalid payload")
    })?;
    if !is_well_formed(&raw) {
        warn!("payload missing destination or platforms");
        return Err(ApiError::bad_request("Invalid payload"));
    }

    let result = lts_generator::generate_raw(raw).map_err(|err| {
        if err.is_validation() {
            warn!(%err, "invalid generation request");
        } else {
            error!(%err, "generation failed");
        }
        ApiError::from(err)
    })?;

    state.record_generation();
    info!(
        platforms = result.by_platform.len(),
        keywords = result.universal.keywords.len(),
        "generated copy"
    );
    Ok(result)
}

/// Structural check done before the core sees the request.
fn is_well_formed(raw: &RawRequest) -> bool {
    let has_destination = raw.destination.as_deref().is_some_and(|d| !d.is_empty());
    let has_platforms = raw.platforms.as_ref().is_some_and(|p| !p.is_empty());
    has_destination && has_platforms
}
