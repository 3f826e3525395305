// GET handlers: version, api/surface; POST api/keys

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use super::AppState;
use crate::lifecycle::KeyEvent;
use crate::version::{NAME, VERSION};

/// GET /version — returns service name and version (from Cargo.toml at build time).
pub(super) async fn version_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": NAME,
        "version": VERSION,
    }))
}

/// GET /api/surface — current text/width of every target written so far.
pub(super) async fn surface_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.surface.snapshot())
}

/// POST /api/keys — forwards a key press to lifecycle control.
pub(super) async fn key_handler(
    State(state): State<AppState>,
    Json(event): Json<KeyEvent>,
) -> StatusCode {
    match state.keys_tx.send(event).await {
        Ok(()) => StatusCode::ACCEPTED,
        Err(_) => {
            tracing::warn!(key_code = event.key_code, "Key event dropped; lifecycle loop gone");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
