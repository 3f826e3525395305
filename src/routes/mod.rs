// HTTP + WebSocket routes

mod http;
mod ws;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};

use crate::lifecycle::KeyEvent;
use crate::surface::SharedSurface;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) surface: Arc<SharedSurface>,
    pub(crate) keys_tx: mpsc::Sender<KeyEvent>,
}

pub fn app(surface: Arc<SharedSurface>, keys_tx: mpsc::Sender<KeyEvent>) -> Router {
    let state = AppState { surface, keys_tx };
    Router::new()
        .route("/", get(|| async { "tvstatus: system status dashboard" })) // GET /
        .route("/version", get(http::version_handler)) // GET /version
        .route("/api/surface", get(http::surface_handler)) // GET /api/surface
        .route("/api/keys", post(http::key_handler)) // POST /api/keys
        .route("/ws/surface", get(ws::ws_surface)) // WS /ws/surface
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
