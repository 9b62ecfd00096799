//! Luxury Travel Social Agent HTTP API server (Axum).
//!
//! `POST /api/generate` turns a request payload into per-platform copy;
//! `GET /health` reports liveness and counters.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use axum::Router;
use state::AppState;

/// Router over a fresh [`AppState`]; what the binary serves.
pub fn app() -> Router {
    let state = AppState::new();
    app_with_state(state)
}

/// Build the application router with a custom state.
pub fn app_with_state(state: AppState) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::generate_routes())
        .with_state(state)
}
