//! Readiness endpoint
//!
//! `GET /health` pings the user store: 200 when it answers, 503 with the
//! driver message when it does not.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::http::server::AppState;

/// GET /health
async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    match state.users.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ok", "database": "up" })),
        ),
        Err(e) => {
            tracing::warn!("Readiness check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "status": "unavailable", "error": e.to_string() })),
            )
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(readiness))
}
