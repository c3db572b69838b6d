use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use serde_json::json;

fn component_status(complete: bool) -> &'static str {
    if complete { "configured" } else { "incomplete" }
}

/// GET /health - Health check with component status
pub async fn health_check(State(state): State<AppState>) -> Response {
    let health = json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "sheets": component_status(state.config.sheets.is_complete()),
            "smtp": component_status(state.config.smtp.is_complete()),
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - Liveness probe (is the process alive?)
pub async fn liveness_check() -> Response {
    (StatusCode::OK, "OK").into_response()
}

/// GET /ready - Readiness probe. Submissions would fail with a config
/// error until both downstream groups are set.
pub async fn readiness_check(State(state): State<AppState>) -> Response {
    if state.config.sheets.is_complete() && state.config.smtp.is_complete() {
        (StatusCode::OK, "Ready").into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "Not ready: configuration incomplete").into_response()
    }
}
