use crate::api::submit_form::origin::cors_layer;
use crate::{AppState, MAX_BODY_BYTES, SUBMIT_FORM_PATH, ServerResult, health};
use crate::{method_not_allowed, submit_form};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> ServerResult<Router> {
    let cors = cors_layer(&state.config.cors)?;

    Ok(Router::new()
        // Form endpoint; every other method answers 405
        .route(
            SUBMIT_FORM_PATH,
            post(submit_form).fallback(method_not_allowed),
        )
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        // Add shared state
        .with_state(state)
        // CORS middleware (answers preflight before any handler runs)
        .layer(cors))
}
