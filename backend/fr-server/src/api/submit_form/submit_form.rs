//! Form submission REST API handlers

use crate::api::submit_form::origin::check_origin;
use crate::{ApiError, ApiResult, AppState, SubmitFormResponse};

use fr_core::{SubmissionOutcome, SubmissionPayload, SubmissionRequest};

use axum::{Json, body::Bytes, extract::State, http::HeaderMap};
use chrono::Utc;
use log::debug;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/submit-form
///
/// Checks run in order (origin, body, config); the first failure answers.
/// Then the row is appended and the notification sent, in that order.
pub async fn submit_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> ApiResult<Json<SubmitFormResponse>> {
    check_origin(&state.config.cors, &headers)?;

    let payload = SubmissionPayload::from_json(&body)?;
    let request = SubmissionRequest::try_from(payload)?;

    let sheets = state.config.sheets.resolve()?;
    let smtp = state.config.smtp.resolve()?;

    debug!("Processing '{}' submission", request.service);

    match state
        .pipeline
        .submit(&sheets, &smtp, &request, Utc::now())
        .await
    {
        SubmissionOutcome::Delivered { .. } => Ok(Json(SubmitFormResponse::saved_and_emailed())),
        SubmissionOutcome::LedgerFailed { error } => Err(error.into()),
        SubmissionOutcome::NotifyFailed { error, .. } => Err(ApiError::notify_failed(error)),
    }
}

/// Any method other than POST or OPTIONS
pub async fn method_not_allowed() -> ApiError {
    ApiError::method_not_allowed()
}
