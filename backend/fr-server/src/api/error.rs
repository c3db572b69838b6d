//! REST API error types
//!
//! Every rejection of a form submission ends up here and is rendered as
//! `{ ok: false, message, kind, ... }` with the matching status code.

use fr_config::ConfigError;
use fr_core::{CoreError, LedgerError, NotifyError};

use std::panic::Location;

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// Side effect that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Ledger,
    Mail,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Ledger => f.write_str("ledger"),
            Stage::Mail => f.write_str("mail"),
        }
    }
}

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub ok: bool,
    /// Human-readable message
    pub message: String,
    /// Machine-readable kind (e.g. "validation_error", "downstream_error")
    pub kind: &'static str,
    /// Underlying failure text for server-side errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    /// Whether the row reached the spreadsheet before the failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ledger_saved: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<&'static str>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Anything but POST/OPTIONS (405)
    #[error("Method not allowed {location}")]
    MethodNotAllowed { location: ErrorLocation },

    /// Origin missing from the allow-list (403)
    #[error("Origin not allowed: {origin:?} {location}")]
    OriginForbidden {
        origin: Option<String>,
        location: ErrorLocation,
    },

    /// Missing required field or unusable body (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    /// Deployment config incomplete, checked before any side effect (500)
    #[error("Config error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Ledger or mail call failed (500)
    #[error("Downstream {stage} error: {message} (ledger_saved: {ledger_saved}) {location}")]
    Downstream {
        stage: Stage,
        message: String,
        ledger_saved: bool,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn method_not_allowed() -> Self {
        ApiError::MethodNotAllowed {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn origin_forbidden(origin: Option<String>) -> Self {
        ApiError::OriginForbidden {
            origin,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Mail failed after the row was appended
    #[track_caller]
    pub fn notify_failed(error: NotifyError) -> Self {
        ApiError::Downstream {
            stage: Stage::Mail,
            message: error.detail().to_string(),
            ledger_saved: true,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::OriginForbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Config { .. } | ApiError::Downstream { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Log the error with location for debugging
        if status.is_server_error() {
            log::error!("submit-form error: {}", self);
        } else {
            log::warn!("submit-form rejected: {}", self);
        }

        let body = match self {
            ApiError::MethodNotAllowed { .. } => ApiErrorResponse::new(
                "Method not allowed".to_string(),
                "method_not_allowed",
            ),
            ApiError::OriginForbidden { .. } => {
                ApiErrorResponse::new("Origin not allowed".to_string(), "origin_forbidden")
            }
            ApiError::Validation {
                message, fields, ..
            } => ApiErrorResponse {
                fields,
                ..ApiErrorResponse::new(message, "validation_error")
            },
            ApiError::Config { message, .. } => ApiErrorResponse::new(message, "config_error"),
            ApiError::Downstream {
                stage,
                message,
                ledger_saved,
                ..
            } => ApiErrorResponse {
                error: Some(message),
                stage: Some(stage),
                ledger_saved: Some(ledger_saved),
                ..ApiErrorResponse::new("Server error".to_string(), "downstream_error")
            },
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::METHOD_NOT_ALLOWED {
            response
                .headers_mut()
                .insert(header::ALLOW, HeaderValue::from_static("POST, OPTIONS"));
        }
        response
    }
}

impl ApiErrorResponse {
    fn new(message: String, kind: &'static str) -> Self {
        Self {
            ok: false,
            message,
            kind,
            error: None,
            stage: None,
            ledger_saved: None,
            fields: Vec::new(),
        }
    }
}

/// Convert body and field validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let message = e.public_message();
        let fields = match e {
            CoreError::Validation { fields, .. } => fields,
            CoreError::InvalidBody { .. } => Vec::new(),
        };
        ApiError::Validation {
            message,
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert incomplete deployment config to API errors
impl From<ConfigError> for ApiError {
    #[track_caller]
    fn from(e: ConfigError) -> Self {
        // Full error (with location) stays in the server log
        log::error!("Deployment config rejected submission: {}", e);
        ApiError::Config {
            message: e.public_message(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert a failed ledger append to API errors; nothing was saved
impl From<LedgerError> for ApiError {
    #[track_caller]
    fn from(e: LedgerError) -> Self {
        ApiError::Downstream {
            stage: Stage::Ledger,
            message: e.detail().to_string(),
            ledger_saved: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
