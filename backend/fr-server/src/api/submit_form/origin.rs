//! Origin gate and CORS layer for the form endpoint.

use crate::{ApiError, ServerError, ServerResult};

use fr_config::CorsConfig;

use axum::http::{HeaderMap, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Reject the request unless its Origin is allow-listed.
/// With an empty allow-list every request passes.
#[track_caller]
pub fn check_origin(cors: &CorsConfig, headers: &HeaderMap) -> Result<(), ApiError> {
    if !cors.is_enforced() {
        return Ok(());
    }

    let origin = headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok());

    match origin {
        Some(origin) if cors.is_allowed(origin) => Ok(()),
        other => Err(ApiError::origin_forbidden(other.map(String::from))),
    }
}

/// CORS headers for preflight and actual requests.
///
/// Preflight (OPTIONS) requests are answered by this layer directly and
/// never reach a handler.
pub fn cors_layer(cors: &CorsConfig) -> ServerResult<CorsLayer> {
    let allow_origin = if cors.is_enforced() {
        let origins = cors
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|_| ServerError::InvalidOrigin {
                    origin: origin.clone(),
                })
            })
            .collect::<ServerResult<Vec<_>>>()?;
        AllowOrigin::list(origins)
    } else {
        AllowOrigin::any()
    };

    Ok(CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]))
}
