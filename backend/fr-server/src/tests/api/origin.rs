use crate::api::submit_form::origin::{check_origin, cors_layer};
use crate::{ApiError, ServerError};

use fr_config::CorsConfig;

use axum::http::{HeaderMap, HeaderValue, header};

fn allow_list() -> CorsConfig {
    CorsConfig {
        allowed_origins: vec!["https://studio.example".into()],
    }
}

fn with_origin(origin: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ORIGIN, HeaderValue::from_static(origin));
    headers
}

#[test]
fn test_empty_allow_list_accepts_any_origin() {
    let cors = CorsConfig::default();

    assert!(check_origin(&cors, &HeaderMap::new()).is_ok());
    assert!(check_origin(&cors, &with_origin("https://anything.example")).is_ok());
}

#[test]
fn test_listed_origin_accepted() {
    assert!(check_origin(&allow_list(), &with_origin("https://studio.example")).is_ok());
}

#[test]
fn test_unlisted_origin_rejected() {
    let result = check_origin(&allow_list(), &with_origin("https://studio.example.evil"));

    match result {
        Err(ApiError::OriginForbidden { origin, .. }) => {
            assert_eq!(origin.as_deref(), Some("https://studio.example.evil"));
        }
        other => panic!("expected OriginForbidden, got {other:?}"),
    }
}

#[test]
fn test_missing_origin_rejected_when_enforced() {
    let result = check_origin(&allow_list(), &HeaderMap::new());

    assert!(matches!(
        result,
        Err(ApiError::OriginForbidden { origin: None, .. })
    ));
}

#[test]
fn test_cors_layer_rejects_unencodable_origin() {
    let cors = CorsConfig {
        allowed_origins: vec!["https://bad\norigin".into()],
    };

    assert!(matches!(
        cors_layer(&cors),
        Err(ServerError::InvalidOrigin { .. })
    ));
}
