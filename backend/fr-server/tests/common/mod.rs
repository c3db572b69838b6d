#![allow(dead_code)]

//! Test infrastructure for fr-server API tests

use fr_config::{Config, CorsConfig, SheetsConfig, SheetsSettings, SmtpConfig, SmtpSettings};
use fr_core::{
    Ledger, LedgerError, LedgerRow, Notification, Notifier, NotifyError, SubmissionPipeline,
};
use fr_server::{AppState, build_router};

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// What the fakes were asked to do, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Append(Vec<String>),
    Notify(Notification),
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub struct RecordingLedger {
    calls: CallLog,
    fail: bool,
}

#[async_trait]
impl Ledger for RecordingLedger {
    async fn append_row(
        &self,
        _settings: &SheetsSettings,
        row: &LedgerRow,
    ) -> Result<(), LedgerError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Append(row.cells().to_vec()));
        if self.fail {
            return Err(LedgerError::api(403, "The caller does not have permission"));
        }
        Ok(())
    }
}

pub struct RecordingNotifier {
    calls: CallLog,
    fail: bool,
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(
        &self,
        _settings: &SmtpSettings,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        self.calls
            .lock()
            .unwrap()
            .push(Call::Notify(notification.clone()));
        if self.fail {
            return Err(NotifyError::transport("Connection refused"));
        }
        Ok(())
    }
}

/// Both downstream groups set, no origin enforcement
pub fn complete_config() -> Config {
    Config {
        sheets: SheetsConfig {
            service_account: Some(r#"{"client_email":"svc@example.iam"}"#.into()),
            spreadsheet_id: Some("sheet-123".into()),
            ..SheetsConfig::default()
        },
        smtp: SmtpConfig {
            host: Some("smtp.example.com".into()),
            port: Some("587".into()),
            user: Some("forms@example.com".into()),
            pass: Some("hunter2".into()),
            recipient: Some("owner@example.com".into()),
            ..SmtpConfig::default()
        },
        ..Config::default()
    }
}

pub fn with_allowed_origins(mut config: Config, origins: &[&str]) -> Config {
    config.cors = CorsConfig {
        allowed_origins: origins.iter().map(|o| o.to_string()).collect(),
    };
    config
}

/// Behavior of the fake collaborators
#[derive(Debug, Clone, Copy, Default)]
pub struct Downstream {
    pub ledger_fails: bool,
    pub notifier_fails: bool,
}

/// Router wired to recording fakes, plus the shared call log
pub fn create_test_app(config: Config, downstream: Downstream) -> (Router, CallLog) {
    let calls: CallLog = Arc::new(Mutex::new(Vec::new()));
    let pipeline = SubmissionPipeline::new(
        Arc::new(RecordingLedger {
            calls: calls.clone(),
            fail: downstream.ledger_fails,
        }),
        Arc::new(RecordingNotifier {
            calls: calls.clone(),
            fail: downstream.notifier_fails,
        }),
    );

    let app = build_router(AppState::new(config, pipeline)).expect("router builds");
    (app, calls)
}

pub fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/submit-form")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn post_json_from(origin: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/submit-form")
        .header("content-type", "application/json")
        .header("origin", origin)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

pub const JANE_DOE: &str = r#"{"service":"Web Design","name":"Jane Doe","email":"jane@example.com"}"#;
