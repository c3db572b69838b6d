use crate::SubmissionRequest;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

/// Column headers, in append order
pub const LEDGER_COLUMNS: [&str; 9] = [
    "Timestamp",
    "Service",
    "Name",
    "Email",
    "Description",
    "Pages",
    "Project Type",
    "Budget",
    "Deadline",
];

/// One spreadsheet row. Unset optional fields are empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LedgerRow(pub [String; 9]);

impl LedgerRow {
    pub fn new(request: &SubmissionRequest, received_at: DateTime<Utc>) -> Self {
        let cell = |value: &Option<String>| value.clone().unwrap_or_default();

        Self([
            received_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            request.service.clone(),
            request.name.clone(),
            request.email.clone(),
            cell(&request.description),
            cell(&request.pages),
            cell(&request.project_type),
            cell(&request.budget),
            cell(&request.deadline),
        ])
    }

    pub fn cells(&self) -> &[String] {
        &self.0
    }

    pub fn timestamp(&self) -> &str {
        &self.0[0]
    }
}
