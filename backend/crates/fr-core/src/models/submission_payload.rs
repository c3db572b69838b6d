//! Wire schema of the form body.

use crate::{CoreError, Result};

use serde::Deserialize;
use serde_json::Value;

/// Form body exactly as posted. Every field is optional here; required
/// fields are enforced when converting into a `SubmissionRequest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub service: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub description: Option<String>,
    pub pages: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub deadline: Option<String>,
}

impl SubmissionPayload {
    /// Parse a raw request body.
    ///
    /// An empty body is an empty form. Anything other than a JSON object,
    /// or a known field holding a non-string value, is rejected.
    #[track_caller]
    pub fn from_json(body: &[u8]) -> Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let value: Value = serde_json::from_slice(body)
            .map_err(|e| CoreError::invalid_body(format!("malformed JSON ({e})")))?;

        if !value.is_object() {
            return Err(CoreError::invalid_body("expected a JSON object"));
        }

        serde_json::from_value(value).map_err(|e| CoreError::invalid_body(e.to_string()))
    }
}
