//! Validated form submission.

use crate::{CoreError, Result, SubmissionPayload};

/// One submission with its required fields guaranteed non-empty.
/// Optional fields are `None` when absent or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRequest {
    pub service: String,
    pub name: String,
    pub email: String,
    pub description: Option<String>,
    pub pages: Option<String>,
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub deadline: Option<String>,
}

impl TryFrom<SubmissionPayload> for SubmissionRequest {
    type Error = CoreError;

    #[track_caller]
    fn try_from(payload: SubmissionPayload) -> Result<Self> {
        let service = non_empty(payload.service);
        let name = non_empty(payload.name);
        let email = non_empty(payload.email);

        match (service, name, email) {
            (Some(service), Some(name), Some(email)) => Ok(Self {
                service,
                name,
                email,
                description: non_empty(payload.description),
                pages: non_empty(payload.pages),
                project_type: non_empty(payload.project_type),
                budget: non_empty(payload.budget),
                deadline: non_empty(payload.deadline),
            }),
            (service, name, email) => {
                let missing = [("service", service), ("name", name), ("email", email)]
                    .into_iter()
                    .filter(|(_, value)| value.is_none())
                    .map(|(field, _)| field)
                    .collect();
                Err(CoreError::missing_fields(missing))
            }
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
