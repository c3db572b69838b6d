use crate::{MISSING_FIELD_MARKER, SubmissionRequest};

/// Plain-text email announcing a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub subject: String,
    pub body: String,
    /// Submitter address, so a reply goes straight back to them
    pub reply_to: String,
}

impl Notification {
    pub fn for_submission(request: &SubmissionRequest) -> Self {
        let field = |value: &Option<String>| {
            value
                .as_deref()
                .unwrap_or(MISSING_FIELD_MARKER)
                .to_string()
        };

        let subject = format!("New {} submission — {}", request.service, request.name);

        let body = format!(
            "\nNew form submission\n\
             Service: {service}\n\
             Name: {name}\n\
             Email: {email}\n\
             Description: {description}\n\
             Pages: {pages}\n\
             Project Type: {project_type}\n\
             Budget: {budget}\n\
             Deadline: {deadline}\n",
            service = request.service,
            name = request.name,
            email = request.email,
            description = field(&request.description),
            pages = field(&request.pages),
            project_type = field(&request.project_type),
            budget = field(&request.budget),
            deadline = field(&request.deadline),
        );

        Self {
            subject,
            body,
            reply_to: request.email.clone(),
        }
    }
}
