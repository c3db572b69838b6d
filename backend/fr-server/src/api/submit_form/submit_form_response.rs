use serde::Serialize;

/// Body returned once both side effects completed
#[derive(Debug, Serialize)]
pub struct SubmitFormResponse {
    pub ok: bool,
    pub message: &'static str,
}

impl SubmitFormResponse {
    pub fn saved_and_emailed() -> Self {
        Self {
            ok: true,
            message: "Saved & emailed",
        }
    }
}
