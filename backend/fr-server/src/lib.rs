pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    error::Stage,
    submit_form::{
        submit_form::{method_not_allowed, submit_form},
        submit_form_response::SubmitFormResponse,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};

pub use crate::routes::build_router;

/// Path the form posts to
pub const SUBMIT_FORM_PATH: &str = "/api/submit-form";
/// Largest accepted form body
pub const MAX_BODY_BYTES: usize = 64 * 1024;
