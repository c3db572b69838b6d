pub mod error;
pub mod submit_form;
