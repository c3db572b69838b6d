pub mod origin;
pub mod submit_form;
pub mod submit_form_response;
