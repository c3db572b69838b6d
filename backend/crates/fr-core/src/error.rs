use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    /// Body parsed but a required field is missing or empty
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        fields: Vec<&'static str>,
        location: ErrorLocation,
    },

    /// Body is not a JSON object of string fields
    #[error("Invalid request body: {message} {location}")]
    InvalidBody {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn missing_fields(fields: Vec<&'static str>) -> Self {
        CoreError::Validation {
            message: "Missing required fields".to_string(),
            fields,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_body<S: Into<String>>(message: S) -> Self {
        CoreError::InvalidBody {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message for the HTTP caller, without source location
    pub fn public_message(&self) -> String {
        match self {
            CoreError::Validation { message, .. } => message.clone(),
            CoreError::InvalidBody { message, .. } => format!("Invalid request body: {message}"),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
