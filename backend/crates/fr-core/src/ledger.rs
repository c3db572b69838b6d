//! Ledger seam: the spreadsheet that records one row per submission.

use crate::LedgerRow;

use fr_config::SheetsSettings;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

/// Appends submission rows to an external spreadsheet
#[async_trait]
pub trait Ledger: Send + Sync {
    async fn append_row(&self, settings: &SheetsSettings, row: &LedgerRow)
    -> Result<(), LedgerError>;
}

#[derive(Error, Debug)]
pub enum LedgerError {
    /// Service account blob unusable (bad JSON, bad key)
    #[error("Ledger credentials error: {message} {location}")]
    Credentials {
        message: String,
        location: ErrorLocation,
    },

    /// Token endpoint refused the assertion
    #[error("Ledger auth error: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    /// Spreadsheet API answered with a non-success status
    #[error("Ledger API error ({status}): {message} {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// Request never got an answer
    #[error("Ledger transport error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },
}

impl LedgerError {
    #[track_caller]
    pub fn credentials<S: Into<String>>(message: S) -> Self {
        LedgerError::Credentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        LedgerError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        LedgerError::Api {
            status,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        LedgerError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Underlying message without source location
    pub fn detail(&self) -> &str {
        match self {
            LedgerError::Credentials { message, .. }
            | LedgerError::Auth { message, .. }
            | LedgerError::Api { message, .. }
            | LedgerError::Transport { message, .. } => message,
        }
    }
}
