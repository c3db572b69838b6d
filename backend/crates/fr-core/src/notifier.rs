//! Notifier seam: the mail relay that tells a human about a submission.

use crate::Notification;

use fr_config::SmtpSettings;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use thiserror::Error;

/// Sends one notification per call
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(
        &self,
        settings: &SmtpSettings,
        notification: &Notification,
    ) -> Result<(), NotifyError>;
}

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Invalid mail address: {message} {location}")]
    Address {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to build message: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },

    /// Connection, TLS, auth or a negative SMTP reply
    #[error("SMTP error: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },
}

impl NotifyError {
    #[track_caller]
    pub fn address<S: Into<String>>(message: S) -> Self {
        NotifyError::Address {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn build<S: Into<String>>(message: S) -> Self {
        NotifyError::Build {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<S: Into<String>>(message: S) -> Self {
        NotifyError::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Underlying message without source location
    pub fn detail(&self) -> &str {
        match self {
            NotifyError::Address { message, .. }
            | NotifyError::Build { message, .. }
            | NotifyError::Transport { message, .. } => message,
        }
    }
}
