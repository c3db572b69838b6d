use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    /// A deployment group needed to serve a submission is incomplete
    #[error("Missing {group} config {location}")]
    MissingGroup {
        group: &'static str,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Config",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "Server",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an SMTP error
    #[track_caller]
    pub fn smtp<S: Into<String>>(message: S) -> Self {
        ConfigError::Generic {
            category: "SMTP",
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a missing-group error
    #[track_caller]
    pub fn missing_group(group: &'static str) -> Self {
        ConfigError::MissingGroup {
            group,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message safe to hand back to an HTTP caller (no location, no values)
    pub fn public_message(&self) -> String {
        match self {
            ConfigError::MissingGroup { group, .. } => format!("Missing {group} config"),
            ConfigError::Generic { message, .. } => message.clone(),
            ConfigError::Io { path, .. } | ConfigError::Toml { path, .. } => {
                format!("Unreadable config file {}", path.display())
            }
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
