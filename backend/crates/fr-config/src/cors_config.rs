use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// Origin allow-list for the form endpoint.
///
/// An empty list disables origin enforcement and answers CORS with `*`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// Parse a comma separated list, dropping blanks and trailing slashes
    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(|origin| origin.trim().trim_end_matches('/'))
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn is_enforced(&self) -> bool {
        !self.allowed_origins.is_empty()
    }

    /// Exact match against the allow-list
    pub fn is_allowed(&self, origin: &str) -> bool {
        self.allowed_origins.iter().any(|allowed| allowed == origin)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        for origin in &self.allowed_origins {
            if origin == "*" {
                return Err(ConfigError::config(
                    "cors.allowed_origins cannot contain '*'; leave it empty to allow any origin",
                ));
            }
            if !origin.starts_with("http://") && !origin.starts_with("https://") {
                return Err(ConfigError::config(format!(
                    "cors.allowed_origins entry must start with http:// or https://, got {origin}"
                )));
            }
        }

        Ok(())
    }
}
