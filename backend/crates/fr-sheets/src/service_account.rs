use crate::DEFAULT_TOKEN_URI;

use fr_core::LedgerError;

use serde::Deserialize;

/// The fields of a Google service account key file that signing needs
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    pub client_email: String,
    pub private_key: String,
    #[serde(default)]
    pub private_key_id: Option<String>,
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URI.to_string()
}

impl ServiceAccountKey {
    /// Parse the JSON blob. Errors describe the shape problem only, never
    /// the key material.
    #[track_caller]
    pub fn from_json(blob: &str) -> Result<Self, LedgerError> {
        let key: Self = serde_json::from_str(blob).map_err(|e| {
            LedgerError::credentials(format!(
                "GOOGLE_SERVICE_ACCOUNT is not a valid service account key (line {}, column {})",
                e.line(),
                e.column()
            ))
        })?;

        if key.client_email.is_empty() || key.private_key.is_empty() {
            return Err(LedgerError::credentials(
                "GOOGLE_SERVICE_ACCOUNT is missing client_email or private_key",
            ));
        }

        Ok(key)
    }
}

impl std::fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key", &"<redacted>")
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish()
    }
}
