use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SHEETS_API_BASE_URL, DEFAULT_SHEETS_RANGE,
};

use serde::Deserialize;

const GROUP: &str = "Google Sheets";

/// Ledger settings as loaded. The required values may be absent; they are
/// only checked when a submission needs them.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SheetsConfig {
    /// Service account JSON blob (GOOGLE_SERVICE_ACCOUNT)
    pub service_account: Option<String>,
    pub spreadsheet_id: Option<String>,
    /// A1 range the row is appended after
    pub range: String,
    pub api_base_url: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            service_account: None,
            spreadsheet_id: None,
            range: String::from(DEFAULT_SHEETS_RANGE),
            api_base_url: String::from(DEFAULT_SHEETS_API_BASE_URL),
        }
    }
}

/// Complete ledger settings, ready for an append call
#[derive(Clone)]
pub struct SheetsSettings {
    pub service_account: String,
    pub spreadsheet_id: String,
    pub range: String,
    pub api_base_url: String,
}

impl std::fmt::Debug for SheetsSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SheetsSettings")
            .field("service_account", &"<redacted>")
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("range", &self.range)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

impl SheetsConfig {
    pub fn is_complete(&self) -> bool {
        present(&self.service_account).is_some() && present(&self.spreadsheet_id).is_some()
    }

    #[track_caller]
    pub fn resolve(&self) -> ConfigErrorResult<SheetsSettings> {
        let (Some(service_account), Some(spreadsheet_id)) = (
            present(&self.service_account),
            present(&self.spreadsheet_id),
        ) else {
            return Err(ConfigError::missing_group(GROUP));
        };

        Ok(SheetsSettings {
            service_account: service_account.to_string(),
            spreadsheet_id: spreadsheet_id.to_string(),
            range: self.range.clone(),
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.range.trim().is_empty() {
            return Err(ConfigError::config("sheets.range cannot be empty"));
        }

        if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://")
        {
            return Err(ConfigError::config(format!(
                "sheets.api_base_url must be an http(s) URL, got {}",
                self.api_base_url
            )));
        }

        Ok(())
    }
}

/// Empty strings count as absent
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
