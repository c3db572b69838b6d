use crate::{
    ConfigError, ConfigErrorResult, CorsConfig, DEFAULT_CONFIG_FILENAME, LoggingConfig,
    ServerConfig, SheetsConfig, SmtpConfig,
};

use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Deserialize;

/// Process-wide configuration, built once at startup and handed to the
/// router. Nothing reads the environment after this.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
    pub sheets: SheetsConfig,
    pub smtp: SmtpConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. FORM_RELAY_CONFIG names a TOML file (must exist), else
    ///    ./form-relay.toml is used when present, else defaults
    /// 2. Environment variables override file values
    ///
    /// Does NOT validate - call validate() after load(). Incomplete
    /// Sheets/SMTP groups are not load errors either; they are reported per
    /// request.
    pub fn load() -> ConfigErrorResult<Self> {
        let mut config = match Self::config_path()? {
            Some(path) => Self::load_toml(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the TOML file to read, if any.
    /// Priority: FORM_RELAY_CONFIG env var > ./form-relay.toml (if it exists)
    pub fn config_path() -> ConfigErrorResult<Option<PathBuf>> {
        if let Ok(path) = std::env::var("FORM_RELAY_CONFIG") {
            return Ok(Some(PathBuf::from(path)));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        let default_path = cwd.join(DEFAULT_CONFIG_FILENAME);

        Ok(default_path.exists().then_some(default_path))
    }

    /// Validate static settings. Call after load() to catch errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.cors.validate()?;
        self.sheets.validate()?;

        if self.smtp.from_name.contains(['"', '\r', '\n']) {
            return Err(ConfigError::smtp(
                "smtp.from_name cannot contain quotes or line breaks",
            ));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        if self.cors.is_enforced() {
            info!("  cors: {}", self.cors.allowed_origins.join(", "));
        } else {
            warn!("  cors: origin enforcement DISABLED (any origin accepted)");
        }

        info!(
            "  sheets: spreadsheet={}, range={}, credentials={}",
            self.sheets.spreadsheet_id.as_deref().unwrap_or("<unset>"),
            self.sheets.range,
            if self.sheets.service_account.is_some() {
                "set"
            } else {
                "unset"
            }
        );

        info!(
            "  smtp: host={}, port={}, recipient={}",
            self.smtp.host.as_deref().unwrap_or("<unset>"),
            self.smtp.port.as_deref().unwrap_or("<unset>"),
            self.smtp.recipient.as_deref().unwrap_or("<unset>")
        );

        if !self.sheets.is_complete() {
            warn!("Google Sheets config incomplete: submissions will be rejected");
        }
        if !self.smtp.is_complete() {
            warn!("SMTP config incomplete: submissions will be rejected");
        }
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("FORM_RELAY_HOST", &mut self.server.host);
        Self::apply_env_parse("FORM_RELAY_PORT", &mut self.server.port);

        // Logging
        Self::apply_env_parse("FORM_RELAY_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("FORM_RELAY_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("FORM_RELAY_LOG_FILE", &mut self.logging.file);

        // CORS
        if let Ok(val) = std::env::var("ALLOWED_ORIGINS") {
            self.cors.allowed_origins = CorsConfig::parse_origins(&val);
        }

        // Google Sheets
        Self::apply_env_option_string("GOOGLE_SERVICE_ACCOUNT", &mut self.sheets.service_account);
        Self::apply_env_option_string("SPREADSHEET_ID", &mut self.sheets.spreadsheet_id);
        Self::apply_env_string("SPREADSHEET_RANGE", &mut self.sheets.range);
        Self::apply_env_string("SHEETS_API_BASE_URL", &mut self.sheets.api_base_url);

        // SMTP
        Self::apply_env_option_string("SMTP_HOST", &mut self.smtp.host);
        Self::apply_env_option_string("SMTP_PORT", &mut self.smtp.port);
        Self::apply_env_option_string("SMTP_USER", &mut self.smtp.user);
        Self::apply_env_option_string("SMTP_PASS", &mut self.smtp.pass);
        Self::apply_env_option_string("MY_EMAIL", &mut self.smtp.recipient);
        Self::apply_env_option_string("SMTP_FROM", &mut self.smtp.from_address);
        Self::apply_env_string("SMTP_FROM_NAME", &mut self.smtp.from_name);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
