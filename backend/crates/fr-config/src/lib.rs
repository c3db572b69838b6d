mod config;
mod cors_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod sheets_config;
mod smtp_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use cors_config::CorsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use sheets_config::{SheetsConfig, SheetsSettings};
pub use smtp_config::{SmtpConfig, SmtpSettings};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_CONFIG_FILENAME: &str = "form-relay.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_SHEETS_RANGE: &str = "Sheet1!A1";
const DEFAULT_SHEETS_API_BASE_URL: &str = "https://sheets.googleapis.com";
const DEFAULT_SMTP_FROM_NAME: &str = "Form";

/// Port that selects implicit TLS instead of STARTTLS
pub const SMTPS_PORT: u16 = 465;
