use crate::sheets_config::present;
use crate::{ConfigError, ConfigErrorResult, DEFAULT_SMTP_FROM_NAME, SMTPS_PORT};

use serde::Deserialize;

const GROUP: &str = "SMTP";

/// Notifier settings as loaded
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SmtpConfig {
    pub host: Option<String>,
    /// Kept as text so a bad value surfaces at request time, not at startup
    pub port: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    /// Mailbox that receives the notifications (MY_EMAIL)
    pub recipient: Option<String>,
    /// Sender address, defaults to `user`
    pub from_address: Option<String>,
    pub from_name: String,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: None,
            user: None,
            pass: None,
            recipient: None,
            from_address: None,
            from_name: String::from(DEFAULT_SMTP_FROM_NAME),
        }
    }
}

/// Complete notifier settings, ready for a send
#[derive(Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub recipient: String,
    pub from_address: String,
    pub from_name: String,
}

impl SmtpSettings {
    /// Implicit TLS on the SMTPS port, STARTTLS everywhere else
    pub fn secure(&self) -> bool {
        self.port == SMTPS_PORT
    }
}

impl std::fmt::Debug for SmtpSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("pass", &"<redacted>")
            .field("recipient", &self.recipient)
            .field("from_address", &self.from_address)
            .field("from_name", &self.from_name)
            .finish()
    }
}

impl SmtpConfig {
    pub fn is_complete(&self) -> bool {
        [
            &self.host,
            &self.port,
            &self.user,
            &self.pass,
            &self.recipient,
        ]
        .into_iter()
        .all(|value| present(value).is_some())
    }

    #[track_caller]
    pub fn resolve(&self) -> ConfigErrorResult<SmtpSettings> {
        let (Some(host), Some(port), Some(user), Some(pass), Some(recipient)) = (
            present(&self.host),
            present(&self.port),
            present(&self.user),
            present(&self.pass),
            present(&self.recipient),
        ) else {
            return Err(ConfigError::missing_group(GROUP));
        };

        let port: u16 = match port.trim().parse() {
            Ok(port) if port != 0 => port,
            _ => {
                return Err(ConfigError::smtp(format!(
                    "Invalid SMTP_PORT: expected 1-65535, got {port:?}"
                )));
            }
        };

        let from_address = present(&self.from_address).unwrap_or(user).to_string();

        Ok(SmtpSettings {
            host: host.to_string(),
            port,
            user: user.to_string(),
            pass: pass.to_string(),
            recipient: recipient.to_string(),
            from_address,
            from_name: self.from_name.clone(),
        })
    }
}
