
use std::env;

use tempfile::TempDir;

/// Every variable Config::load() reads
pub(crate) const ALL_VARS: &[&str] = &[
    "FORM_RELAY_CONFIG",
    "FORM_RELAY_HOST",
    "FORM_RELAY_PORT",
    "FORM_RELAY_LOG_LEVEL",
    "FORM_RELAY_LOG_COLORED",
    "FORM_RELAY_LOG_FILE",
    "ALLOWED_ORIGINS",
    "GOOGLE_SERVICE_ACCOUNT",
    "SPREADSHEET_ID",
    "SPREADSHEET_RANGE",
    "SHEETS_API_BASE_URL",
    "SMTP_HOST",
    "SMTP_PORT",
    "SMTP_USER",
    "SMTP_PASS",
    "MY_EMAIL",
    "SMTP_FROM",
    "SMTP_FROM_NAME",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clean environment plus a TOML file that FORM_RELAY_CONFIG points at.
/// Keep the returned values alive for the duration of the test.
pub(crate) fn setup_config_file(contents: &str) -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("form-relay.toml");
    std::fs::write(&path, contents).unwrap();

    let mut guards: Vec<EnvGuard> = ALL_VARS
        .iter()
        .filter(|key| **key != "FORM_RELAY_CONFIG")
        .map(|key| EnvGuard::remove(key))
        .collect();
    guards.push(EnvGuard::set("FORM_RELAY_CONFIG", path.to_str().unwrap()));

    (temp, guards)
}
