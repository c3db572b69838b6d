//! Google Sheets ledger.
//!
//! Authenticates with a service account (signed JWT exchanged for an OAuth2
//! access token) and appends rows through the Sheets v4 `values:append` API.

mod service_account;
mod sheets_ledger;
mod token;

pub use service_account::ServiceAccountKey;
pub use sheets_ledger::GoogleSheetsLedger;
pub use token::{SHEETS_SCOPE, fetch_access_token};

const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
const ASSERTION_LIFETIME_SECS: u64 = 3600;
