use crate::{ASSERTION_LIFETIME_SECS, JWT_BEARER_GRANT, ServiceAccountKey};

use fr_core::LedgerError;

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use log::debug;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

/// OAuth2 scope for reading and writing spreadsheets
pub const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

#[derive(Debug, Serialize)]
struct AssertionClaims<'a> {
    iss: &'a str,
    scope: &'a str,
    aud: &'a str,
    iat: u64,
    exp: u64,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Sign a JWT assertion with the service account key and exchange it for an
/// access token. Tokens are not cached.
pub async fn fetch_access_token(
    http: &ReqwestClient,
    key: &ServiceAccountKey,
) -> Result<String, LedgerError> {
    let assertion = sign_assertion(key)?;

    let response = http
        .post(&key.token_uri)
        .form(&[
            ("grant_type", JWT_BEARER_GRANT),
            ("assertion", assertion.as_str()),
        ])
        .send()
        .await
        .map_err(|e| LedgerError::transport(format!("token request failed: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| LedgerError::transport(format!("token response unreadable: {e}")))?;

    if !status.is_success() {
        let message = match serde_json::from_str::<TokenErrorResponse>(&body) {
            Ok(TokenErrorResponse {
                error,
                error_description: Some(description),
            }) => format!("{error}: {description}"),
            Ok(TokenErrorResponse { error, .. }) => error,
            Err(_) => format!("token endpoint returned {status}"),
        };
        return Err(LedgerError::auth(message));
    }

    let token: TokenResponse = serde_json::from_str(&body)
        .map_err(|e| LedgerError::auth(format!("token response missing access_token: {e}")))?;

    debug!("Obtained Sheets access token for {}", key.client_email);

    Ok(token.access_token)
}

fn sign_assertion(key: &ServiceAccountKey) -> Result<String, LedgerError> {
    let iat = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();

    let claims = AssertionClaims {
        iss: &key.client_email,
        scope: SHEETS_SCOPE,
        aud: &key.token_uri,
        iat,
        exp: iat + ASSERTION_LIFETIME_SECS,
    };

    let mut header = Header::new(Algorithm::RS256);
    header.kid = key.private_key_id.clone();

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes()).map_err(|e| {
        LedgerError::credentials(format!("private_key is not a usable RSA key: {e}"))
    })?;

    jsonwebtoken::encode(&header, &claims, &encoding_key)
        .map_err(|e| LedgerError::credentials(format!("failed to sign token assertion: {e}")))
}
