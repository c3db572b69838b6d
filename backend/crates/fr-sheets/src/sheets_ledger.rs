use crate::{ServiceAccountKey, fetch_access_token};

use fr_config::SheetsSettings;
use fr_core::{Ledger, LedgerError, LedgerRow};

use async_trait::async_trait;
use log::debug;
use reqwest::{Client as ReqwestClient, Url};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct AppendRequest<'a> {
    values: [&'a LedgerRow; 1],
}

#[derive(Deserialize)]
struct GoogleErrorResponse {
    error: GoogleErrorBody,
}

#[derive(Deserialize)]
struct GoogleErrorBody {
    message: String,
}

/// Ledger backed by a Google Sheet
#[derive(Clone, Default)]
pub struct GoogleSheetsLedger {
    http: ReqwestClient,
}

impl GoogleSheetsLedger {
    pub fn new(http: ReqwestClient) -> Self {
        Self { http }
    }

    /// `{base}/v4/spreadsheets/{id}/values/{range}:append?valueInputOption=RAW`
    pub fn append_url(settings: &SheetsSettings) -> Result<Url, LedgerError> {
        let mut url = Url::parse(&settings.api_base_url).map_err(|e| {
            LedgerError::transport(format!(
                "invalid Sheets API base URL {}: {e}",
                settings.api_base_url
            ))
        })?;

        let range_segment = format!("{}:append", settings.range);

        url.path_segments_mut()
            .map_err(|_| LedgerError::transport("Sheets API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend([
                "v4",
                "spreadsheets",
                settings.spreadsheet_id.as_str(),
                "values",
                range_segment.as_str(),
            ]);

        url.query_pairs_mut().append_pair("valueInputOption", "RAW");

        Ok(url)
    }
}

#[async_trait]
impl Ledger for GoogleSheetsLedger {
    async fn append_row(
        &self,
        settings: &SheetsSettings,
        row: &LedgerRow,
    ) -> Result<(), LedgerError> {
        let key = ServiceAccountKey::from_json(&settings.service_account)?;
        let access_token = fetch_access_token(&self.http, &key).await?;
        let url = Self::append_url(settings)?;

        debug!("Appending row to {}", settings.spreadsheet_id);

        let response = self
            .http
            .post(url)
            .bearer_auth(&access_token)
            .json(&AppendRequest { values: [row] })
            .send()
            .await
            .map_err(|e| LedgerError::transport(format!("append request failed: {e}")))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let message = match response.json::<GoogleErrorResponse>().await {
            Ok(body) => body.error.message,
            Err(_) => format!(
                "Sheets API returned {}",
                status.canonical_reason().unwrap_or(status.as_str())
            ),
        };

        Err(LedgerError::api(status.as_u16(), message))
    }
}
