//! Submission pipeline: ledger append, then notification.

use crate::{
    Ledger, LedgerError, LedgerRow, Notification, Notifier, NotifyError, SubmissionRequest,
};

use fr_config::{SheetsSettings, SmtpSettings};

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{error, info};

/// Result of running both side effects. Each stage reports separately so a
/// row that was saved before the mail failed stays visible to the caller.
#[derive(Debug)]
pub enum SubmissionOutcome {
    Delivered { row: LedgerRow },
    LedgerFailed { error: LedgerError },
    NotifyFailed { row: LedgerRow, error: NotifyError },
}

impl SubmissionOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmissionOutcome::Delivered { .. })
    }

    /// Whether the row reached the spreadsheet
    pub fn ledger_saved(&self) -> bool {
        !matches!(self, SubmissionOutcome::LedgerFailed { .. })
    }
}

/// The two collaborators a submission needs
#[derive(Clone)]
pub struct SubmissionPipeline {
    ledger: Arc<dyn Ledger>,
    notifier: Arc<dyn Notifier>,
}

impl SubmissionPipeline {
    pub fn new(ledger: Arc<dyn Ledger>, notifier: Arc<dyn Notifier>) -> Self {
        Self { ledger, notifier }
    }

    /// Append the row, and only once that has settled successfully, send the
    /// notification. Nothing is retried or rolled back.
    pub async fn submit(
        &self,
        sheets: &SheetsSettings,
        smtp: &SmtpSettings,
        request: &SubmissionRequest,
        received_at: DateTime<Utc>,
    ) -> SubmissionOutcome {
        let row = LedgerRow::new(request, received_at);

        if let Err(e) = self.ledger.append_row(sheets, &row).await {
            error!("submit-form ledger stage failed: {e}");
            return SubmissionOutcome::LedgerFailed { error: e };
        }

        let notification = Notification::for_submission(request);

        if let Err(e) = self.notifier.notify(smtp, &notification).await {
            error!(
                "submit-form mail stage failed after row {} was saved: {e}",
                row.timestamp()
            );
            return SubmissionOutcome::NotifyFailed { row, error: e };
        }

        info!(
            "Submission for '{}' saved to {} and emailed to {}",
            request.service, sheets.spreadsheet_id, smtp.recipient
        );

        SubmissionOutcome::Delivered { row }
    }
}
