pub mod error;
pub mod ledger;
pub mod models;
pub mod notifier;
pub mod submission;


pub use error::{CoreError, Result};
pub use ledger::{Ledger, LedgerError};
pub use models::ledger_row::LedgerRow;
pub use models::notification::Notification;
pub use models::submission_payload::SubmissionPayload;
pub use models::submission_request::SubmissionRequest;
pub use notifier::{Notifier, NotifyError};
pub use submission::{SubmissionOutcome, SubmissionPipeline};

/// Placeholder for an unset optional field in the notification body
pub const MISSING_FIELD_MARKER: &str = "-";
