pub mod ledger_row;
pub mod notification;
pub mod submission_payload;
pub mod submission_request;
