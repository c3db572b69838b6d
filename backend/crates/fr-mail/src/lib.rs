//! SMTP notifier built on lettre.

mod message;
mod smtp_notifier;

#[cfg(test)]
mod tests;

pub use message::build_message;
pub use smtp_notifier::SmtpNotifier;
