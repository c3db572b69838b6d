use fr_config::SmtpSettings;
use fr_core::{Notification, NotifyError};

use lettre::{
    Address, Message,
    message::{Mailbox, header::ContentType},
};
use log::debug;

/// Build the plain-text notification email.
///
/// From is `"{from_name}" <{from_address}>`, To is the configured recipient.
/// An unparseable submitter address only drops the Reply-To header.
pub fn build_message(
    settings: &SmtpSettings,
    notification: &Notification,
) -> Result<Message, NotifyError> {
    let from_address: Address = settings.from_address.parse().map_err(|e| {
        NotifyError::address(format!("sender {:?}: {e}", settings.from_address))
    })?;
    let from = Mailbox::new(Some(settings.from_name.clone()), from_address);

    let to: Mailbox = settings
        .recipient
        .parse()
        .map_err(|e| NotifyError::address(format!("recipient {:?}: {e}", settings.recipient)))?;

    let mut builder = Message::builder()
        .from(from)
        .to(to)
        .subject(notification.subject.as_str())
        .header(ContentType::TEXT_PLAIN);

    match notification.reply_to.parse::<Mailbox>() {
        Ok(reply_to) => builder = builder.reply_to(reply_to),
        Err(e) => debug!("Skipping Reply-To {:?}: {e}", notification.reply_to),
    }

    builder
        .body(notification.body.clone())
        .map_err(|e| NotifyError::build(e.to_string()))
}
