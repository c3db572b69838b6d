use crate::build_message;

use fr_config::SmtpSettings;
use fr_core::{Notification, Notifier, NotifyError};

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Tokio1Executor,
    transport::smtp::authentication::Credentials,
};
use log::debug;

/// Notifier that relays through an authenticated SMTP server.
///
/// A transport is built per send from the request's settings, so nothing is
/// shared between submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmtpNotifier;

impl SmtpNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Implicit TLS on port 465, STARTTLS otherwise
    pub fn transport(
        settings: &SmtpSettings,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, NotifyError> {
        let builder = if settings.secure() {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| {
            NotifyError::transport(format!("cannot set up relay {}: {e}", settings.host))
        })?;

        Ok(builder
            .port(settings.port)
            .credentials(Credentials::new(
                settings.user.clone(),
                settings.pass.clone(),
            ))
            .build())
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(
        &self,
        settings: &SmtpSettings,
        notification: &Notification,
    ) -> Result<(), NotifyError> {
        let message = build_message(settings, notification)?;
        let transport = Self::transport(settings)?;

        debug!(
            "Sending notification via {}:{} (secure: {})",
            settings.host,
            settings.port,
            settings.secure()
        );

        let response = transport
            .send(message)
            .await
            .map_err(|e| NotifyError::transport(e.to_string()))?;

        debug!("SMTP accepted message: {}", response.code());

        Ok(())
    }
}
