use crate::{SmtpNotifier, build_message};

use fr_config::SmtpSettings;
use fr_core::{Notification, Notifier, NotifyError};

use std::net::TcpListener;

fn settings() -> SmtpSettings {
    SmtpSettings {
        host: "smtp.example.com".into(),
        port: 587,
        user: "forms@example.com".into(),
        pass: "hunter2".into(),
        recipient: "owner@example.com".into(),
        from_address: "forms@example.com".into(),
        from_name: "Form".into(),
    }
}

fn notification() -> Notification {
    Notification {
        subject: "New Logo submission — Jane Doe".into(),
        body: "\nNew form submission\nService: Logo\n".into(),
        reply_to: "jane@x.com".into(),
    }
}

#[test]
fn test_message_envelope_uses_sender_and_recipient() {
    let message = build_message(&settings(), &notification()).unwrap();

    let envelope = message.envelope();
    assert_eq!(
        envelope.from().map(|a| a.to_string()).as_deref(),
        Some("forms@example.com")
    );
    let to: Vec<String> = envelope.to().iter().map(|a| a.to_string()).collect();
    assert_eq!(to, vec!["owner@example.com"]);
}

#[test]
fn test_message_headers_carry_sender_name_and_reply_to() {
    let message = build_message(&settings(), &notification()).unwrap();

    let formatted = String::from_utf8(message.formatted()).unwrap();
    let from_line = formatted
        .lines()
        .find(|line| line.starts_with("From: "))
        .unwrap();
    assert!(from_line.contains("Form"));
    assert!(from_line.contains("<forms@example.com>"));
    assert!(formatted.contains("Reply-To: jane@x.com"));
    assert!(formatted.contains("Content-Type: text/plain; charset=utf-8"));
}

#[test]
fn test_message_skips_unparseable_reply_to() {
    let mut notification = notification();
    notification.reply_to = "not an address".into();

    let message = build_message(&settings(), &notification).unwrap();

    let formatted = String::from_utf8(message.formatted()).unwrap();
    assert!(!formatted.contains("Reply-To"));
}

#[test]
fn test_message_rejects_invalid_recipient() {
    let mut settings = settings();
    settings.recipient = "owner-at-example".into();

    let err = build_message(&settings, &notification()).unwrap_err();

    assert!(matches!(err, NotifyError::Address { .. }));
    assert!(err.detail().contains("recipient"));
}

#[test]
fn test_message_rejects_invalid_sender() {
    let mut settings = settings();
    settings.from_address = "forms".into();

    let err = build_message(&settings, &notification()).unwrap_err();

    assert!(matches!(err, NotifyError::Address { .. }));
}

#[tokio::test]
async fn test_notify_unreachable_relay_is_transport_error() {
    // Reserve a port, then free it so nothing listens there
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let mut settings = settings();
    settings.host = "127.0.0.1".into();
    settings.port = port;

    let err = SmtpNotifier::new()
        .notify(&settings, &notification())
        .await
        .unwrap_err();

    assert!(matches!(err, NotifyError::Transport { .. }));
    assert!(!err.to_string().contains("hunter2"));
}
