use crate::Notification;
use crate::tests::jane_doe;

#[test]
fn test_subject_names_service_and_submitter() {
    let notification = Notification::for_submission(&jane_doe());

    assert_eq!(notification.subject, "New Logo submission — Jane Doe");
}

#[test]
fn test_body_uses_dash_for_unset_fields() {
    let notification = Notification::for_submission(&jane_doe());

    assert_eq!(
        notification.body,
        "\nNew form submission\n\
         Service: Logo\n\
         Name: Jane Doe\n\
         Email: jane@x.com\n\
         Description: -\n\
         Pages: -\n\
         Project Type: -\n\
         Budget: -\n\
         Deadline: -\n"
    );
    assert!(!notification.body.contains("undefined"));
    assert!(!notification.body.contains("null"));
}

#[test]
fn test_body_lists_provided_fields() {
    let mut request = jane_doe();
    request.description = Some("Minimal mark".into());
    request.budget = Some("$500".into());

    let notification = Notification::for_submission(&request);

    assert!(notification.body.contains("Description: Minimal mark\n"));
    assert!(notification.body.contains("Budget: $500\n"));
    assert!(notification.body.contains("Pages: -\n"));
}

#[test]
fn test_reply_to_is_submitter() {
    let notification = Notification::for_submission(&jane_doe());

    assert_eq!(notification.reply_to, "jane@x.com");
}
