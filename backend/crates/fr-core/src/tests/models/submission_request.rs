use crate::{CoreError, SubmissionPayload, SubmissionRequest};

fn payload(service: &str, name: &str, email: &str) -> SubmissionPayload {
    SubmissionPayload {
        service: Some(service.into()),
        name: Some(name.into()),
        email: Some(email.into()),
        ..Default::default()
    }
}

#[test]
fn test_request_from_complete_payload() {
    let request = SubmissionRequest::try_from(SubmissionPayload {
        budget: Some("$2k".into()),
        ..payload("Logo", "Jane Doe", "jane@x.com")
    })
    .unwrap();

    assert_eq!(request.service, "Logo");
    assert_eq!(request.budget.as_deref(), Some("$2k"));
    assert_eq!(request.deadline, None);
}

#[test]
fn test_request_empty_optional_is_none() {
    let request = SubmissionRequest::try_from(SubmissionPayload {
        description: Some(String::new()),
        ..payload("Logo", "Jane Doe", "jane@x.com")
    })
    .unwrap();

    assert_eq!(request.description, None);
}

#[test]
fn test_request_missing_required_fields_are_listed() {
    let err = SubmissionRequest::try_from(SubmissionPayload {
        service: Some("Logo".into()),
        name: Some(String::new()),
        ..Default::default()
    })
    .unwrap_err();

    match err {
        CoreError::Validation {
            message, fields, ..
        } => {
            assert_eq!(message, "Missing required fields");
            assert_eq!(fields, vec!["name", "email"]);
        }
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn test_request_each_required_field_is_enforced() {
    for (service, name, email) in [
        ("", "Jane", "j@x.com"),
        ("Logo", "", "j@x.com"),
        ("Logo", "Jane", ""),
    ] {
        let result = SubmissionRequest::try_from(payload(service, name, email));
        assert!(
            matches!(result, Err(CoreError::Validation { .. })),
            "accepted service={service:?} name={name:?} email={email:?}"
        );
    }
}
