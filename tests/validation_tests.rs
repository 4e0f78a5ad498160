// Host-side tests for contact-form validation.

use folio_core::{
    is_valid_email, validate, validate_with, Field, FormFields, NotificationKind, Notifier,
    ValidationError,
};
use std::cell::RefCell;

fn fields(name: &str, email: &str, subject: &str, message: &str) -> FormFields {
    FormFields {
        name: name.into(),
        email: email.into(),
        subject: subject.into(),
        message: message.into(),
    }
}

#[derive(Default)]
struct Recorder(RefCell<Vec<(String, NotificationKind)>>);

impl Notifier for Recorder {
    fn notify(&self, message: &str, kind: NotificationKind) {
        self.0.borrow_mut().push((message.to_owned(), kind));
    }
}

#[test]
fn complete_form_passes() {
    assert_eq!(validate(&fields("Jane", "jane@example.com", "Hi", "Hello")), Ok(()));
}

#[test]
fn first_blank_field_is_reported_in_order() {
    let cases = [
        (fields("", "", "", ""), Field::Name),
        (fields("Jane", "", "", ""), Field::Email),
        (fields("Jane", "a@b.c", "", ""), Field::Subject),
        (fields("Jane", "a@b.c", "Hi", ""), Field::Message),
    ];
    for (input, expected) in cases {
        assert_eq!(validate(&input), Err(ValidationError::EmptyField(expected)));
    }
}

#[test]
fn whitespace_only_counts_as_blank() {
    let err = validate(&fields("  \t\n", "a@b.c", "Hi", "Hello")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField(Field::Name));
    let err = validate(&fields("Jane", "a@b.c", "Hi", "   ")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField(Field::Message));
}

#[test]
fn byte_order_mark_counts_as_blank() {
    let err = validate(&fields("\u{FEFF}", "a@b.c", "Hi", "Hello")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField(Field::Name));
    let err = validate(&fields("Jane", "a@b.c", " \u{FEFF}\u{a0}", "Hello")).unwrap_err();
    assert_eq!(err, ValidationError::EmptyField(Field::Subject));
}

#[test]
fn bad_email_is_rejected_before_later_fields() {
    // Subject and message are blank too, but the email rule fires first
    let err = validate(&fields("Jane", "bad-email", "", "")).unwrap_err();
    assert_eq!(err, ValidationError::InvalidFormat(Field::Email));
    assert_eq!(err.field(), Field::Email);
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ValidationError::EmptyField(Field::Name).to_string(), "Please enter your name.");
    assert_eq!(ValidationError::EmptyField(Field::Email).to_string(), "Please enter your email.");
    assert_eq!(ValidationError::EmptyField(Field::Subject).to_string(), "Please enter a subject.");
    assert_eq!(ValidationError::EmptyField(Field::Message).to_string(), "Please enter a message.");
    assert_eq!(
        ValidationError::InvalidFormat(Field::Email).to_string(),
        "Please enter a valid email address."
    );
}

#[test]
fn email_shape_accepts_simple_addresses() {
    for ok in ["a@b.c", "jane.doe@example.com", "x+tag@sub.domain.org", "a@b.c.d"] {
        assert!(is_valid_email(ok), "{ok} should be accepted");
    }
}

#[test]
fn email_shape_rejects_malformed_addresses() {
    for bad in [
        "bad-email",
        "a@b",
        "@b.c",
        "a@.c",
        "a@b.",
        "a@@b.c",
        "a@b@c.d",
        "a b@c.d",
        "a@b .c",
        " a@b.c",
        "a@b.c\u{FEFF}",
        "\u{FEFF}a@b.c",
        "",
    ] {
        assert!(!is_valid_email(bad), "{bad:?} should be rejected");
    }
}

#[test]
fn validate_with_notifies_first_failure_once() {
    let recorder = Recorder::default();
    assert_eq!(
        validate_with(&fields("Jane", "bad-email", "Hi", "Hello"), &recorder),
        Err(ValidationError::InvalidFormat(Field::Email))
    );
    let seen = recorder.0.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "Please enter a valid email address.");
    assert_eq!(seen[0].1, NotificationKind::Error);
}

#[test]
fn validate_with_is_silent_on_success() {
    let recorder = Recorder::default();
    assert_eq!(validate_with(&fields("Jane", "a@b.c", "Hi", "Hello"), &recorder), Ok(()));
    assert!(recorder.0.borrow().is_empty());
}

#[test]
fn from_lookup_fills_missing_fields_with_empty() {
    let f = FormFields::from_lookup(|key| (key == "name").then(|| "Jane".to_string()));
    assert_eq!(f.name, "Jane");
    assert_eq!(f.email, "");
    assert_eq!(validate(&f), Err(ValidationError::EmptyField(Field::Email)));
}
