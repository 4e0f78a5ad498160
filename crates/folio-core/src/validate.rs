use crate::notification::{NotificationKind, Notifier};
use regex::Regex;
use std::sync::OnceLock;

/// One of the four required contact-form fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Validation order; the first failing field wins.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// The form control's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    fn missing_message(self) -> &'static str {
        match self {
            Field::Name => "Please enter your name.",
            Field::Email => "Please enter your email.",
            Field::Subject => "Please enter a subject.",
            Field::Message => "Please enter a message.",
        }
    }
}

/// Rejection produced by [`validate`]. `Display` is the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", .0.missing_message())]
    EmptyField(Field),
    #[error("Please enter a valid email address.")]
    InvalidFormat(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match *self {
            ValidationError::EmptyField(f) | ValidationError::InvalidFormat(f) => f,
        }
    }
}

/// Contact form payload, collected fresh for every submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormFields {
    /// Build a payload from a by-name lookup; absent fields read as empty.
    pub fn from_lookup(mut lookup: impl FnMut(&str) -> Option<String>) -> Self {
        let mut take = |f: Field| lookup(f.key()).unwrap_or_default();
        Self {
            name: take(Field::Name),
            email: take(Field::Email),
            subject: take(Field::Subject),
            message: take(Field::Message),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^[^\s@\x{FEFF}]+@[^\s@\x{FEFF}]+\.[^\s@\x{FEFF}]+$").expect("email pattern compiles"))
}

/// Whitespace as browsers trim it, which includes the byte-order mark.
fn is_blank(value: &str) -> bool {
    value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Check the required fields in order, stopping at the first failure.
pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    for field in Field::ALL {
        let value = fields.get(field);
        if is_blank(value) {
            return Err(ValidationError::EmptyField(field));
        }
        if field == Field::Email && !is_valid_email(value) {
            return Err(ValidationError::InvalidFormat(field));
        }
    }
    Ok(())
}

/// Validate and surface the first failure as an error notification.
pub fn validate_with<N: Notifier + ?Sized>(
    fields: &FormFields,
    notifier: &N,
) -> Result<(), ValidationError> {
    validate(fields).inspect_err(|e| {
        log::debug!("[form] rejected field '{}': {}", e.field().key(), e);
        notifier.notify(&e.to_string(), NotificationKind::Error);
    })
}
