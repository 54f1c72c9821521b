//! Contact form parsing and validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use super::ContactError;

/// Maximum name length, in characters.
pub const MAX_NAME_CHARS: usize = 100;
/// Maximum email length, in characters.
pub const MAX_EMAIL_CHARS: usize = 254;
/// Maximum message length, in characters.
pub const MAX_MESSAGE_CHARS: usize = 5000;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Hidden honeypot field; empty unless a bot filled it in.
    pub website: String,
}

/// Outcome of validating a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A legitimate message to deliver.
    Accepted(ContactForm),
    /// The honeypot was filled; report success but deliver nothing.
    Suppressed,
}

impl ContactForm {
    /// Create a form with the three visible fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
            website: String::new(),
        }
    }

    /// Set the honeypot field.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }

    /// Parse a JSON request body.
    ///
    /// Field values are stringified whatever their JSON type; missing and
    /// `null` fields become empty. The honeypot keeps its value only when it
    /// is truthy (so `false`, `0` and `""` count as empty).
    pub fn from_json(body: &[u8]) -> Result<Self, ContactError> {
        let value: Value =
            serde_json::from_slice(body).map_err(|_| ContactError::InvalidJsonBody)?;
        let object = value.as_object().ok_or(ContactError::InvalidJsonBody)?;

        let website = object
            .get("website")
            .filter(|v| is_truthy(v))
            .map(stringify)
            .unwrap_or_default();

        Ok(Self {
            name: object.get("name").map(stringify).unwrap_or_default(),
            email: object.get("email").map(stringify).unwrap_or_default(),
            message: object.get("message").map(stringify).unwrap_or_default(),
            website,
        })
    }

    /// Check whether the honeypot field was filled.
    pub fn is_honeypot_filled(&self) -> bool {
        !self.website.is_empty()
    }

    /// Validate the form.
    ///
    /// The honeypot is checked first, then required fields, then the email
    /// shape, then field lengths.
    pub fn validate(self) -> Result<Submission, ContactError> {
        if self.is_honeypot_filled() {
            return Ok(Submission::Suppressed);
        }

        let name = self.name.trim();
        let email = self.email.trim();
        let message = self.message.trim();

        if name.is_empty() || email.is_empty() || message.is_empty() {
            return Err(ContactError::MissingRequiredField);
        }

        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(ContactError::InvalidEmailFormat);
        }

        if name.chars().count() > MAX_NAME_CHARS
            || email.chars().count() > MAX_EMAIL_CHARS
            || message.chars().count() > MAX_MESSAGE_CHARS
        {
            return Err(ContactError::InputTooLong);
        }

        Ok(Submission::Accepted(self))
    }
}

/// Parse a raw JSON request body without validating it.
pub fn parse_body(body: &[u8]) -> Result<ContactForm, ContactError> {
    ContactForm::from_json(body)
}

/// Parse and validate a raw JSON request body.
pub fn validate(body: &[u8]) -> Result<Submission, ContactError> {
    parse_body(body)?.validate()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
