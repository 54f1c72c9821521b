//! Contact endpoint request handling.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::{json, Value};

use super::{validate, ContactError, ContactForm, DeliveryError, Submission};

/// Environment variable holding the recipient address.
pub const CONTACT_EMAIL_VAR: &str = "CONTACT_EMAIL";
/// Environment variable holding the email provider API key.
pub const API_KEY_VAR: &str = "RESEND_API_KEY";
/// Environment variable overriding the sender address.
pub const FROM_EMAIL_VAR: &str = "FROM_EMAIL";
/// Sender address used when none is configured.
pub const DEFAULT_FROM_EMAIL: &str = "onboarding@resend.dev";

/// Delivery settings for contact messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    /// Where contact messages are delivered
    pub contact_email: String,

    /// Email provider API key
    pub api_key: String,

    /// Sender address
    pub from_email: String,
}

impl ContactConfig {
    /// Load the configuration from the process environment.
    pub fn from_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load the configuration through a variable lookup function.
    ///
    /// Empty values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        match (var(CONTACT_EMAIL_VAR), var(API_KEY_VAR)) {
            (Some(contact_email), Some(api_key)) => Ok(Self {
                contact_email,
                api_key,
                from_email: var(FROM_EMAIL_VAR).unwrap_or_else(|| DEFAULT_FROM_EMAIL.to_string()),
            }),
            _ => Err(ContactError::ServerMisconfiguration),
        }
    }
}

/// A message ready to hand to the email provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
}

impl OutgoingEmail {
    /// Compose the notification for a contact form.
    pub fn compose(config: &ContactConfig, form: &ContactForm) -> Self {
        Self {
            from: format!("Portfolio Contact <{}>", config.from_email),
            to: config.contact_email.clone(),
            subject: format!("New message from {}", form.name),
            text: format!("From: {} <{}>\n\n{}", form.name, form.email, form.message),
        }
    }
}

/// Seam to the transactional email provider.
pub trait Mailer: Send + Sync {
    /// Deliver one message.
    fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError>;
}

impl<F> Mailer for F
where
    F: Fn(&OutgoingEmail) -> Result<(), DeliveryError> + Send + Sync,
{
    fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        self(email)
    }
}

/// Mailer that logs messages instead of delivering them.
#[derive(Debug, Default)]
pub struct DryRunMailer {
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl DryRunMailer {
    /// Create a new dry-run mailer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages "sent" so far.
    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Mailer for DryRunMailer {
    fn send(&self, email: &OutgoingEmail) -> Result<(), DeliveryError> {
        log::info!("Dry run: not sending \"{}\" to {}", email.subject, email.to);
        let mut sent = self
            .sent
            .lock()
            .map_err(|_| DeliveryError("dry-run mailbox poisoned".to_string()))?;
        sent.push(email.clone());
        Ok(())
    }
}

/// Response returned to the submitter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactResponse {
    /// HTTP status code
    pub status: u16,

    /// JSON body: `{"ok": true}` or `{"error": "..."}`
    pub body: Value,
}

impl ContactResponse {
    /// Successful response.
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: json!({ "ok": true }),
        }
    }

    /// Error response carrying the public message.
    pub fn error(err: &ContactError) -> Self {
        Self {
            status: err.status(),
            body: json!({ "error": err.to_string() }),
        }
    }

    /// Check whether the status is a success.
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Handles contact submissions end to end.
pub struct ContactHandler<M: Mailer> {
    config: Option<ContactConfig>,
    mailer: M,
}

impl<M: Mailer> ContactHandler<M> {
    /// Create a handler. `None` config means delivery is not configured and
    /// every request fails with a server error.
    pub fn new(config: Option<ContactConfig>, mailer: M) -> Self {
        Self { config, mailer }
    }

    /// Borrow the mailer.
    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Handle a raw request body.
    pub fn handle(&self, body: &[u8]) -> ContactResponse {
        match self.process(body) {
            Ok(()) => ContactResponse::ok(),
            Err(err) => ContactResponse::error(&err),
        }
    }

    fn process(&self, body: &[u8]) -> Result<(), ContactError> {
        let Some(config) = self.config.as_ref() else {
            log::error!(
                "Missing required env vars: {} or {}",
                CONTACT_EMAIL_VAR,
                API_KEY_VAR
            );
            return Err(ContactError::ServerMisconfiguration);
        };

        match validate(body)? {
            Submission::Suppressed => {
                log::info!("Honeypot field filled; dropping contact submission");
                Ok(())
            }
            Submission::Accepted(form) => {
                let email = OutgoingEmail::compose(config, &form);
                self.mailer.send(&email).map_err(|err| {
                    log::warn!("Contact delivery failed: {}", err);
                    ContactError::from(err)
                })
            }
        }
    }
}
