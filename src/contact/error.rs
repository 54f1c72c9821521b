//! Contact endpoint error taxonomy.

use thiserror::Error;

/// Reasons a contact submission is rejected or fails.
///
/// `Display` yields the public message returned to the submitter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// The request body is not a JSON object.
    #[error("Invalid request body")]
    InvalidJsonBody,

    /// Name, email or message is empty after trimming.
    #[error("All fields required")]
    MissingRequiredField,

    /// The email does not look like `local@domain.tld`.
    #[error("Invalid email address")]
    InvalidEmailFormat,

    /// A field exceeds its length limit.
    #[error("Input too long")]
    InputTooLong,

    /// Delivery credentials or the recipient address are not configured.
    #[error("Server configuration error")]
    ServerMisconfiguration,

    /// The email provider reported a failure.
    #[error("Failed to send")]
    DeliveryFailure(String),
}

impl ContactError {
    /// Stable kebab-case identifier of the error class.
    pub fn code(&self) -> &'static str {
        match self {
            ContactError::InvalidJsonBody => "invalid-json-body",
            ContactError::MissingRequiredField => "missing-required-field",
            ContactError::InvalidEmailFormat => "invalid-email-format",
            ContactError::InputTooLong => "input-too-long",
            ContactError::ServerMisconfiguration => "server-misconfiguration",
            ContactError::DeliveryFailure(_) => "delivery-failure",
        }
    }

    /// HTTP status for this error: 400 for bad input, 500 otherwise.
    pub fn status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }

    /// Check whether the submitter caused the error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ContactError::InvalidJsonBody
                | ContactError::MissingRequiredField
                | ContactError::InvalidEmailFormat
                | ContactError::InputTooLong
        )
    }
}

/// Failure reported by an email provider.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DeliveryError(pub String);

impl From<DeliveryError> for ContactError {
    fn from(err: DeliveryError) -> Self {
        ContactError::DeliveryFailure(err.0)
    }
}
