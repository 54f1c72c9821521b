//! Contact form endpoint logic.
//!
//! Bodies are parsed and validated into a [`Submission`]; accepted forms are
//! composed into an [`OutgoingEmail`] and handed to a [`Mailer`]. Bots that
//! fill the hidden `website` field get a success response and nothing is
//! sent.

mod error;
mod form;
mod handler;

pub use error::{ContactError, DeliveryError};
pub use form::{
    parse_body, validate, ContactForm, Submission, MAX_EMAIL_CHARS, MAX_MESSAGE_CHARS,
    MAX_NAME_CHARS,
};
pub use handler::{
    ContactConfig, ContactHandler, ContactResponse, DryRunMailer, Mailer, OutgoingEmail,
    API_KEY_VAR, CONTACT_EMAIL_VAR, DEFAULT_FROM_EMAIL, FROM_EMAIL_VAR,
};
