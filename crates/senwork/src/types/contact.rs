//! Contact form input

use serde::{Deserialize, Serialize};

/// A message for the site owner, posted to `/contact`.
///
/// This is input only; the client never stores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    /// Sender name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

impl ContactForm {
    /// Create a form from its four fields.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// Check the form against the rules the backend enforces.
    ///
    /// See [`crate::validation::validate_contact_form`].
    pub fn validate(&self) -> crate::Result<()> {
        crate::validation::validate_contact_form(self)
    }
}
