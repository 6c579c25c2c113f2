//! Contact form validation and submission.
//!
//! Single-shot: a submission is validated locally, posted once, and the
//! outcome becomes the form's next state. Nothing is retried or deduplicated.

use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::cms::CmsBackend;
use crate::cms::queries::CONTACTS_PATH;
use crate::cms::types::{CmsError, Envelope};

pub const SENT_MESSAGE: &str = "Your message has been sent successfully!";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred. Please try again later.";

/// Coarse shape check: something, `@`, something, `.`, something.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Urlencoded form body. Missing fields decode as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill out all fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

/// What the form shows after an action.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactState {
    Idle,
    Failed(String),
    Sent { message: String, data: Value },
}

impl ContactForm {
    /// # Errors
    ///
    /// Returns [`ContactError::MissingFields`] if any field is blank and
    /// [`ContactError::InvalidEmail`] if the email fails the shape check.
    pub fn validate(&self) -> Result<(), ContactError> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactError::MissingFields);
        }
        if !EMAIL_PATTERN.is_match(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    fn payload(&self) -> Value {
        json!({
            "data": {
                "name": self.name.trim(),
                "email": self.email.trim(),
                "message": self.message.trim(),
            }
        })
    }
}

/// Validate and post the form. Validation failures never reach the network.
pub async fn submit(cms: &dyn CmsBackend, form: &ContactForm) -> ContactState {
    if let Err(e) = form.validate() {
        return ContactState::Failed(e.to_string());
    }

    match cms.post_json(CONTACTS_PATH, &form.payload()).await {
        Ok(data) => {
            tracing::info!("contact form submitted");
            ContactState::Sent { message: SENT_MESSAGE.to_owned(), data }
        }
        Err(CmsError::Status { status, body }) => {
            let message = rejection_message(status, &body);
            tracing::error!(status, %body, %message, "contact submission rejected");
            ContactState::Failed(message)
        }
        Err(e) => {
            tracing::error!(code = e.error_code(), error = %e, "contact submission failed");
            ContactState::Failed(UNEXPECTED_MESSAGE.to_owned())
        }
    }
}

/// Backend's `error.message` when the body has one, else a status-coded fallback.
#[must_use]
pub fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Envelope<Value>>(body)
        .ok()
        .and_then(|envelope| envelope.error)
        .and_then(|error| error.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("Failed to send message. Status: {status}"))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
