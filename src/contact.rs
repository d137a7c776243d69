use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content::OWNER;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";
pub const SENT_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. I'll get back to you within 24-48 hours.";

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("missing required fields")]
    MissingFields,
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

impl ContactError {
    /// Text shown under the form.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingFields => MISSING_FIELDS_MESSAGE.to_string(),
            Self::Delivery(_) => format!(
                "Sorry, there was an error sending your message. Please try again or contact me directly at {}",
                OWNER.email
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Template parameters handed to the email service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailPayload {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_name: String,
    pub reply_to: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// All four fields must be non-empty. Whitespace counts as content.
    pub fn validate(&self) -> Result<EmailPayload, ContactError> {
        if [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .any(|f| f.is_empty())
        {
            return Err(ContactError::MissingFields);
        }
        Ok(EmailPayload {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            to_name: OWNER.first_name.to_string(),
            reply_to: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Sent,
    Failed(ContactError),
}

/// Form contents plus where the last submission got to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactState {
    pub form: ContactForm,
    pub status: SubmitStatus,
}

impl ContactState {
    pub fn is_submitting(&self) -> bool {
        self.status == SubmitStatus::Submitting
    }

    /// Editing any field clears a finished status. The form is frozen while
    /// a send is in flight.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.is_submitting() {
            return;
        }
        self.form.set(field, value);
        self.status = SubmitStatus::Idle;
    }

    /// Start a submission. `None` means nothing should be sent: either the
    /// form is incomplete or a send is already in flight.
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        if self.is_submitting() {
            return None;
        }
        match self.form.validate() {
            Ok(_) => {
                self.status = SubmitStatus::Submitting;
                Some(self.form.clone())
            }
            Err(e) => {
                self.status = SubmitStatus::Failed(e);
                None
            }
        }
    }

    pub fn finish(&mut self, result: Result<(), ContactError>) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = SubmitStatus::Sent;
            }
            Err(e) => {
                log::warn!("contact form delivery failed: {e}");
                self.status = SubmitStatus::Failed(e);
            }
        }
    }

    pub fn status_message(&self) -> Option<String> {
        match &self.status {
            SubmitStatus::Idle | SubmitStatus::Submitting => None,
            SubmitStatus::Sent => Some(SENT_MESSAGE.to_string()),
            SubmitStatus::Failed(e) => Some(e.user_message()),
        }
    }
}
