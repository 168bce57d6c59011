use crate::form::SubmitError;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

/// In-progress form content, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftMessage {
    pub sender_name: String,
    pub body_text: String,
}

/// The three fields posted to the delivery endpoint.
///
/// `message` and `text_message` always hold the same body; the endpoint reads both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub name: String,
    pub message: String,
    #[serde(rename = "textMessage")]
    pub text_message: String,
}

impl DraftMessage {
    pub fn new(sender_name: impl Into<String>, body_text: impl Into<String>) -> Self {
        Self {
            sender_name: sender_name.into(),
            body_text: body_text.into(),
        }
    }

    /// Check the required fields in order: name first, then body.
    pub fn validate(&self) -> Result<(), SubmitError> {
        if self.sender_name.trim().is_empty() {
            return Err(SubmitError::Validation("senderName"));
        }
        if self.body_text.trim().is_empty() {
            return Err(SubmitError::Validation("bodyText"));
        }
        Ok(())
    }

    /// Build the outbound payload from trimmed fields.
    pub fn payload(&self) -> MessagePayload {
        let body = self.body_text.trim().to_string();
        MessagePayload {
            name: self.sender_name.trim().to_string(),
            message: body.clone(),
            text_message: body,
        }
    }

    pub fn clear(&mut self) {
        self.sender_name.clear();
        self.body_text.clear();
    }
}

impl MessagePayload {
    /// Multipart form with fields `name`, `message`, `textMessage`.
    pub fn to_form(&self) -> Form {
        Form::new()
            .text("name", self.name.clone())
            .text("message", self.message.clone())
            .text("textMessage", self.text_message.clone())
    }
}
