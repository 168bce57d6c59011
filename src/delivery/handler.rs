use crate::delivery::{AppState, DeliveryError, OutgoingEmail};
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

/// Fields the message form posts.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SubmittedForm {
    pub name: String,
    pub message: String,
    pub text_message: String,
}

#[derive(Debug, Serialize)]
pub struct SendEmailReply {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl SubmittedForm {
    /// Collect the known fields, ignoring any others.
    pub async fn read(mut form: Multipart) -> Result<Self, DeliveryError> {
        let mut submitted = SubmittedForm::default();

        while let Some(field) = form.next_field().await? {
            let name = field.name().map(str::to_string);
            let value = field.text().await?;
            match name.as_deref() {
                Some("name") => submitted.name = value,
                Some("message") => submitted.message = value,
                Some("textMessage") => submitted.text_message = value,
                _ => {}
            }
        }

        Ok(submitted)
    }

    /// Body to deliver: `textMessage` when present, else `message`.
    pub fn body(&self) -> &str {
        let text = self.text_message.trim();
        if text.is_empty() {
            self.message.trim()
        } else {
            text
        }
    }

    pub fn sender(&self) -> &str {
        self.name.trim()
    }

    pub fn validate(&self) -> Result<(), DeliveryError> {
        if self.sender().is_empty() {
            return Err(DeliveryError::MissingField("Name is required"));
        }
        if self.body().is_empty() {
            return Err(DeliveryError::MissingField("Message is required"));
        }
        Ok(())
    }
}

/// `POST /api/send-email`
pub async fn send_email(
    State(state): State<Arc<AppState>>,
    form: Multipart,
) -> Result<Json<SendEmailReply>, DeliveryError> {
    let submitted = SubmittedForm::read(form).await?;
    submitted.validate()?;

    info!(
        "Received message from {} ({} chars)",
        submitted.sender(),
        submitted.body().chars().count()
    );

    let email = OutgoingEmail::compose(submitted.sender(), submitted.body(), Utc::now());
    let id = state.provider.send(&email).await?;

    Ok(Json(SendEmailReply {
        success: true,
        message: "Email sent successfully",
        id,
    }))
}

/// `GET /health`
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
