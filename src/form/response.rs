//! Interpretation of whatever the delivery endpoint sends back.
//!
//! The endpoint normally answers with a JSON object carrying `success` and
//! optionally `message` / `error`, but proxies and crashed functions return
//! HTML or plain text. Both shapes are kept as a `ResponsePayload` and every
//! field read falls back explicitly.

use crate::form::SubmitError;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::error;

/// Used when a failed response carries no usable text at all.
pub const SERVER_FALLBACK_MESSAGE: &str = "Failed to send message";

/// Used when a 2xx response reports failure without a message.
pub const APPLICATION_FALLBACK_MESSAGE: &str = "Message sending failed";

/// A response as observed on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

/// Parsed response body.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponsePayload {
    /// Body declared and parsed as JSON
    Structured(Value),
    /// Anything else, carried verbatim as diagnostic text
    Raw { raw: String },
}

impl EndpointResponse {
    pub fn new(status: StatusCode, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: content_type.map(str::to_string),
            body: body.into(),
        }
    }

    /// Capture status, content type and body from a live response.
    ///
    /// A body that fails to download is treated as empty.
    pub async fn read(response: reqwest::Response) -> Self {
        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .unwrap_or_default();

        Self {
            status,
            content_type,
            body,
        }
    }

    fn declares_json(&self) -> bool {
        self.content_type
            .as_deref()
            .map(|ct| ct.contains("application/json"))
            .unwrap_or(false)
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Parse the body: JSON when declared and valid, raw text otherwise.
    pub fn payload(&self) -> ResponsePayload {
        if self.declares_json() {
            match serde_json::from_slice::<Value>(&self.body) {
                Ok(value) => return ResponsePayload::Structured(value),
                Err(e) => error!("Failed to parse JSON response: {}", e),
            }
        }
        ResponsePayload::Raw {
            raw: self.body_text(),
        }
    }
}

impl ResponsePayload {
    /// Read a top-level field. Raw payloads expose only `raw`.
    pub fn field(&self, name: &str) -> Option<&Value> {
        match self {
            ResponsePayload::Structured(value) => value.get(name),
            ResponsePayload::Raw { .. } => None,
        }
    }

    /// The `raw` text, whichever variant carries it.
    fn raw_text(&self) -> Option<&str> {
        match self {
            ResponsePayload::Raw { raw } => Some(raw),
            ResponsePayload::Structured(value) => value.get("raw").and_then(Value::as_str),
        }
    }

    /// Text of a field if the field is truthy.
    pub fn text_field(&self, name: &str) -> Option<String> {
        self.field(name).filter(|v| is_truthy(v)).map(value_text)
    }

    pub fn is_success(&self) -> bool {
        self.field("success").map(is_truthy).unwrap_or(false)
    }

    /// Message for a non-2xx response: `message`, `error`, non-blank `raw`,
    /// then the fixed fallback.
    pub fn server_error_message(&self) -> String {
        self.text_field("message")
            .or_else(|| self.text_field("error"))
            .or_else(|| {
                self.raw_text()
                    .filter(|raw| !raw.trim().is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| SERVER_FALLBACK_MESSAGE.to_string())
    }

    /// Message for a 2xx response that reported failure.
    pub fn application_error_message(&self) -> String {
        self.text_field("message")
            .unwrap_or_else(|| APPLICATION_FALLBACK_MESSAGE.to_string())
    }
}

/// Apply the full response policy.
///
/// Status is checked before the body: any non-2xx fails even if the body says
/// `success: true`.
pub fn interpret_response(response: &EndpointResponse) -> Result<ResponsePayload, SubmitError> {
    let payload = response.payload();

    if !response.status.is_success() {
        error!(
            "Server error: {} {:?}",
            response.status, payload
        );
        return Err(SubmitError::Server {
            status: response.status,
            message: payload.server_error_message(),
        });
    }

    if !payload.is_success() {
        error!("API error: {:?}", payload);
        return Err(SubmitError::Application(payload.application_error_message()));
    }

    Ok(payload)
}

/// Loose truthiness, matching how the endpoint's JSON is meant to be read:
/// `null`, `false`, `0` and `""` are falsy, everything else is truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
