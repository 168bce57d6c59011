use crate::delivery::provider::ProviderError;
use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("{0}")]
    MissingField(&'static str),
    #[error("Invalid form data: {0}")]
    Multipart(#[from] MultipartError),
    #[error("{0}")]
    Provider(#[from] ProviderError),
}

impl IntoResponse for DeliveryError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            DeliveryError::MissingField(msg) => {
                tracing::debug!(message = %msg, "Rejected submission");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "success": false, "error": msg }),
                )
            }
            DeliveryError::Multipart(e) => {
                tracing::debug!(error = %e, "Malformed multipart body");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "success": false, "error": self.to_string() }),
                )
            }
            DeliveryError::Provider(e) => {
                tracing::error!(error = %e, "Email provider failed");
                (
                    StatusCode::BAD_GATEWAY,
                    json!({
                        "success": false,
                        "error": e.to_string(),
                        "message": "Failed to send email",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
