//! The email delivery endpoint the message form posts to.

mod error;
mod handler;
mod provider;

pub use error::DeliveryError;
pub use handler::{SendEmailReply, SubmittedForm};
pub use provider::{escape_html, EmailProvider, OutgoingEmail, ProviderError};

use crate::form::SEND_EMAIL_PATH;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

#[derive(Debug)]
pub struct AppState {
    pub provider: EmailProvider,
}

/// Build the HTTP router for the delivery endpoint.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(SEND_EMAIL_PATH, post(handler::send_email))
        .route("/health", get(handler::health))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
