use crate::config::Config;
use crate::retry::{with_retry_if, RetryConfig};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// A guest message ready to hand to the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailResponse {
    id: Option<String>,
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to reach email provider: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Email provider error ({status}): {body}")]
    Rejected { status: StatusCode, body: String },
}

impl ProviderError {
    /// Network failures, rate limits and 5xx are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::Network(_) => true,
            ProviderError::Rejected { status, .. } => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
        }
    }
}

impl OutgoingEmail {
    /// Build the notification the couple receives for one guest message.
    pub fn compose(sender_name: &str, body: &str, received_at: DateTime<Utc>) -> Self {
        let stamp = received_at.format("%Y-%m-%d %H:%M UTC").to_string();

        let text = format!(
            "From: {}\nReceived: {}\n\n{}",
            sender_name, stamp, body
        );

        let html = format!(
            "<h2>New message from {}</h2>\n<p><em>Received {}</em></p>\n<p>{}</p>",
            escape_html(sender_name),
            stamp,
            escape_html(body).replace('\n', "<br>")
        );

        Self {
            subject: format!("New message from {}", sender_name),
            text,
            html,
        }
    }
}

/// Minimal HTML escaping for text placed inside element bodies.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// HTTP client for a Resend-compatible `POST /emails` API.
#[derive(Debug, Clone)]
pub struct EmailProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    from: String,
    to: Vec<String>,
    retry: RetryConfig,
}

impl EmailProvider {
    pub fn from_config(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.email_api_url.trim_end_matches('/').to_string(),
            api_key: config.email_api_key.clone(),
            from: config.email_from.clone(),
            to: config.email_to.clone(),
            retry: RetryConfig::email_provider(),
        }
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Send one email, retrying transient failures.
    ///
    /// Returns the provider's message id when it reports one.
    pub async fn send(&self, email: &OutgoingEmail) -> Result<Option<String>, ProviderError> {
        let id = with_retry_if(
            &self.retry,
            "Email provider send",
            || self.send_once(email),
            ProviderError::is_retryable,
        )
        .await?;

        info!(
            "Email '{}' accepted by provider (id: {})",
            email.subject,
            id.as_deref().unwrap_or("unknown")
        );
        Ok(id)
    }

    async fn send_once(&self, email: &OutgoingEmail) -> Result<Option<String>, ProviderError> {
        let request = SendEmailRequest {
            from: &self.from,
            to: &self.to,
            subject: &email.subject,
            text: &email.text,
            html: &email.html,
        };

        let response = self
            .client
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Rejected { status, body });
        }

        // Some compatible providers answer with an empty body
        let body = response.text().await.unwrap_or_default();
        let id = serde_json::from_str::<SendEmailResponse>(&body)
            .ok()
            .and_then(|r| r.id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    // ==================== Helper Functions ====================

    fn create_test_config(api_url: &str) -> Config {
        Config {
            bind_address: "127.0.0.1".to_string(),
            port: 0,
            email_api_key: "test-email-key".to_string(),
            email_api_url: api_url.to_string(),
            email_from: "invite@example.com".to_string(),
            email_to: vec!["couple@example.com".to_string()],
        }
    }

    fn fast_retry() -> RetryConfig {
        RetryConfig::new(3, Duration::from_millis(5))
    }

    fn sample_email() -> OutgoingEmail {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 18, 30, 0).unwrap();
        OutgoingEmail::compose("Alice", "Congrats!", at)
    }

    // ==================== Composition Tests ====================

    #[test]
    fn test_compose_subject_and_text() {
        let email = sample_email();
        assert_eq!(email.subject, "New message from Alice");
        assert_eq!(
            email.text,
            "From: Alice\nReceived: 2025-05-01 18:30 UTC\n\nCongrats!"
        );
    }

    #[test]
    fn test_compose_escapes_html() {
        let at = Utc.with_ymd_and_hms(2025, 5, 1, 18, 30, 0).unwrap();
        let email = OutgoingEmail::compose("<b>Bob</b>", "a & b\nline two", at);

        assert!(email.html.contains("&lt;b&gt;Bob&lt;/b&gt;"));
        assert!(email.html.contains("a &amp; b<br>line two"));
        assert!(!email.html.contains("<b>Bob"));
    }

    #[test]
    fn test_escape_html_quotes() {
        assert_eq!(escape_html(r#""hi" 'there'"#), "&quot;hi&quot; &#39;there&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    // ==================== Retry Classification ====================

    #[test]
    fn test_retryable_statuses() {
        let rejected = |status| ProviderError::Rejected {
            status,
            body: String::new(),
        };
        assert!(rejected(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(rejected(StatusCode::TOO_MANY_REQUESTS).is_retryable());
        assert!(!rejected(StatusCode::UNPROCESSABLE_ENTITY).is_retryable());
        assert!(!rejected(StatusCode::UNAUTHORIZED).is_retryable());
    }

    // ==================== HTTP Tests ====================

    #[tokio::test]
    async fn test_send_posts_expected_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .and(header("authorization", "Bearer test-email-key"))
            .and(body_partial_json(serde_json::json!({
                "from": "invite@example.com",
                "to": ["couple@example.com"],
                "subject": "New message from Alice"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "abc"})))
            .expect(1)
            .mount(&server)
            .await;

        let provider = EmailProvider::from_config(&create_test_config(&server.uri()));
        let id = provider.send(&sample_email()).await.unwrap();

        assert_eq!(id.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_send_tolerates_trailing_slash_and_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/emails"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&server)
            .await;

        let provider =
            EmailProvider::from_config(&create_test_config(&format!("{}/", server.uri())));
        assert_eq!(provider.send(&sample_email()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_send_retries_server_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "late"})))
            .mount(&server)
            .await;

        let provider =
            EmailProvider::from_config(&create_test_config(&server.uri())).with_retry(fast_retry());

        assert_eq!(
            provider.send(&sample_email()).await.unwrap().as_deref(),
            Some("late")
        );
        assert_eq!(server.received_requests().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_send_does_not_retry_client_errors() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(422).set_body_string("invalid from"))
            .expect(1)
            .mount(&server)
            .await;

        let provider =
            EmailProvider::from_config(&create_test_config(&server.uri())).with_retry(fast_retry());

        let err = provider.send(&sample_email()).await.unwrap_err();
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("422"));
        assert!(err.to_string().contains("invalid from"));
    }
}
