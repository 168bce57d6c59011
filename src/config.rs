use crate::form::SEND_EMAIL_PATH;
use crate::i18n::Language;
use anyhow::{Context, Result};

/// Settings for the delivery endpoint server.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,
    pub port: u16,

    // Email provider
    pub email_api_key: String,
    pub email_api_url: String,
    pub email_from: String,
    pub email_to: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            // Server
            bind_address: std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),

            // Email provider
            email_api_key: std::env::var("EMAIL_API_KEY").context("EMAIL_API_KEY not set")?,
            email_api_url: std::env::var("EMAIL_API_URL")
                .unwrap_or_else(|_| "https://api.resend.com".to_string()),
            email_from: std::env::var("EMAIL_FROM").context("EMAIL_FROM not set")?,
            email_to: parse_recipients(
                &std::env::var("EMAIL_TO").context("EMAIL_TO not set")?,
            )?,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Settings for driving the message form from the command line.
#[derive(Debug, Clone)]
pub struct FormClientConfig {
    pub endpoint_url: String,
    pub language: Language,
}

impl FormClientConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            endpoint_url: std::env::var("ENDPOINT_URL")
                .unwrap_or_else(|_| format!("http://localhost:3000{}", SEND_EMAIL_PATH)),
            language: parse_language(std::env::var("LANGUAGE").ok())?,
        })
    }
}

/// Split a comma-separated recipient list, dropping blanks.
fn parse_recipients(raw: &str) -> Result<Vec<String>> {
    let recipients: Vec<String> = raw
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    if recipients.is_empty() {
        anyhow::bail!("EMAIL_TO must contain at least one address");
    }
    Ok(recipients)
}

fn parse_language(code: Option<String>) -> Result<Language> {
    match code.as_deref().map(str::trim) {
        None | Some("") => Ok(Language::canonical()),
        Some(code) => Language::from_code(code).context("Invalid language setting"),
    }
}
