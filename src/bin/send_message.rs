//! Send one guest message through the form controller, the same way the page does.
//!
//! Usage:
//!   cargo run --bin send_message -- "Alice" "Congratulations to you both!"
//!
//! Optional environment variables:
//! - ENDPOINT_URL (defaults to http://localhost:3000/api/send-email)
//! - LANGUAGE (defaults to en)

use anyhow::Result;
use engagement_invite::config::FormClientConfig;
use engagement_invite::form::{MessageForm, Phase};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("send_message=info".parse()?),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((name, body)) = args.split_first() else {
        anyhow::bail!("Usage: send_message <name> <message...>");
    };

    let config = FormClientConfig::from_env()?;
    info!(
        "Submitting message to {} ({})",
        config.endpoint_url,
        config.language.name()
    );

    let form = MessageForm::new(&config.endpoint_url, config.language);
    form.set_sender_name(name.as_str());
    form.set_body_text(body.join(" "));

    let status = form.submit().await;
    println!("{}", status.display_text());

    if status.phase() != Phase::Succeeded {
        std::process::exit(1);
    }
    Ok(())
}
