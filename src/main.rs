use anyhow::{Context, Result};
use engagement_invite::config::Config;
use engagement_invite::delivery::{self, AppState, EmailProvider};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("engagement_invite=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting engagement invite delivery endpoint");

    // Load configuration from environment
    let config = Config::from_env()?;
    info!(
        "Forwarding guest messages to {} recipient(s) via {}",
        config.email_to.len(),
        config.email_api_url
    );

    let app = delivery::router(AppState {
        provider: EmailProvider::from_config(&config),
    });

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("Server error")?;

    Ok(())
}
