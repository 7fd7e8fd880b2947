use anyhow::Context;
use reqwest::Url;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wallet_user_agent::models::RequestReport;
use wallet_user_agent::{resolve_identity, ClientFactory, Config, EnvPackageMetadata, HttpClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallet_user_agent=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load config from env
    let config = Config::from_env().context("Failed to load configuration")?;
    let target_url = config.target_url.clone();

    // Identity is resolved once; a missing record just means no tagging
    let identity = resolve_identity(&EnvPackageMetadata::new(config));

    let client: Arc<HttpClient> = Arc::new(
        ClientFactory::new(identity)
            .build()
            .context("Failed to build HTTP client")?,
    );

    tracing::info!("Requesting {}", target_url);

    let response = client
        .get(&target_url)
        .await
        .with_context(|| format!("Request to {} failed", target_url))?;

    let url: Url = target_url.parse().context("Invalid TARGET_URL")?;
    let report = RequestReport {
        user_agent: client
            .user_agent()
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        status: response.status().as_u16(),
        body_bytes: response.body().len(),
        cookies: client.cookies(&url),
        url: target_url,
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
