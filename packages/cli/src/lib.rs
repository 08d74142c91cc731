use axum::http::Method;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};

use sightline_api::ApiState;
use sightline_quicksight::{EmbedClient, QuickSightSettings};

pub mod api;
pub mod config;

#[cfg(test)]
mod tests;

use config::Config;

pub async fn run_server() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let settings = QuickSightSettings::from_env()?;

    println!("🚀 Starting Sightline embedding server...");
    println!("📡 Server will run on http://localhost:{}", config.port);
    println!("🔗 CORS origin: {}", config.cors_origin);
    println!("🌏 AWS region: {}", settings.region);
    println!("🔒 AWS account: ***{}", masked_account(&settings.account_id));

    let quicksight = EmbedClient::from_env(settings).await;
    let state = ApiState::new(quicksight);

    // Create CORS layer
    let cors = CorsLayer::new()
        .allow_origin(config.cors_origin.parse::<axum::http::HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    // Create the router with CORS
    let app = api::create_router(state).layer(cors);

    // Create socket address
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));

    println!("✅ Server listening on {}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Last four digits of the account id, for startup logging.
fn masked_account(account_id: &str) -> &str {
    let start = account_id.len().saturating_sub(4);
    &account_id[start..]
}
