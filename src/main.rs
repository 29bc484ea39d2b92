use std::net::SocketAddr;

use stock_ticker::{
    api,
    config::{Config, DEFAULT_LOG_FILTER},
};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables; logged once tracing is up
    let dotenv_result = dotenv::dotenv();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Err(e) = dotenv_result {
        warn!("Error loading .env file ({}), falling back to system environment variables", e);
    }

    // Load configuration
    let config = Config::from_env();
    if !config.has_api_key() {
        warn!("API_KEY is not set, every quote request will be skipped");
    }

    let app = api::router::create_router(&config);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server is running on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
