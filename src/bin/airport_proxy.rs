use airport_search::config::Settings;
use airport_search::gateway::AmadeusGateway;
use airport_search::server;
use anyhow::Result;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fails here, at startup, when the credentials are missing.
    let settings = Settings::from_env()?;
    let gateway = Arc::new(AmadeusGateway::new(&settings));

    info!(base_url = %settings.base_url, "starting airport search proxy");
    server::run(&settings.bind_addr, gateway).await
}
