//! SysSentry - host telemetry service
//!
//! Main entry point for the HTTP service.

use std::sync::Arc;

use syssentry_api::{router, AppContext};
use syssentry_domain::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging FIRST so we can see .env loading
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(err) => info!(%err, "no .env file loaded"),
    }

    let config = Config::from_env()?;
    let ctx = Arc::new(AppContext::new(&config));
    let app = router(ctx);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "SysSentry listening");

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;
    info!("SysSentry shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to install shutdown handler");
    }
}
