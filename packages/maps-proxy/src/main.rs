use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maps_proxy::{config::Config, handlers, services::mapbox::MapboxClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maps_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenv::dotenv().ok();
    let config = Config::from_env().context("Failed to load configuration")?;

    info!("Starting maps proxy");
    if config.access_token().is_none() {
        warn!("MAPBOX_ACCESS_TOKEN is not set; proxy requests will fail until it is configured");
    }

    let mapbox = MapboxClient::from_config(&config).context("Failed to build Mapbox client")?;
    let app = handlers::router(config.clone(), mapbox);

    let addr: std::net::SocketAddr = format!("0.0.0.0:{}", config.port)
        .parse()
        .context("Invalid listen address")?;
    info!("HTTP server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .await
        .context("Failed to start HTTP server")?;

    info!("Shutting down...");
    Ok(())
}
