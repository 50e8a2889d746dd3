//! Pay estimator server entry point.

use std::path::Path;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pay_estimator::api::{AppState, create_router};
use pay_estimator::config::ConfigLoader;

const DEFAULT_CONFIG_DIR: &str = "config/au-2024-25";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,pay_estimator=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Pay estimator v{}", env!("CARGO_PKG_VERSION"));

    let config_dir = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("PAY_ESTIMATOR_CONFIG").ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_DIR.to_string());

    let config = if Path::new(&config_dir).exists() {
        info!("Loading configuration from {}", config_dir);
        ConfigLoader::load(&config_dir)?
    } else {
        warn!(
            "Configuration directory {} not found, using built-in 2024-25 rates",
            config_dir
        );
        ConfigLoader::builtin()
    };

    let addr = std::env::var("PAY_ESTIMATOR_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        "Serving {} rates on {}",
        config.rates().financial_year,
        listener.local_addr()?
    );

    axum::serve(listener, create_router(AppState::new(config))).await?;

    Ok(())
}
