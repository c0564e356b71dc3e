use std::net::SocketAddr;

use metro_planner::network::NetworkStore;
use metro_planner::planner::PlannerConfig;
use metro_planner::web::{AppState, create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Network data file used when `METRO_DATA` is not set.
const DEFAULT_DATA_PATH: &str = "data/demo-network.json";

/// Bind address used when `METRO_ADDR` is not set.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let data_path =
        std::env::var("METRO_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string());
    let addr: SocketAddr = std::env::var("METRO_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()?;

    // Fail fast if the network data is unusable
    let network = NetworkStore::load(&data_path)?;
    let stations = network.snapshot().await.stations.len();
    info!(path = %data_path, stations, "network data loaded");

    let state = AppState::new(network, PlannerConfig::default());
    let app = create_router(state);

    info!(%addr, "metro planner listening");
    info!("  GET  /health");
    info!("  GET  /api/stations/search?q=&lang=&limit=");
    info!("  GET  /api/stations/:id");
    info!("  GET  /api/lines");
    info!("  GET  /api/routes?from=&to=");
    info!("  POST /api/network/reload");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
