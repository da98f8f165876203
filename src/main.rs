// Main entry point - Dependency injection and server setup
use std::{net::SocketAddr, sync::Arc};

use pm25_diurnal::application::diurnal_service::DiurnalChartService;
use pm25_diurnal::infrastructure::config::load_service_config;
use pm25_diurnal::infrastructure::solar::SpaSunClock;
use pm25_diurnal::presentation::app_state::AppState;
use pm25_diurnal::presentation::router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing (RUST_LOG controls the filter)
    tracing_subscriber::fmt::init();

    // Load configuration
    let config = load_service_config()?;

    // Create services (application layer)
    let chart_service = DiurnalChartService::new(Arc::new(SpaSunClock), config.charts.naaqs);

    // Create application state
    let state = Arc::new(AppState {
        chart_service,
        chart_settings: config.charts,
    });

    // Build router (presentation layer)
    let router = router(state);

    // Start server
    let addr: SocketAddr = config.server.bind.parse()?;
    tracing::info!("Starting pm25-diurnal service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
