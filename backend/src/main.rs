//! CarbonBridge HTTP service.
//!
//! # Endpoints
//!
//! - `GET /health` - liveness
//! - `GET /api/industries`, `POST /api/estimate` - quick estimator
//! - `/api/calculator/sessions/...` - paced calculator and report requests
//! - `/api/onboarding/:track` - seller/buyer walkthrough
//! - `/api/leads/...` - contact form
//!
//! Configuration is read from `CARBONBRIDGE__*` variables (see `config`).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use carbonbridge::adapters::http::{build_router, AppServices};
use carbonbridge::config::AppConfig;

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Keep serving; only a real signal should stop the server
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config);
    config.validate()?;

    let addr = config.server.socket_addr()?;
    let services = AppServices::from_config(&config)?;
    let app = build_router(&services, &config.server);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "CarbonBridge listening"
    );

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}
