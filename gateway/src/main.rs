mod client;
mod config;
mod controller;
mod dto;
mod error;
mod middleware;
mod router;
mod state;

use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;

use crate::{
    client::ShareItClient, config::Config, error::GatewayError, router::router, state::AppState,
};

fn init_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(true)
        .with_line_number(true)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), GatewayError> {
    dotenvy::dotenv().ok();
    init_logger();

    let config = Config::from_env()?;
    let client = ShareItClient::new(config.server_url.clone())?;

    let app = router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(client));

    let listener = tokio::net::TcpListener::bind(config.gateway_addr)
        .await
        .map_err(|e| {
            GatewayError::Internal(format!("Failed to bind {}: {}", config.gateway_addr, e))
        })?;

    tracing::info!(
        "ShareIt gateway listening on {}, forwarding to {}",
        config.gateway_addr,
        config.server_url
    );

    axum::serve(listener, app)
        .await
        .map_err(|e| GatewayError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}
