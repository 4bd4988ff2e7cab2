mod model;
mod server;

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::server::{
    config::Config, error::AppError, router::router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_logger();

    let config = Config::from_env()?;
    let db = startup::connect_to_database(&config).await?;

    let app = router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.server_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", config.server_addr, e)))?;

    tracing::info!("ShareIt server listening on {}", config.server_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    Ok(())
}
