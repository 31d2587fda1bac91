// ABOUTME: HTTP server bootstrap
// ABOUTME: Wires configuration, CORS, request tracing, and the API router together

use std::net::{IpAddr, SocketAddr};

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use atelier_api::{create_router, AppState};
use atelier_auth::AdminAuth;
use atelier_storage::select_backend;

use crate::config::{Config, ConfigError};

pub async fn run_server(config: Config, host: IpAddr) -> Result<(), Box<dyn std::error::Error>> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidCorsOrigin(config.cors_origin.clone()))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    let auth = AdminAuth::from_env();
    if auth.is_default_password() {
        warn!("Admin area is protected by the default password");
    }

    let state = AppState::new(config.data_dir.clone(), auth);
    info!(
        backend = %select_backend(&state.storage_config()),
        data_dir = %config.data_dir.display(),
        "Storage configured"
    );

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::new(host, config.port);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);
    info!("CORS origin: {}", config.cors_origin);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
