// ABOUTME: HTTP API layer for Atelier providing REST endpoints and routing
// ABOUTME: Integration layer over the storage adapter, validation rules, and admin gate

use std::path::PathBuf;

use axum::{
    routing::{get, patch, post},
    Router,
};

use atelier_auth::AdminAuth;
use atelier_storage::{get_storage_adapter, StorageAdapter, StorageConfig};

pub mod auth;
pub mod auth_handlers;
pub mod bookings_handlers;
pub mod error;
pub mod health;
pub mod portfolio_handlers;
pub mod response;
pub mod social_media_handlers;

use error::{ApiResult, AppError};

/// Shared handler state.
///
/// Holds only what is fixed for the process lifetime. The storage backend is
/// chosen again for every request, so a changed connection string applies
/// without a restart.
#[derive(Debug, Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub auth: AdminAuth,
}

impl AppState {
    pub fn new(data_dir: impl Into<PathBuf>, auth: AdminAuth) -> Self {
        Self {
            data_dir: data_dir.into(),
            auth,
        }
    }

    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig::new(self.data_dir.clone(), atelier_config::database_url())
    }

    pub fn storage(&self) -> ApiResult<StorageAdapter> {
        get_storage_adapter(&self.storage_config())
            .map_err(AppError::storage("Storage is unavailable"))
    }
}

/// Creates the API router with every route mounted under `/api`
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/admin/auth", post(auth_handlers::login))
        // Bookings
        .route(
            "/api/bookings",
            post(bookings_handlers::create_booking).get(bookings_handlers::list_bookings),
        )
        .route(
            "/api/bookings/update",
            patch(bookings_handlers::update_booking_status),
        )
        // Portfolio
        .route(
            "/api/portfolio",
            get(portfolio_handlers::list_portfolios).post(portfolio_handlers::create_portfolio),
        )
        .route(
            "/api/portfolio/{slug}",
            get(portfolio_handlers::get_portfolio_by_slug),
        )
        // Social media
        .route(
            "/api/social-media",
            get(social_media_handlers::list_social_links)
                .post(social_media_handlers::create_social_link)
                .patch(social_media_handlers::update_social_link)
                .delete(social_media_handlers::delete_social_link),
        )
        .route(
            "/api/social-media/reorder",
            post(social_media_handlers::reorder_social_link),
        )
        .with_state(state)
}
