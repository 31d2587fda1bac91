// ABOUTME: Admin gate for API requests
// ABOUTME: Extracts and checks the bearer token from the Authorization header

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use atelier_auth::{authorize, validate_auth_header};

use crate::error::AppError;

/// Present in a handler's arguments when the route is admin-only
#[derive(Debug, Clone, Copy)]
pub struct AdminUser;

impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        authorize(authorization_header(&parts.headers))
            .map(|_| AdminUser)
            .map_err(|_| AppError::unauthorized())
    }
}

/// For routes that serve everyone but show admins more
pub fn is_admin(headers: &HeaderMap) -> bool {
    validate_auth_header(authorization_header(headers))
}

fn authorization_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok())
}
