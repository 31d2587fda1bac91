// ABOUTME: Atelier admin authentication gate
// ABOUTME: Shared-password login and prefix-checked bearer tokens for the admin area

pub mod admin;
pub mod error;

// Re-export main types
pub use admin::{
    authorize, generate_admin_token, generate_admin_token_at, validate_auth_header, AdminAuth,
    BEARER_SCHEME, TOKEN_PREFIX,
};
pub use error::{AuthError, AuthResult};
