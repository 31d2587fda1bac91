// ABOUTME: Error types for the admin authentication gate
// ABOUTME: Messages are deliberately generic so no credential detail leaks to callers

use thiserror::Error;

pub type AuthResult<T> = Result<T, AuthError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Password is required")]
    MissingPassword,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("Unauthorized")]
    MissingToken,

    #[error("Unauthorized")]
    InvalidToken,
}
