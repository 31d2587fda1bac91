// ABOUTME: Shared-password admin login and bearer token checks
// ABOUTME: Tokens are base64 of a fixed prefix plus a timestamp, with no signature or expiry

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use atelier_config::constants::{ADMIN_PASSWORD, DEFAULT_ADMIN_PASSWORD};

use crate::error::{AuthError, AuthResult};

/// Every admin token decodes to a string starting with this prefix.
///
/// SECURITY: the prefix is the only thing checked. Anyone who knows it can
/// forge a token, and tokens never expire. Replacing this with signed,
/// expiring tokens changes the client contract.
pub const TOKEN_PREFIX: &str = "admin:";

pub const BEARER_SCHEME: &str = "Bearer ";

/// Holds the configured admin password
#[derive(Clone)]
pub struct AdminAuth {
    password: String,
}

impl std::fmt::Debug for AdminAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminAuth")
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Default for AdminAuth {
    fn default() -> Self {
        Self::new(DEFAULT_ADMIN_PASSWORD)
    }
}

impl AdminAuth {
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
        }
    }

    /// Use `ADMIN_PASSWORD`, falling back to the well-known development default
    pub fn from_env() -> Self {
        match atelier_config::admin_password() {
            Some(password) => Self::new(password),
            None => {
                warn!(
                    "{} is not set; falling back to the default admin password. \
                     Set it before exposing the admin area.",
                    ADMIN_PASSWORD
                );
                Self::default()
            }
        }
    }

    pub fn is_default_password(&self) -> bool {
        self.password == DEFAULT_ADMIN_PASSWORD
    }

    /// Exact equality against the configured password
    pub fn validate_admin_password(&self, candidate: &str) -> bool {
        self.password.as_bytes().ct_eq(candidate.as_bytes()).into()
    }

    /// Check the password and mint a token on success
    pub fn login(&self, candidate: &str) -> AuthResult<String> {
        if candidate.is_empty() {
            return Err(AuthError::MissingPassword);
        }
        if !self.validate_admin_password(candidate) {
            debug!("Admin login rejected");
            return Err(AuthError::InvalidPassword);
        }
        Ok(generate_admin_token())
    }
}

pub fn generate_admin_token() -> String {
    generate_admin_token_at(Utc::now())
}

pub fn generate_admin_token_at(now: DateTime<Utc>) -> String {
    STANDARD.encode(format!("{}{}", TOKEN_PREFIX, now.timestamp_millis()))
}

/// True when the header is `Bearer <token>` and the token decodes to the admin prefix.
/// The embedded timestamp is not checked.
pub fn validate_auth_header(header: Option<&str>) -> bool {
    authorize(header).is_ok()
}

pub fn authorize(header: Option<&str>) -> AuthResult<()> {
    let header = header.ok_or(AuthError::MissingToken)?;
    let token = header
        .strip_prefix(BEARER_SCHEME)
        .ok_or(AuthError::MissingToken)?;

    let decoded = STANDARD
        .decode(token.trim())
        .map_err(|_| AuthError::InvalidToken)?;

    if String::from_utf8_lossy(&decoded).starts_with(TOKEN_PREFIX) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[test]
    fn test_default_password_accepts_only_admin123() {
        let auth = AdminAuth::default();
        assert!(auth.is_default_password());
        assert!(auth.validate_admin_password("admin123"));
        assert!(!auth.validate_admin_password("admin1234"));
        assert!(!auth.validate_admin_password("Admin123"));
        assert!(!auth.validate_admin_password(""));
    }

    #[test]
    #[serial]
    fn test_from_env_uses_override() {
        std::env::set_var(ADMIN_PASSWORD, "s3cret-studio");
        let auth = AdminAuth::from_env();
        assert!(auth.validate_admin_password("s3cret-studio"));
        assert!(!auth.validate_admin_password("admin123"));

        std::env::remove_var(ADMIN_PASSWORD);
        assert!(AdminAuth::from_env().validate_admin_password("admin123"));
    }

    #[test]
    #[serial]
    fn test_from_env_compares_padded_password_exactly() {
        std::env::set_var(ADMIN_PASSWORD, " studio ");
        let auth = AdminAuth::from_env();
        assert!(auth.validate_admin_password(" studio "));
        assert!(!auth.validate_admin_password("studio"));
        assert!(!auth.is_default_password());

        std::env::remove_var(ADMIN_PASSWORD);
    }

    #[test]
    fn test_login() {
        let auth = AdminAuth::new("letmein");
        assert_eq!(auth.login(""), Err(AuthError::MissingPassword));
        assert_eq!(auth.login("nope"), Err(AuthError::InvalidPassword));

        let token = auth.login("letmein").unwrap();
        assert!(validate_auth_header(Some(&format!("Bearer {}", token))));
    }

    #[test]
    fn test_token_encodes_prefix_and_millis() {
        let now = DateTime::parse_from_rfc3339("2024-03-01T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let token = generate_admin_token_at(now);
        let decoded = String::from_utf8(STANDARD.decode(token).unwrap()).unwrap();
        assert_eq!(decoded, "admin:1709287200000");
    }

    #[test]
    fn test_generated_token_passes_header_check() {
        let token = generate_admin_token();
        assert!(validate_auth_header(Some(&format!("Bearer {}", token))));
    }

    #[test]
    fn test_old_tokens_never_expire() {
        let ancient = DateTime::parse_from_rfc3339("2001-01-01T00:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let token = generate_admin_token_at(ancient);
        assert!(validate_auth_header(Some(&format!("Bearer {}", token))));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("Bearer"))]
    #[case(Some("Basic YWRtaW46MTIz"))]
    #[case(Some("Bearer not*base64!"))]
    #[case(Some("Bearer dXNlcjoxMjM="))] // "user:123"
    fn test_rejected_headers(#[case] header: Option<&str>) {
        assert!(!validate_auth_header(header));
    }

    #[test]
    fn test_authorize_distinguishes_missing_from_invalid() {
        assert_eq!(authorize(None), Err(AuthError::MissingToken));
        assert_eq!(
            authorize(Some("Bearer dXNlcjoxMjM=")),
            Err(AuthError::InvalidToken)
        );
    }

    #[test]
    fn test_debug_redacts_password() {
        let rendered = format!("{:?}", AdminAuth::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
