// ABOUTME: Server configuration read from the environment
// ABOUTME: Port, allowed CORS origin, and flat-file data directory

use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

use atelier_config::constants::{CORS_ORIGIN, DEFAULT_CORS_ORIGIN, DEFAULT_PORT, PORT};
use atelier_config::env_value;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid CORS origin: {0}")]
    InvalidCorsOrigin(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origin: String,
    pub data_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env_value(PORT) {
            Some(port) => port.parse::<u16>()?,
            None => DEFAULT_PORT,
        };

        // Validate port is in valid range
        if port == 0 {
            return Err(ConfigError::PortOutOfRange(port));
        }

        let cors_origin = env_value(CORS_ORIGIN).unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());
        if !cors_origin.starts_with("http://") && !cors_origin.starts_with("https://") {
            return Err(ConfigError::InvalidCorsOrigin(cors_origin));
        }

        Ok(Config {
            port,
            cors_origin,
            data_dir: atelier_core::data_dir(),
        })
    }
}
