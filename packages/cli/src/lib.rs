// ABOUTME: Library half of the atelier binary
// ABOUTME: Configuration, logging setup, server bootstrap, and admin commands

pub mod commands;
pub mod config;
pub mod server;

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();
}
