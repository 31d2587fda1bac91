// ABOUTME: Configuration helpers shared by every Atelier package
// ABOUTME: Reads environment values without caching so changes apply on the next lookup

pub mod constants;

use std::env;

/// Read an environment variable, treating empty or whitespace-only values as unset.
pub fn env_value(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Read the first set variable out of `names`, in order.
pub fn first_env_value(names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| env_value(name))
}

/// Relational connection string, if one is configured.
pub fn database_url() -> Option<String> {
    first_env_value(&[constants::POSTGRES_URL, constants::POSTGRES_PRISMA_URL])
}

/// Admin password override, if one is configured. The value is compared
/// verbatim, so surrounding whitespace is kept; only an empty value is unset.
pub fn admin_password() -> Option<String> {
    let password = env::var(constants::ADMIN_PASSWORD)
        .ok()
        .filter(|value| !value.is_empty());
    if password.is_none() {
        tracing::debug!("{} not set", constants::ADMIN_PASSWORD);
    }
    password
}
