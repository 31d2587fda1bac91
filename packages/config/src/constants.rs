// ABOUTME: Environment variable name constants and their defaults
// ABOUTME: Centralized definitions of all environment variable names used across Atelier

// Storage Backend Selection
pub const POSTGRES_URL: &str = "POSTGRES_URL";
pub const POSTGRES_PRISMA_URL: &str = "POSTGRES_PRISMA_URL"; // Fallback

// Flat-file Storage
pub const ATELIER_DATA_DIR: &str = "ATELIER_DATA_DIR";
pub const DEFAULT_DATA_DIR: &str = "data";

// Admin Authentication
pub const ADMIN_PASSWORD: &str = "ADMIN_PASSWORD";
/// Insecure fallback used when ADMIN_PASSWORD is unset. Never rely on it outside local development.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

// Server Configuration
pub const PORT: &str = "PORT";
pub const DEFAULT_PORT: u16 = 3000;
pub const CORS_ORIGIN: &str = "CORS_ORIGIN";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
