// ABOUTME: Chooses the record-store backend from configuration on every acquisition
// ABOUTME: The only place in the codebase that knows which backend is in use

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::{
    BookingStore, FlatFileStore, PortfolioStore, RelationalStore, SocialMediaStore, StorageResult,
};

/// Connection strings containing this are template leftovers, not real credentials
const PLACEHOLDER_MARKER: &str = "your-";
const RELATIONAL_PREFIXES: [&str; 2] = ["postgres://", "postgresql://"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    FlatFile,
    Relational,
}

impl BackendKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BackendKind::FlatFile => "file",
            BackendKind::Relational => "database",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to backend selection
#[derive(Clone, Default)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
    pub database_url: Option<String>,
}

impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("data_dir", &self.data_dir)
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl StorageConfig {
    pub fn new(data_dir: impl Into<PathBuf>, database_url: Option<String>) -> Self {
        Self {
            data_dir: data_dir.into(),
            database_url,
        }
    }

    /// Snapshot of the current environment
    pub fn from_env() -> Self {
        Self::new(atelier_core::data_dir(), atelier_config::database_url())
    }
}

/// True when `url` is a usable Postgres connection string
pub fn is_relational_url(url: &str) -> bool {
    !url.contains(PLACEHOLDER_MARKER)
        && RELATIONAL_PREFIXES
            .iter()
            .any(|prefix| url.starts_with(prefix))
}

pub fn select_backend(config: &StorageConfig) -> BackendKind {
    match config.database_url.as_deref() {
        Some(url) if is_relational_url(url) => BackendKind::Relational,
        _ => BackendKind::FlatFile,
    }
}

/// Uniform access to the three record stores, whichever backend holds them.
///
/// Callers use the fields and never branch on [`StorageAdapter::kind`]; the
/// marker exists for diagnostics and tests.
#[derive(Clone)]
pub struct StorageAdapter {
    kind: BackendKind,
    pub bookings: Arc<dyn BookingStore>,
    pub portfolios: Arc<dyn PortfolioStore>,
    pub social_media: Arc<dyn SocialMediaStore>,
}

impl fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageAdapter")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

impl StorageAdapter {
    pub fn flat_file(data_dir: impl Into<PathBuf>) -> Self {
        let store = Arc::new(FlatFileStore::new(data_dir));
        Self {
            kind: BackendKind::FlatFile,
            bookings: store.clone(),
            portfolios: store.clone(),
            social_media: store,
        }
    }

    /// Relational adapter over any sqlx-supported URL. Connections open lazily.
    pub fn relational(database_url: &str) -> StorageResult<Self> {
        let store = Arc::new(RelationalStore::connect_lazy(database_url)?);
        Ok(Self {
            kind: BackendKind::Relational,
            bookings: store.clone(),
            portfolios: store.clone(),
            social_media: store,
        })
    }

    pub fn kind(&self) -> BackendKind {
        self.kind
    }
}

/// Build the adapter for `config`. Nothing is cached, so a changed
/// configuration takes effect on the next call.
pub fn get_storage_adapter(config: &StorageConfig) -> StorageResult<StorageAdapter> {
    let kind = select_backend(config);
    debug!(backend = %kind, "Using storage backend");

    match (kind, config.database_url.as_deref()) {
        (BackendKind::Relational, Some(url)) => StorageAdapter::relational(url),
        _ => Ok(StorageAdapter::flat_file(&config.data_dir)),
    }
}
