// ABOUTME: Record stores for bookings, custom portfolios, and social links
// ABOUTME: Defines the storage traits, the error type, and both backends behind one adapter

use async_trait::async_trait;
use thiserror::Error;

use atelier_core::{Booking, BookingStatus, CustomPortfolio, SocialMediaLink};

pub mod factory;
pub mod flat_file;
pub mod relational;

pub use factory::{
    get_storage_adapter, is_relational_url, select_backend, BackendKind, StorageAdapter,
    StorageConfig,
};
pub use flat_file::FlatFileStore;
pub use relational::RelationalStore;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Database error: {0}")]
    Database(String),
    #[error("Sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Workbook read error: {0}")]
    WorkbookRead(#[from] calamine::XlsxError),
    #[error("Workbook write error: {0}")]
    WorkbookWrite(#[from] rust_xlsxwriter::XlsxError),
    #[error("Invalid stored value: {0}")]
    InvalidFormat(String),
    #[error("Duplicate {0}")]
    Duplicate(String),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Booking persistence. Bookings are never deleted.
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Append a new booking. Fails with [`StorageError::Duplicate`] when the id is taken.
    async fn add(&self, booking: &Booking) -> StorageResult<()>;

    /// All bookings, newest first. Empty when nothing has been stored yet.
    async fn read(&self) -> StorageResult<Vec<Booking>>;

    /// `None` when no booking has this id
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Booking>>;

    /// Set the status of one booking. Returns false when no booking matched.
    async fn update_status(&self, id: &str, status: BookingStatus) -> StorageResult<bool>;
}

/// Admin-created portfolio persistence. Entries are append-only.
#[async_trait]
pub trait PortfolioStore: Send + Sync {
    /// Fails with [`StorageError::Duplicate`] when the id or slug is taken
    async fn add(&self, portfolio: &CustomPortfolio) -> StorageResult<()>;

    async fn get_all(&self) -> StorageResult<Vec<CustomPortfolio>>;
}

/// Social link persistence
#[async_trait]
pub trait SocialMediaStore: Send + Sync {
    /// Every stored link, enabled or not
    async fn get(&self) -> StorageResult<Vec<SocialMediaLink>>;

    /// Replace the whole collection with `links`. Repeated ids are rejected
    /// with [`StorageError::Duplicate`] and nothing is written.
    async fn update(&self, links: &[SocialMediaLink]) -> StorageResult<()>;
}
