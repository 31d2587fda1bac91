// ABOUTME: Local filesystem record store for single-process, single-writer deployments
// ABOUTME: Bookings live in a workbook, portfolios and social links in JSON array files

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use atelier_core::constants::{BOOKINGS_FILE, CUSTOM_PORTFOLIOS_FILE, SOCIAL_MEDIA_FILE};
use atelier_core::{Booking, BookingStatus, CustomPortfolio, SocialMediaLink};

use crate::{BookingStore, PortfolioStore, SocialMediaStore, StorageError, StorageResult};

pub mod json;
pub mod workbook;

/// Filesystem implementation of every record store.
///
/// Holds nothing but its directory: each call re-reads the medium. Writes are
/// whole-file read-modify-write with no locking, so two concurrent writers can
/// lose an update.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    data_dir: PathBuf,
}

impl FlatFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn bookings_path(&self) -> PathBuf {
        self.data_dir.join(BOOKINGS_FILE)
    }

    pub fn portfolios_path(&self) -> PathBuf {
        self.data_dir.join(CUSTOM_PORTFOLIOS_FILE)
    }

    pub fn social_media_path(&self) -> PathBuf {
        self.data_dir.join(SOCIAL_MEDIA_FILE)
    }

    /// Create the data directory and a header-only workbook if either is missing
    pub async fn initialize_workbook(&self) -> StorageResult<()> {
        let path = self.bookings_path();
        if fs::metadata(&path).await.is_ok() {
            return Ok(());
        }

        debug!("Creating bookings workbook: {:?}", path);
        self.write_bookings(&[]).await
    }

    /// Bookings in file order
    async fn load_bookings(&self) -> StorageResult<Vec<Booking>> {
        self.initialize_workbook().await?;

        let path = self.bookings_path();
        debug!("Reading bookings from: {:?}", path);
        let bytes = fs::read(&path).await?;
        workbook::decode_bookings(bytes)
    }

    async fn write_bookings(&self, bookings: &[Booking]) -> StorageResult<()> {
        fs::create_dir_all(&self.data_dir).await?;

        let bytes = workbook::encode_bookings(bookings)?;
        fs::write(self.bookings_path(), bytes).await?;

        debug!("Wrote {} bookings to disk", bookings.len());
        Ok(())
    }
}

#[async_trait]
impl BookingStore for FlatFileStore {
    async fn add(&self, booking: &Booking) -> StorageResult<()> {
        let mut bookings = self.load_bookings().await?;
        if bookings.iter().any(|existing| existing.id == booking.id) {
            return Err(StorageError::Duplicate(format!("booking id {}", booking.id)));
        }
        bookings.push(booking.clone());
        self.write_bookings(&bookings).await
    }

    async fn read(&self) -> StorageResult<Vec<Booking>> {
        let mut bookings = self.load_bookings().await?;
        bookings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(bookings)
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Booking>> {
        let bookings = self.load_bookings().await?;
        Ok(bookings.into_iter().find(|booking| booking.id == id))
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> StorageResult<bool> {
        let mut bookings = self.load_bookings().await?;

        let Some(booking) = bookings.iter_mut().find(|booking| booking.id == id) else {
            debug!("No booking with id {}", id);
            return Ok(false);
        };
        booking.status = status;

        self.write_bookings(&bookings).await?;
        Ok(true)
    }
}

#[async_trait]
impl PortfolioStore for FlatFileStore {
    async fn add(&self, portfolio: &CustomPortfolio) -> StorageResult<()> {
        let path = self.portfolios_path();
        let mut portfolios: Vec<CustomPortfolio> = json::read_json_array(&path).await?;
        if let Some(existing) = portfolios
            .iter()
            .find(|existing| existing.id == portfolio.id || existing.slug == portfolio.slug)
        {
            let field = if existing.id == portfolio.id {
                format!("portfolio id {}", portfolio.id)
            } else {
                format!("portfolio slug {}", portfolio.slug)
            };
            return Err(StorageError::Duplicate(field));
        }
        portfolios.push(portfolio.clone());
        json::write_json_array(&path, &portfolios).await
    }

    /// Insertion order
    async fn get_all(&self) -> StorageResult<Vec<CustomPortfolio>> {
        json::read_json_array(&self.portfolios_path()).await
    }
}

#[async_trait]
impl SocialMediaStore for FlatFileStore {
    /// Stored order, orders kept verbatim
    async fn get(&self) -> StorageResult<Vec<SocialMediaLink>> {
        json::read_json_array(&self.social_media_path()).await
    }

    async fn update(&self, links: &[SocialMediaLink]) -> StorageResult<()> {
        let mut seen = HashSet::new();
        if let Some(repeated) = links.iter().find(|link| !seen.insert(link.id.as_str())) {
            return Err(StorageError::Duplicate(format!(
                "social media link id {}",
                repeated.id
            )));
        }

        json::write_json_array(&self.social_media_path(), links).await
    }
}
