// ABOUTME: SQL record store for hosted Postgres deployments
// ABOUTME: Uses sqlx's Any driver with portable column types so the same code runs on SQLite

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::any::{install_default_drivers, AnyPoolOptions, AnyRow};
use sqlx::{AnyPool, Row};
use tracing::debug;

use atelier_core::utils::{format_timestamp, parse_timestamp};
use atelier_core::{Booking, BookingStatus, CustomPortfolio, SocialMediaLink};

use crate::{BookingStore, PortfolioStore, SocialMediaStore, StorageError, StorageResult};

const MAX_CONNECTIONS: u32 = 5;
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

const CREATE_BOOKINGS: &str = r#"
    CREATE TABLE IF NOT EXISTS bookings (
        id TEXT PRIMARY KEY,
        created_at TEXT NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        phone TEXT NOT NULL,
        location TEXT NOT NULL,
        project_type TEXT NOT NULL,
        area_size TEXT NOT NULL,
        budget TEXT NOT NULL,
        appointment_date TEXT NOT NULL,
        appointment_time TEXT NOT NULL,
        message TEXT,
        status TEXT NOT NULL DEFAULT 'Pending'
    )
"#;

const CREATE_CUSTOM_PORTFOLIOS: &str = r#"
    CREATE TABLE IF NOT EXISTS custom_portfolios (
        id TEXT PRIMARY KEY,
        slug TEXT NOT NULL UNIQUE,
        title TEXT NOT NULL,
        description TEXT NOT NULL,
        category TEXT NOT NULL,
        style TEXT NOT NULL,
        location TEXT NOT NULL,
        area_size TEXT,
        year TEXT NOT NULL,
        image_url TEXT,
        materials TEXT,
        challenges TEXT,
        impact TEXT,
        created_at TEXT NOT NULL
    )
"#;

const CREATE_SOCIAL_MEDIA: &str = r#"
    CREATE TABLE IF NOT EXISTS social_media (
        id TEXT PRIMARY KEY,
        name TEXT NOT NULL,
        platform TEXT NOT NULL,
        url TEXT NOT NULL,
        icon TEXT,
        enabled BIGINT NOT NULL DEFAULT 1,
        sort_order DOUBLE PRECISION NOT NULL DEFAULT 0,
        created_at TEXT NOT NULL,
        updated_at TEXT NOT NULL
    )
"#;

const SELECT_BOOKINGS: &str = r#"
    SELECT
        id AS "ID",
        created_at AS "Timestamp",
        name AS "Name",
        email AS "Email",
        phone AS "Phone",
        location AS "Location",
        project_type AS "Project Type",
        area_size AS "Area Size",
        budget AS "Budget",
        appointment_date AS "Appointment Date",
        appointment_time AS "Appointment Time",
        message AS "Message",
        status AS "Status"
    FROM bookings
"#;

const SELECT_PORTFOLIOS: &str = r#"
    SELECT
        id,
        slug,
        title,
        description,
        category,
        style,
        location,
        area_size AS "areaSize",
        year,
        image_url AS "imageUrl",
        materials,
        challenges,
        impact,
        created_at AS "createdAt"
    FROM custom_portfolios
"#;

const SELECT_SOCIAL_MEDIA: &str = r#"
    SELECT
        id,
        name,
        platform,
        url,
        icon,
        enabled,
        sort_order AS "order",
        created_at AS "createdAt",
        updated_at AS "updatedAt"
    FROM social_media
"#;

/// SQL implementation of every record store.
///
/// Tables are created on demand at the start of each operation, so a fresh
/// database needs no migration step.
#[derive(Debug, Clone)]
pub struct RelationalStore {
    pool: AnyPool,
}

impl RelationalStore {
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }

    /// Build a pool that opens connections on first use
    pub fn connect_lazy(database_url: &str) -> StorageResult<Self> {
        install_default_drivers();

        let pool = AnyPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_lazy(database_url)?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    /// Idempotently create all three tables
    pub async fn initialize(&self) -> StorageResult<()> {
        for statement in [CREATE_BOOKINGS, CREATE_CUSTOM_PORTFOLIOS, CREATE_SOCIAL_MEDIA] {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StorageError::Sqlx)?;
        }
        Ok(())
    }

    fn row_to_booking(row: &AnyRow) -> StorageResult<Booking> {
        let status: String = row.try_get("Status")?;
        let message: Option<String> = row.try_get("Message")?;

        Ok(Booking {
            id: row.try_get("ID")?,
            timestamp: column_timestamp(row, "Timestamp")?,
            name: row.try_get("Name")?,
            email: row.try_get("Email")?,
            phone: row.try_get("Phone")?,
            location: row.try_get("Location")?,
            project_type: row.try_get("Project Type")?,
            area_size: row.try_get("Area Size")?,
            budget: row.try_get("Budget")?,
            appointment_date: row.try_get("Appointment Date")?,
            appointment_time: row.try_get("Appointment Time")?,
            message: message.unwrap_or_default(),
            status: status
                .parse()
                .map_err(|e| StorageError::InvalidFormat(format!("{}", e)))?,
        })
    }

    fn row_to_portfolio(row: &AnyRow) -> StorageResult<CustomPortfolio> {
        let category: String = row.try_get("category")?;
        let style: String = row.try_get("style")?;

        Ok(CustomPortfolio {
            id: row.try_get("id")?,
            slug: row.try_get("slug")?,
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            category: category
                .parse()
                .map_err(|e| StorageError::InvalidFormat(format!("{}", e)))?,
            style: style
                .parse()
                .map_err(|e| StorageError::InvalidFormat(format!("{}", e)))?,
            location: row.try_get("location")?,
            area_size: row.try_get("areaSize")?,
            year: row.try_get("year")?,
            image_url: row.try_get("imageUrl")?,
            materials: row
                .try_get::<Option<String>, _>("materials")?
                .unwrap_or_default(),
            challenges: row
                .try_get::<Option<String>, _>("challenges")?
                .unwrap_or_default(),
            impact: row
                .try_get::<Option<String>, _>("impact")?
                .unwrap_or_default(),
            created_at: Some(column_timestamp(row, "createdAt")?),
        })
    }

    fn row_to_social_link(row: &AnyRow) -> StorageResult<SocialMediaLink> {
        let platform: String = row.try_get("platform")?;

        Ok(SocialMediaLink {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            platform: platform
                .parse()
                .map_err(|e| StorageError::InvalidFormat(format!("{}", e)))?,
            url: row.try_get("url")?,
            icon: row.try_get("icon")?,
            enabled: row.try_get::<i64, _>("enabled")? != 0,
            order: row.try_get("order")?,
            created_at: column_timestamp(row, "createdAt")?,
            updated_at: column_timestamp(row, "updatedAt")?,
        })
    }
}

/// Unique-constraint violations become [`StorageError::Duplicate`] so both
/// backends report a taken key the same way
fn insert_error(err: sqlx::Error, record: impl FnOnce() -> String) -> StorageError {
    let is_duplicate = matches!(
        &err,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation()
    );

    if is_duplicate {
        StorageError::Duplicate(record())
    } else {
        StorageError::Sqlx(err)
    }
}

fn column_timestamp(row: &AnyRow, column: &str) -> StorageResult<DateTime<Utc>> {
    let raw: String = row.try_get(column)?;
    parse_timestamp(&raw).ok_or_else(|| {
        StorageError::InvalidFormat(format!("{} is not a timestamp: {}", column, raw))
    })
}

#[async_trait]
impl BookingStore for RelationalStore {
    async fn add(&self, booking: &Booking) -> StorageResult<()> {
        self.initialize().await?;

        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, created_at, name, email, phone, location, project_type,
                area_size, budget, appointment_date, appointment_time, message, status
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(&booking.id)
        .bind(format_timestamp(&booking.timestamp))
        .bind(&booking.name)
        .bind(&booking.email)
        .bind(&booking.phone)
        .bind(&booking.location)
        .bind(&booking.project_type)
        .bind(&booking.area_size)
        .bind(&booking.budget)
        .bind(&booking.appointment_date)
        .bind(&booking.appointment_time)
        .bind(&booking.message)
        .bind(booking.status.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| insert_error(e, || format!("booking id {}", booking.id)))?;

        debug!("Inserted booking {}", booking.id);
        Ok(())
    }

    async fn read(&self) -> StorageResult<Vec<Booking>> {
        self.initialize().await?;

        let rows = sqlx::query(&format!("{} ORDER BY created_at DESC", SELECT_BOOKINGS))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Booking>> {
        self.initialize().await?;

        let row = sqlx::query(&format!("{} WHERE id = $1", SELECT_BOOKINGS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn update_status(&self, id: &str, status: BookingStatus) -> StorageResult<bool> {
        self.initialize().await?;

        let result = sqlx::query("UPDATE bookings SET status = $1 WHERE id = $2")
            .bind(status.as_str())
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        debug!("Status update for {} touched {} rows", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl PortfolioStore for RelationalStore {
    async fn add(&self, portfolio: &CustomPortfolio) -> StorageResult<()> {
        self.initialize().await?;

        let created_at = portfolio.created_at.unwrap_or_else(Utc::now);

        sqlx::query(
            r#"
            INSERT INTO custom_portfolios (
                id, slug, title, description, category, style, location,
                area_size, year, image_url, materials, challenges, impact, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            "#,
        )
        .bind(&portfolio.id)
        .bind(&portfolio.slug)
        .bind(&portfolio.title)
        .bind(&portfolio.description)
        .bind(portfolio.category.as_str())
        .bind(portfolio.style.as_str())
        .bind(&portfolio.location)
        .bind(portfolio.area_size.clone())
        .bind(&portfolio.year)
        .bind(portfolio.image_url.clone())
        .bind(&portfolio.materials)
        .bind(&portfolio.challenges)
        .bind(&portfolio.impact)
        .bind(format_timestamp(&created_at))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            insert_error(e, || {
                format!("portfolio id {} or slug {}", portfolio.id, portfolio.slug)
            })
        })?;

        debug!("Inserted custom portfolio {}", portfolio.id);
        Ok(())
    }

    /// Newest first
    async fn get_all(&self) -> StorageResult<Vec<CustomPortfolio>> {
        self.initialize().await?;

        let rows = sqlx::query(&format!("{} ORDER BY created_at DESC", SELECT_PORTFOLIOS))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(Self::row_to_portfolio).collect()
    }
}

#[async_trait]
impl SocialMediaStore for RelationalStore {
    /// Ascending by stored order
    async fn get(&self) -> StorageResult<Vec<SocialMediaLink>> {
        self.initialize().await?;

        let rows = sqlx::query(&format!("{} ORDER BY sort_order ASC", SELECT_SOCIAL_MEDIA))
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::Sqlx)?;

        rows.iter().map(Self::row_to_social_link).collect()
    }

    /// Delete everything and insert `links`, all in one transaction
    async fn update(&self, links: &[SocialMediaLink]) -> StorageResult<()> {
        self.initialize().await?;

        let mut tx = self.pool.begin().await.map_err(StorageError::Sqlx)?;

        sqlx::query("DELETE FROM social_media")
            .execute(&mut *tx)
            .await
            .map_err(StorageError::Sqlx)?;

        for link in links {
            sqlx::query(
                r#"
                INSERT INTO social_media (
                    id, name, platform, url, icon, enabled, sort_order, created_at, updated_at
                ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
            )
            .bind(&link.id)
            .bind(&link.name)
            .bind(link.platform.as_str())
            .bind(&link.url)
            .bind(link.icon.clone())
            .bind(i64::from(link.enabled))
            .bind(link.order)
            .bind(format_timestamp(&link.created_at))
            .bind(format_timestamp(&link.updated_at))
            .execute(&mut *tx)
            .await
            .map_err(|e| insert_error(e, || format!("social media link id {}", link.id)))?;
        }

        tx.commit().await.map_err(StorageError::Sqlx)?;

        debug!("Replaced social media links with {} entries", links.len());
        Ok(())
    }
}
