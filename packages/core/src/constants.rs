use std::path::PathBuf;

use atelier_config::constants::{ATELIER_DATA_DIR, DEFAULT_DATA_DIR};

/// Workbook holding every booking row
pub const BOOKINGS_FILE: &str = "bookings.xlsx";

/// Name of the single sheet inside the bookings workbook
pub const BOOKINGS_SHEET: &str = "Bookings";

/// JSON array of admin-created portfolio entries
pub const CUSTOM_PORTFOLIOS_FILE: &str = "custom-portfolios.json";

/// JSON array of footer/contact social links
pub const SOCIAL_MEDIA_FILE: &str = "social-media.json";

/// Image shown for portfolio entries submitted without one
pub const PLACEHOLDER_IMAGE: &str = "/images/projects/placeholder.jpg";

/// Get the flat-file data directory (`ATELIER_DATA_DIR`, or `./data`)
pub fn data_dir() -> PathBuf {
    atelier_config::env_value(ATELIER_DATA_DIR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}
