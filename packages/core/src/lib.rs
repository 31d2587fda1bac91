// ABOUTME: Core types, validation, and utilities for Atelier
// ABOUTME: Foundational package shared by storage, auth, and the HTTP layer

pub mod constants;
pub mod portfolio;
pub mod social;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    Booking, BookingFormData, BookingStatus, CustomPortfolio, ParseEnumError, PortfolioCategory,
    PortfolioFormData, PortfolioStyle, SocialMediaLink, SocialPlatform, YearValue,
    BOOKING_COLUMNS,
};

// Re-export constants
pub use constants::data_dir;

// Re-export presentation helpers
pub use portfolio::{find_by_slug, merge_portfolios, Project, ProjectImage};
pub use social::{next_order, reordered, sort_by_order, visible_links, ReorderDirection};

// Re-export utilities
pub use utils::{
    generate_booking_id, generate_portfolio_id, generate_social_link_id, now_millis,
    portfolio_slug, slugify,
};

// Re-export validation
pub use validation::{
    is_valid_booking_status, is_valid_email, is_valid_phone, validate_booking_data,
    validate_portfolio_data, validate_social_link, ValidationError, ValidationResult,
};
