// ABOUTME: Shared utility functions for Atelier
// ABOUTME: Time-based ID generation, slug derivation, and timestamp formatting

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_SLUG_CHARS: Regex = Regex::new(r"[^a-z0-9]+").unwrap();
}

/// Current time truncated to the millisecond precision every store keeps
pub fn now_millis() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// Booking identifiers are `BK` followed by the epoch milliseconds
pub fn generate_booking_id(now: DateTime<Utc>) -> String {
    format!("BK{}", now.timestamp_millis())
}

pub fn generate_portfolio_id(now: DateTime<Utc>) -> String {
    format!("custom-{}", now.timestamp_millis())
}

pub fn generate_social_link_id(now: DateTime<Utc>) -> String {
    format!("sm_{}", now.timestamp_millis())
}

/// Lower-case the title and collapse every run of non-alphanumerics into a single `-`
pub fn slugify(title: &str) -> String {
    let lowered = title.to_lowercase();
    NON_SLUG_CHARS
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Slug with a time suffix so two entries with the same title never collide
pub fn portfolio_slug(title: &str, now: DateTime<Utc>) -> String {
    format!("{}-{}", slugify(title), now.timestamp_millis())
}

/// RFC 3339 with millisecond precision and a `Z` suffix
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|timestamp| timestamp.with_timezone(&Utc))
}
