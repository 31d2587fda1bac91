// ABOUTME: Data model for bookings, custom portfolios, and social links
// ABOUTME: Field names on the wire match the stored column and JSON key names

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::generate_booking_id;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    #[error("Unknown {kind}: {value}")]
    Unknown { kind: &'static str, value: String },
}

/// Lifecycle status of a consultation booking.
///
/// Any status may be set at any time; there is no transition graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub const ALL: [BookingStatus; 4] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Completed,
        BookingStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Completed => "Completed",
            BookingStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseEnumError::Unknown {
                kind: "booking status",
                value: s.to_string(),
            })
    }
}

/// Column headers of the bookings sheet, in write order
pub const BOOKING_COLUMNS: [&str; 13] = [
    "ID",
    "Timestamp",
    "Name",
    "Email",
    "Phone",
    "Location",
    "Project Type",
    "Area Size",
    "Budget",
    "Appointment Date",
    "Appointment Time",
    "Message",
    "Status",
];

/// A consultation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Project Type")]
    pub project_type: String,
    #[serde(rename = "Area Size")]
    pub area_size: String,
    #[serde(rename = "Budget")]
    pub budget: String,
    #[serde(rename = "Appointment Date")]
    pub appointment_date: String,
    #[serde(rename = "Appointment Time")]
    pub appointment_time: String,
    #[serde(rename = "Message", default)]
    pub message: String,
    #[serde(rename = "Status", default)]
    pub status: BookingStatus,
}

impl Booking {
    /// Build a new pending booking from a submitted form.
    ///
    /// The form is expected to have passed `validate_booking_data`; missing
    /// fields become empty strings.
    pub fn from_form(form: BookingFormData, now: DateTime<Utc>) -> Self {
        Self {
            id: generate_booking_id(now),
            timestamp: now,
            name: form.name.unwrap_or_default(),
            email: form.email.unwrap_or_default(),
            phone: form.phone.unwrap_or_default(),
            location: form.location.unwrap_or_default(),
            project_type: form.project_type.unwrap_or_default(),
            area_size: form.area_size.unwrap_or_default(),
            budget: form.budget.unwrap_or_default(),
            appointment_date: form.appointment_date.unwrap_or_default(),
            appointment_time: form.appointment_time.unwrap_or_default(),
            message: form.message.unwrap_or_default(),
            status: BookingStatus::Pending,
        }
    }

    /// Values in `BOOKING_COLUMNS` order
    pub fn column_values(&self) -> [String; 13] {
        [
            self.id.clone(),
            crate::utils::format_timestamp(&self.timestamp),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.location.clone(),
            self.project_type.clone(),
            self.area_size.clone(),
            self.budget.clone(),
            self.appointment_date.clone(),
            self.appointment_time.clone(),
            self.message.clone(),
            self.status.to_string(),
        ]
    }
}

/// Booking form payload as submitted by the public consultation page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingFormData {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub project_type: Option<String>,
    pub area_size: Option<String>,
    pub budget: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioCategory {
    Residential,
    Commercial,
}

impl PortfolioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioCategory::Residential => "Residential",
            PortfolioCategory::Commercial => "Commercial",
        }
    }
}

impl fmt::Display for PortfolioCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioCategory {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Residential" => Ok(PortfolioCategory::Residential),
            "Commercial" => Ok(PortfolioCategory::Commercial),
            _ => Err(ParseEnumError::Unknown {
                kind: "portfolio category",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PortfolioStyle {
    Modern,
    Classic,
    Industrial,
    Minimalist,
}

impl PortfolioStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            PortfolioStyle::Modern => "Modern",
            PortfolioStyle::Classic => "Classic",
            PortfolioStyle::Industrial => "Industrial",
            PortfolioStyle::Minimalist => "Minimalist",
        }
    }
}

impl fmt::Display for PortfolioStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PortfolioStyle {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Modern" => Ok(PortfolioStyle::Modern),
            "Classic" => Ok(PortfolioStyle::Classic),
            "Industrial" => Ok(PortfolioStyle::Industrial),
            "Minimalist" => Ok(PortfolioStyle::Minimalist),
            _ => Err(ParseEnumError::Unknown {
                kind: "portfolio style",
                value: s.to_string(),
            }),
        }
    }
}

/// An admin-created showcase entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomPortfolio {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub category: PortfolioCategory,
    pub style: PortfolioStyle,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_size: Option<String>,
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Comma-joined list, split only for presentation
    #[serde(default)]
    pub materials: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub impact: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Year submitted either as a JSON number or a string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum YearValue {
    Number(i64),
    Text(String),
}

impl fmt::Display for YearValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearValue::Number(year) => write!(f, "{}", year),
            YearValue::Text(year) => f.write_str(year.trim()),
        }
    }
}

/// Portfolio payload as submitted by the admin portfolio page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PortfolioFormData {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub style: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub year: Option<YearValue>,
    pub image_url: Option<String>,
    pub materials: Option<String>,
    pub challenges: Option<String>,
    pub impact: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SocialPlatform {
    Instagram,
    Facebook,
    LinkedIn,
    Twitter,
    YouTube,
    Pinterest,
    TikTok,
    WhatsApp,
    Other,
}

impl SocialPlatform {
    pub const ALL: [SocialPlatform; 9] = [
        SocialPlatform::Instagram,
        SocialPlatform::Facebook,
        SocialPlatform::LinkedIn,
        SocialPlatform::Twitter,
        SocialPlatform::YouTube,
        SocialPlatform::Pinterest,
        SocialPlatform::TikTok,
        SocialPlatform::WhatsApp,
        SocialPlatform::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SocialPlatform::Instagram => "Instagram",
            SocialPlatform::Facebook => "Facebook",
            SocialPlatform::LinkedIn => "LinkedIn",
            SocialPlatform::Twitter => "Twitter",
            SocialPlatform::YouTube => "YouTube",
            SocialPlatform::Pinterest => "Pinterest",
            SocialPlatform::TikTok => "TikTok",
            SocialPlatform::WhatsApp => "WhatsApp",
            SocialPlatform::Other => "Other",
        }
    }
}

impl fmt::Display for SocialPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SocialPlatform {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SocialPlatform::ALL
            .into_iter()
            .find(|platform| platform.as_str() == s)
            .ok_or_else(|| ParseEnumError::Unknown {
                kind: "social platform",
                value: s.to_string(),
            })
    }
}

fn default_enabled() -> bool {
    true
}

/// A footer/contact link
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMediaLink {
    pub id: String,
    pub name: String,
    pub platform: SocialPlatform,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Display position, ascending. May be fractional after reordering.
    #[serde(default)]
    pub order: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_booking_status_round_trips_through_str() {
        for status in BookingStatus::ALL {
            assert_eq!(status.as_str().parse::<BookingStatus>().unwrap(), status);
        }
        assert!("pending".parse::<BookingStatus>().is_err());
        assert!("Archived".parse::<BookingStatus>().is_err());
    }

    #[test]
    fn test_booking_serializes_with_sheet_column_names() {
        let now = DateTime::parse_from_rfc3339("2024-03-01T10:00:00.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let form = BookingFormData {
            name: Some("Asha".to_string()),
            project_type: Some("Kitchen".to_string()),
            ..Default::default()
        };
        let booking = Booking::from_form(form, now);
        let json = serde_json::to_value(&booking).unwrap();

        assert_eq!(json["ID"], "BK1709287200000");
        assert_eq!(json["Project Type"], "Kitchen");
        assert_eq!(json["Status"], "Pending");
        assert_eq!(json["Message"], "");
    }

    #[test]
    fn test_social_link_defaults_enabled_when_missing() {
        let json = r#"{
            "id": "sm_1",
            "name": "Studio Instagram",
            "platform": "Instagram",
            "url": "https://instagram.com/studio",
            "order": 2.5,
            "createdAt": "2024-01-01T00:00:00Z",
            "updatedAt": "2024-01-01T00:00:00Z"
        }"#;
        let link: SocialMediaLink = serde_json::from_str(json).unwrap();
        assert!(link.enabled);
        assert_eq!(link.order, 2.5);
        assert_eq!(link.platform, SocialPlatform::Instagram);
    }

    #[test]
    fn test_year_value_accepts_number_or_string() {
        let form: PortfolioFormData = serde_json::from_str(r#"{"year": 2023}"#).unwrap();
        assert_eq!(form.year.unwrap().to_string(), "2023");

        let form: PortfolioFormData = serde_json::from_str(r#"{"year": " 2021 "}"#).unwrap();
        assert_eq!(form.year.unwrap().to_string(), "2021");
    }
}
