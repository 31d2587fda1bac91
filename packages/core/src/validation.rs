// ABOUTME: Input validation for booking, portfolio, and social-link payloads
// ABOUTME: Every rule is checked independently and all failures are collected in order

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{
    BookingFormData, BookingStatus, PortfolioCategory, PortfolioFormData, PortfolioStyle,
    SocialPlatform,
};

lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
    static ref PHONE_SEPARATORS: Regex = Regex::new(r"[\s\-()]").unwrap();
    static ref INDIAN_MOBILE: Regex = Regex::new(r"^(\+91)?[6-9]\d{9}$").unwrap();
}

/// A single violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    fn from_errors(errors: Vec<ValidationError>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Field names of the violated rules, in check order
    pub fn fields(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.field.as_str()).collect()
    }
}

fn is_blank(value: Option<&String>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

fn is_missing(value: Option<&String>) -> bool {
    value.map_or(true, |v| v.is_empty())
}

/// Validate a public booking submission
pub fn validate_booking_data(data: &BookingFormData) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(data.name.as_ref()) {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    if !data.email.as_deref().is_some_and(is_valid_email) {
        errors.push(ValidationError::new("email", "Valid email is required"));
    }

    if !data.phone.as_deref().is_some_and(is_valid_phone) {
        errors.push(ValidationError::new(
            "phone",
            "Valid phone number is required",
        ));
    }

    if is_blank(data.location.as_ref()) {
        errors.push(ValidationError::new("location", "Location is required"));
    }

    let required = [
        ("projectType", &data.project_type, "Project type is required"),
        ("areaSize", &data.area_size, "Area size is required"),
        ("budget", &data.budget, "Budget is required"),
        (
            "appointmentDate",
            &data.appointment_date,
            "Appointment date is required",
        ),
        (
            "appointmentTime",
            &data.appointment_time,
            "Appointment time is required",
        ),
    ];
    for (field, value, message) in required {
        if is_missing(value.as_ref()) {
            errors.push(ValidationError::new(field, message));
        }
    }

    ValidationResult::from_errors(errors)
}

/// Local part, `@`, and a dotted domain with no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Ten-digit Indian mobile number, optionally prefixed with `+91`.
/// Spaces, dashes, and parentheses are ignored.
pub fn is_valid_phone(phone: &str) -> bool {
    let cleaned = PHONE_SEPARATORS.replace_all(phone, "");
    INDIAN_MOBILE.is_match(&cleaned)
}

/// Membership check only; any status may follow any other
pub fn is_valid_booking_status(status: &str) -> bool {
    status.parse::<BookingStatus>().is_ok()
}

/// Validate an admin portfolio submission
pub fn validate_portfolio_data(data: &PortfolioFormData) -> ValidationResult {
    let mut errors = Vec::new();

    if is_blank(data.title.as_ref()) {
        errors.push(ValidationError::new("title", "Title is required"));
    }

    if is_blank(data.description.as_ref()) {
        errors.push(ValidationError::new(
            "description",
            "Description is required",
        ));
    }

    match data.category.as_deref() {
        None | Some("") => errors.push(ValidationError::new("category", "Category is required")),
        Some(category) if category.parse::<PortfolioCategory>().is_err() => {
            errors.push(ValidationError::new(
                "category",
                "Category must be Residential or Commercial",
            ))
        }
        Some(_) => {}
    }

    match data.style.as_deref() {
        None | Some("") => errors.push(ValidationError::new("style", "Style is required")),
        Some(style) if style.parse::<PortfolioStyle>().is_err() => {
            errors.push(ValidationError::new(
                "style",
                "Style must be Modern, Classic, Industrial, or Minimalist",
            ))
        }
        Some(_) => {}
    }

    if is_blank(data.location.as_ref()) {
        errors.push(ValidationError::new("location", "Location is required"));
    }

    ValidationResult::from_errors(errors)
}

/// Validate the fields a new social link must carry
pub fn validate_social_link(
    name: Option<&str>,
    platform: Option<&str>,
    url: Option<&str>,
) -> ValidationResult {
    let mut errors = Vec::new();

    if name.map_or(true, |n| n.trim().is_empty()) {
        errors.push(ValidationError::new("name", "Name is required"));
    }

    match platform {
        None | Some("") => errors.push(ValidationError::new("platform", "Platform is required")),
        Some(platform) if platform.parse::<SocialPlatform>().is_err() => {
            errors.push(ValidationError::new("platform", "Unknown platform"))
        }
        Some(_) => {}
    }

    match url {
        None | Some("") => errors.push(ValidationError::new("url", "URL is required")),
        Some(url) if url::Url::parse(url).is_err() => {
            errors.push(ValidationError::new("url", "Invalid URL format"))
        }
        Some(_) => {}
    }

    ValidationResult::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn valid_form() -> BookingFormData {
        BookingFormData {
            name: Some("Priya Sharma".to_string()),
            email: Some("priya@example.com".to_string()),
            phone: Some("+91 98765 43210".to_string()),
            location: Some("Mumbai".to_string()),
            project_type: Some("Residential".to_string()),
            area_size: Some("1000-2000 sq ft".to_string()),
            budget: Some("5-10 Lakhs".to_string()),
            appointment_date: Some("2024-06-01".to_string()),
            appointment_time: Some("11:00 AM".to_string()),
            message: None,
        }
    }

    #[test]
    fn test_valid_booking_has_no_errors() {
        let result = validate_booking_data(&valid_form());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[rstest]
    #[case("name")]
    #[case("email")]
    #[case("phone")]
    #[case("location")]
    #[case("projectType")]
    #[case("areaSize")]
    #[case("budget")]
    #[case("appointmentDate")]
    #[case("appointmentTime")]
    fn test_single_missing_field_reports_only_that_field(#[case] field: &str) {
        let mut form = valid_form();
        match field {
            "name" => form.name = None,
            "email" => form.email = None,
            "phone" => form.phone = None,
            "location" => form.location = None,
            "projectType" => form.project_type = None,
            "areaSize" => form.area_size = None,
            "budget" => form.budget = None,
            "appointmentDate" => form.appointment_date = None,
            "appointmentTime" => form.appointment_time = None,
            _ => unreachable!(),
        }

        let result = validate_booking_data(&form);
        assert!(!result.is_valid);
        assert_eq!(result.fields(), vec![field]);
    }

    #[test]
    fn test_whitespace_name_and_location_are_rejected() {
        let form = BookingFormData {
            name: Some("   ".to_string()),
            location: Some("\t".to_string()),
            ..valid_form()
        };
        let result = validate_booking_data(&form);
        assert_eq!(result.fields(), vec!["name", "location"]);
    }

    #[test]
    fn test_empty_form_reports_every_field_in_check_order() {
        let result = validate_booking_data(&BookingFormData::default());
        assert_eq!(
            result.fields(),
            vec![
                "name",
                "email",
                "phone",
                "location",
                "projectType",
                "areaSize",
                "budget",
                "appointmentDate",
                "appointmentTime",
            ]
        );
        assert_eq!(result.errors[0].message, "Name is required");
        assert_eq!(result.errors[1].message, "Valid email is required");
    }

    #[test]
    fn test_combined_failures_are_independent() {
        let form = BookingFormData {
            email: Some("not-an-email".to_string()),
            budget: Some(String::new()),
            ..valid_form()
        };
        let result = validate_booking_data(&form);
        assert_eq!(result.fields(), vec!["email", "budget"]);
    }

    #[rstest]
    #[case("+919876543210", true)]
    #[case("9876543210", true)]
    #[case("(987) 654-3210", true)]
    #[case("+91 6123 456 789", true)]
    #[case("12345", false)]
    #[case("+1234567890", false)]
    #[case("5876543210", false)]
    #[case("98765432101", false)]
    fn test_phone_validation(#[case] phone: &str, #[case] expected: bool) {
        assert_eq!(is_valid_phone(phone), expected);
    }

    #[rstest]
    #[case("a@b.co", true)]
    #[case("first.last@studio.in", true)]
    #[case("missing-at.com", false)]
    #[case("two@@example.com", false)]
    #[case("space @example.com", false)]
    #[case("nodot@example", false)]
    fn test_email_validation(#[case] email: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(email), expected);
    }

    #[test]
    fn test_booking_status_membership() {
        for status in ["Pending", "Confirmed", "Completed", "Cancelled"] {
            assert!(is_valid_booking_status(status));
        }
        assert!(!is_valid_booking_status("confirmed"));
        assert!(!is_valid_booking_status(""));
    }

    #[test]
    fn test_portfolio_validation_collects_all_missing_fields() {
        let result = validate_portfolio_data(&PortfolioFormData::default());
        assert_eq!(
            result.fields(),
            vec!["title", "description", "category", "style", "location"]
        );
    }

    #[test]
    fn test_portfolio_validation_rejects_unknown_enums() {
        let form = PortfolioFormData {
            title: Some("Loft".to_string()),
            description: Some("Open plan loft".to_string()),
            category: Some("Industrial".to_string()),
            style: Some("Baroque".to_string()),
            location: Some("Pune".to_string()),
            ..Default::default()
        };
        let result = validate_portfolio_data(&form);
        assert_eq!(result.fields(), vec!["category", "style"]);
    }

    #[test]
    fn test_social_link_validation() {
        let ok = validate_social_link(
            Some("Studio Instagram"),
            Some("Instagram"),
            Some("https://instagram.com/studio"),
        );
        assert!(ok.is_valid);

        let bad = validate_social_link(Some(" "), Some("MySpace"), Some("not a url"));
        assert_eq!(bad.fields(), vec!["name", "platform", "url"]);
        assert_eq!(bad.errors[2].message, "Invalid URL format");
    }
}
