// ABOUTME: Shared fixtures and backend-agnostic checks for storage integration tests
// ABOUTME: Each check runs against whichever StorageAdapter the caller builds

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use pretty_assertions::assert_eq;

use atelier_core::utils::parse_timestamp;
use atelier_core::{
    Booking, BookingStatus, CustomPortfolio, PortfolioCategory, PortfolioStyle, SocialMediaLink,
    SocialPlatform,
};
use atelier_storage::{StorageAdapter, StorageError};

pub fn at(rfc3339: &str) -> DateTime<Utc> {
    parse_timestamp(rfc3339).expect("valid test timestamp")
}

pub fn booking(id: &str, timestamp: DateTime<Utc>) -> Booking {
    Booking {
        id: id.to_string(),
        timestamp,
        name: "Asha Verma".to_string(),
        email: "asha@example.com".to_string(),
        phone: "+919876543210".to_string(),
        location: "Bengaluru".to_string(),
        project_type: "Residential".to_string(),
        area_size: "1000-1500 sq ft".to_string(),
        budget: "10-15 Lakhs".to_string(),
        appointment_date: "2024-05-20".to_string(),
        appointment_time: "11:00 AM".to_string(),
        message: "Open-plan kitchen please".to_string(),
        status: BookingStatus::Pending,
    }
}

pub fn portfolio(id: &str, created_at: DateTime<Utc>) -> CustomPortfolio {
    CustomPortfolio {
        id: id.to_string(),
        slug: format!("lake-view-villa-{}", created_at.timestamp_millis()),
        title: "Lake View Villa".to_string(),
        description: "A calm weekend home".to_string(),
        category: PortfolioCategory::Residential,
        style: PortfolioStyle::Minimalist,
        location: "Udaipur".to_string(),
        area_size: Some("4200 sq ft".to_string()),
        year: "2023".to_string(),
        image_url: None,
        materials: "Teak, Lime plaster".to_string(),
        challenges: String::new(),
        impact: String::new(),
        created_at: Some(created_at),
    }
}

pub fn social_link(id: &str, platform: SocialPlatform, order: f64, enabled: bool) -> SocialMediaLink {
    let created = at("2024-01-01T00:00:00.000Z");
    SocialMediaLink {
        id: id.to_string(),
        name: platform.to_string(),
        platform,
        url: format!("https://example.com/{}", id),
        icon: None,
        enabled,
        order,
        created_at: created,
        updated_at: created + Duration::minutes(5),
    }
}

pub async fn check_empty_store_reads_empty(storage: &StorageAdapter) {
    assert!(storage.bookings.read().await.unwrap().is_empty());
    assert!(storage.portfolios.get_all().await.unwrap().is_empty());
    assert!(storage.social_media.get().await.unwrap().is_empty());
}

pub async fn check_booking_round_trip(storage: &StorageAdapter) {
    let stored = booking("BK1715329800000", at("2024-05-10T08:30:00.123Z"));
    storage.bookings.add(&stored).await.unwrap();

    let found = storage.bookings.find_by_id("BK1715329800000").await.unwrap();
    assert_eq!(found, Some(stored));
    assert_eq!(storage.bookings.find_by_id("BK0").await.unwrap(), None);
}

pub async fn check_bookings_newest_first(storage: &StorageAdapter) {
    storage
        .bookings
        .add(&booking("BK-old", at("2024-01-01T10:00:00.000Z")))
        .await
        .unwrap();
    storage
        .bookings
        .add(&booking("BK-new", at("2024-06-01T10:00:00.000Z")))
        .await
        .unwrap();
    storage
        .bookings
        .add(&booking("BK-mid", at("2024-03-01T10:00:00.000Z")))
        .await
        .unwrap();

    let ids: Vec<String> = storage
        .bookings
        .read()
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(ids, vec!["BK-new", "BK-mid", "BK-old"]);
}

pub async fn check_update_status(storage: &StorageAdapter) {
    storage
        .bookings
        .add(&booking("BK42", at("2024-05-10T08:30:00.000Z")))
        .await
        .unwrap();

    assert!(storage
        .bookings
        .update_status("BK42", BookingStatus::Confirmed)
        .await
        .unwrap());
    assert!(!storage
        .bookings
        .update_status("BK-missing", BookingStatus::Cancelled)
        .await
        .unwrap());

    let updated = storage.bookings.find_by_id("BK42").await.unwrap().unwrap();
    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(updated.name, "Asha Verma");
}

pub async fn check_portfolio_add_and_get(storage: &StorageAdapter) {
    let entry = portfolio("custom-1709287200000", at("2024-03-01T10:00:00.000Z"));
    storage.portfolios.add(&entry).await.unwrap();

    let all = storage.portfolios.get_all().await.unwrap();
    assert_eq!(all, vec![entry]);
}

pub async fn check_social_full_replace(storage: &StorageAdapter) {
    let links = vec![
        social_link("sm_1", SocialPlatform::Instagram, 1.0, true),
        social_link("sm_2", SocialPlatform::WhatsApp, 0.5, false),
    ];
    storage.social_media.update(&links).await.unwrap();

    let mut stored = storage.social_media.get().await.unwrap();
    atelier_core::sort_by_order(&mut stored);
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].id, "sm_2");
    assert!(!stored[0].enabled);
    assert_eq!(stored[1], links[0]);

    storage
        .social_media
        .update(&links[..1])
        .await
        .unwrap();
    assert_eq!(storage.social_media.get().await.unwrap(), vec![links[0].clone()]);

    storage.social_media.update(&[]).await.unwrap();
    assert!(storage.social_media.get().await.unwrap().is_empty());
}

pub async fn check_duplicate_keys_rejected(storage: &StorageAdapter) {
    let first = booking("BK1715329800000", at("2024-05-10T08:30:00.000Z"));
    storage.bookings.add(&first).await.unwrap();

    let mut clash = booking("BK1715329800000", at("2024-05-10T08:30:00.000Z"));
    clash.name = "Second Visitor".to_string();
    let result = storage.bookings.add(&clash).await;
    assert!(matches!(result, Err(StorageError::Duplicate(_))));

    let bookings = storage.bookings.read().await.unwrap();
    assert_eq!(bookings, vec![first]);

    let entry = portfolio("custom-1", at("2024-03-01T10:00:00.000Z"));
    storage.portfolios.add(&entry).await.unwrap();

    let same_id = portfolio("custom-1", at("2024-04-01T10:00:00.000Z"));
    let result = storage.portfolios.add(&same_id).await;
    assert!(matches!(result, Err(StorageError::Duplicate(_))));

    let mut same_slug = portfolio("custom-2", at("2024-04-01T10:00:00.000Z"));
    same_slug.slug = entry.slug.clone();
    let result = storage.portfolios.add(&same_slug).await;
    assert!(matches!(result, Err(StorageError::Duplicate(_))));

    assert_eq!(storage.portfolios.get_all().await.unwrap(), vec![entry]);

    let original = vec![social_link("sm_1", SocialPlatform::Instagram, 1.0, true)];
    storage.social_media.update(&original).await.unwrap();

    let repeated = social_link("sm_dup", SocialPlatform::Facebook, 2.0, true);
    let result = storage
        .social_media
        .update(&[repeated.clone(), repeated])
        .await;
    assert!(matches!(result, Err(StorageError::Duplicate(_))));
    assert_eq!(storage.social_media.get().await.unwrap(), original);
}
