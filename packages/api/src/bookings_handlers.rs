// ABOUTME: HTTP request handlers for consultation bookings
// ABOUTME: Public submission plus admin listing and status updates

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use atelier_core::{now_millis, validate_booking_data, Booking, BookingFormData, BookingStatus};

use crate::auth::AdminUser;
use crate::error::{ApiResult, AppError};
use crate::response::ApiResponse;
use crate::AppState;

/// POST /api/bookings
pub async fn create_booking(
    State(state): State<AppState>,
    payload: Result<Json<BookingFormData>, JsonRejection>,
) -> ApiResult<ApiResponse<Value>> {
    let Json(form) = payload?;

    let validation = validate_booking_data(&form);
    if !validation.is_valid {
        return Err(AppError::Validation(validation.errors));
    }

    let booking = Booking::from_form(form, now_millis());
    state
        .storage()?
        .bookings
        .add(&booking)
        .await
        .map_err(AppError::storage("Failed to save booking"))?;

    info!(booking_id = %booking.id, "Booking saved");
    Ok(ApiResponse::success(json!({ "bookingId": booking.id }))
        .with_message("Booking saved successfully"))
}

/// GET /api/bookings
pub async fn list_bookings(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> ApiResult<ApiResponse<Value>> {
    let bookings = state
        .storage()?
        .bookings
        .read()
        .await
        .map_err(AppError::storage("Failed to fetch bookings"))?;

    Ok(ApiResponse::success(json!({ "bookings": bookings })))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateStatusRequest {
    pub booking_id: Option<String>,
    pub status: Option<String>,
}

/// PATCH /api/bookings/update
pub async fn update_booking_status(
    _admin: AdminUser,
    State(state): State<AppState>,
    payload: Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> ApiResult<ApiResponse> {
    let Json(request) = payload?;

    let (Some(booking_id), Some(status)) = (
        request.booking_id.filter(|id| !id.is_empty()),
        request.status.filter(|status| !status.is_empty()),
    ) else {
        return Err(AppError::bad_request("Booking ID and status are required"));
    };

    let status: BookingStatus = status
        .parse()
        .map_err(|_| AppError::bad_request("Invalid status value"))?;

    let storage = state.storage()?;

    let existing = storage
        .bookings
        .find_by_id(&booking_id)
        .await
        .map_err(AppError::storage("Failed to update booking"))?;
    if existing.is_none() {
        return Err(AppError::not_found("Booking not found"));
    }

    let updated = storage
        .bookings
        .update_status(&booking_id, status)
        .await
        .map_err(AppError::storage("Failed to update booking"))?;
    if !updated {
        return Err(AppError::Internal("Failed to update booking".to_string()));
    }

    info!(booking_id = %booking_id, status = %status, "Booking status updated");
    Ok(ApiResponse::message("Booking status updated successfully"))
}
