//! Public booking and tracking endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    timeline_for, Booking, CreateBookingRequest, DriverPublic, Service, TimelineStage,
};
use crate::store::seed;
use crate::AppState;

/// GET /api/services - The public service catalog.
pub async fn list_services() -> ApiResult<Vec<Service>> {
    success(seed::services())
}

/// POST /api/bookings - Submit a ride booking.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> ApiResult<Booking> {
    // Mirror the booking form's required fields
    let required = [
        ("passengerName", &request.passenger_name),
        ("contactPhone", &request.contact_phone),
        ("pickupLocation", &request.pickup_location),
        ("destination", &request.destination),
        ("pickupDateTime", &request.pickup_date_time),
        ("serviceType", &request.service_type),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} is required", field)));
        }
    }
    if request.passengers == 0 {
        return Err(AppError::Validation(
            "At least one passenger is required".to_string(),
        ));
    }

    let booking = state.bookings.add(&request)?;
    tracing::info!(ticket_id = %booking.ticket_id, "booking created");
    success(booking)
}

/// Tracking response: the booking, its timeline projection, and the assigned
/// driver's public details when the roster still knows the driver.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackResponse {
    pub booking: Booking,
    pub timeline: Vec<TimelineStage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<DriverPublic>,
}

/// GET /api/track/{ticketId} - Track a ride by ticket id (case-insensitive).
pub async fn track_ride(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> ApiResult<TrackResponse> {
    let booking = state
        .bookings
        .get_by_ticket(ticket_id.trim())
        .ok_or_else(|| AppError::NotFound(format!("No booking found for ticket {}", ticket_id)))?;

    let driver = booking
        .assigned_driver
        .as_deref()
        .and_then(|id| state.drivers.get(id))
        .map(|d| DriverPublic::from(&d));

    let timeline = timeline_for(booking.status);

    success(TrackResponse {
        booking,
        timeline,
        driver,
    })
}
