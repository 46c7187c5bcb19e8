//! Driver-facing endpoints: assigned pickups and availability.

use axum::{
    extract::{Path, State},
    Extension, Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    Booking, Driver, SessionUser, UpdateAvailabilityRequest, UpdateStatusRequest,
};
use crate::AppState;

/// Resolve the roster id behind a driver principal. A driver account without
/// a roster link is a seeding mistake, not a client error.
fn roster_id(principal: &SessionUser) -> Result<&str, AppError> {
    principal
        .driver_id
        .as_deref()
        .ok_or_else(|| AppError::Internal("Driver account has no roster entry".to_string()))
}

/// GET /api/driver/pickups - Bookings assigned to the current driver.
pub async fn my_pickups(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionUser>,
) -> ApiResult<Vec<Booking>> {
    let driver_id = roster_id(&principal)?;
    success(state.bookings.for_driver(driver_id))
}

/// PUT /api/driver/pickups/{id}/status - Update the status of an assigned
/// pickup. Drivers can only touch bookings assigned to them.
pub async fn update_pickup_status(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionUser>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Booking> {
    let driver_id = roster_id(&principal)?;

    let booking = state
        .bookings
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))?;

    if booking.assigned_driver.as_deref() != Some(driver_id) {
        return Err(AppError::Forbidden(
            "This pickup is not assigned to you".to_string(),
        ));
    }

    match state.bookings.update_status(&id, request.status) {
        Some(updated) => {
            tracing::info!(booking = %id, status = request.status.as_str(), "driver status update");
            success(updated)
        }
        None => Err(AppError::NotFound(format!("Booking {} not found", id))),
    }
}

/// PUT /api/driver/availability - Toggle the driver's roster availability.
pub async fn set_availability(
    State(state): State<AppState>,
    Extension(principal): Extension<SessionUser>,
    Json(request): Json<UpdateAvailabilityRequest>,
) -> ApiResult<Driver> {
    let driver_id = roster_id(&principal)?;

    match state.drivers.set_status(driver_id, request.status) {
        Some(driver) => {
            tracing::info!(driver = %driver.id, status = request.status.as_str(), "availability updated");
            success(driver)
        }
        None => Err(AppError::NotFound(format!(
            "Driver {} not found on roster",
            driver_id
        ))),
    }
}
