//! CEO admin endpoints: dispatch, roster, dashboard, analytics.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::analytics::{self, AnalyticsReport};
use crate::errors::AppError;
use crate::models::{
    AssignDriverRequest, Booking, BookingStatus, Driver, UpdateStatusRequest,
};
use crate::store::seed;
use crate::AppState;

/// Query parameters for the booking list.
#[derive(Debug, Deserialize)]
pub struct ListBookingsQuery {
    /// Optional status filter (kebab-case stage name)
    pub status: Option<String>,
}

/// GET /api/admin/bookings - All bookings, optionally filtered by status.
pub async fn list_bookings(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> ApiResult<Vec<Booking>> {
    let filter = match query.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(BookingStatus::from_str(s).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown booking status: {}", s))
        })?),
    };

    success(state.bookings.list(filter))
}

/// GET /api/admin/bookings/{id} - A single booking.
pub async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Booking> {
    match state.bookings.get(&id) {
        Some(booking) => success(booking),
        None => Err(AppError::NotFound(format!("Booking {} not found", id))),
    }
}

/// PUT /api/admin/bookings/{id}/status - Replace a booking's status.
pub async fn update_booking_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Booking> {
    match state.bookings.update_status(&id, request.status) {
        Some(booking) => {
            tracing::info!(booking = %id, status = request.status.as_str(), "status updated");
            success(booking)
        }
        None => Err(AppError::NotFound(format!("Booking {} not found", id))),
    }
}

/// PUT /api/admin/bookings/{id}/driver - Assign a driver to a booking.
pub async fn assign_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AssignDriverRequest>,
) -> ApiResult<Booking> {
    match state.bookings.assign_driver(&id, &request.driver_id) {
        Some(booking) => {
            tracing::info!(booking = %id, driver = %request.driver_id, "driver assigned");
            success(booking)
        }
        None => Err(AppError::NotFound(format!("Booking {} not found", id))),
    }
}

/// GET /api/admin/drivers - The fleet roster.
pub async fn list_drivers(State(state): State<AppState>) -> ApiResult<Vec<Driver>> {
    success(state.drivers.list())
}

/// GET /api/admin/drivers/{id} - A single roster entry.
pub async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Driver> {
    match state.drivers.get(&id) {
        Some(driver) => success(driver),
        None => Err(AppError::NotFound(format!("Driver {} not found", id))),
    }
}

/// Dashboard headline figures plus the most recent bookings.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub active_drivers: usize,
    pub scheduled_pickups: usize,
    pub completed_rides: usize,
    pub monthly_revenue: u64,
    pub recent_bookings: Vec<Booking>,
}

/// GET /api/admin/dashboard - Operations overview.
pub async fn dashboard(State(state): State<AppState>) -> ApiResult<DashboardResponse> {
    let bookings = state.bookings.list(None);
    let total = bookings.len();
    let completed = bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Completed)
        .count();

    let mut recent_bookings = bookings;
    recent_bookings.truncate(5);

    success(DashboardResponse {
        active_drivers: state.drivers.count_active(),
        scheduled_pickups: total - completed,
        completed_rides: completed,
        monthly_revenue: seed::MONTHLY_REVENUE_KES,
        recent_bookings,
    })
}

/// GET /api/admin/analytics - The full analytics report.
pub async fn get_analytics(State(state): State<AppState>) -> ApiResult<AnalyticsReport> {
    let bookings = state.bookings.list(None);
    let drivers = state.drivers.list();
    success(analytics::build_report(&bookings, &drivers))
}
