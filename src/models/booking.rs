//! Booking model and the ride-status stage machinery.

use serde::{Deserialize, Serialize};

/// Lifecycle stage of a booking, in timeline order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum BookingStatus {
    Confirmed,
    DriverOnWay,
    Waiting,
    Picked,
    EnRoute,
    Completed,
}

impl BookingStatus {
    /// All stages in timeline order. The position of a status in this list
    /// drives the tracking timeline projection.
    pub const ALL: [BookingStatus; 6] = [
        BookingStatus::Confirmed,
        BookingStatus::DriverOnWay,
        BookingStatus::Waiting,
        BookingStatus::Picked,
        BookingStatus::EnRoute,
        BookingStatus::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::DriverOnWay => "driver-on-way",
            BookingStatus::Waiting => "waiting",
            BookingStatus::Picked => "picked",
            BookingStatus::EnRoute => "en-route",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "confirmed" => Some(BookingStatus::Confirmed),
            "driver-on-way" => Some(BookingStatus::DriverOnWay),
            "waiting" => Some(BookingStatus::Waiting),
            "picked" => Some(BookingStatus::Picked),
            "en-route" => Some(BookingStatus::EnRoute),
            "completed" => Some(BookingStatus::Completed),
            _ => None,
        }
    }

    /// Position of this status in the timeline.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Human-facing label for the tracking timeline.
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Booking Confirmed",
            BookingStatus::DriverOnWay => "Driver on the Way",
            BookingStatus::Waiting => "Waiting for Passengers",
            BookingStatus::Picked => "Passengers Picked",
            BookingStatus::EnRoute => "En Route",
            BookingStatus::Completed => "Journey Completed",
        }
    }

    /// Human-facing description for the tracking timeline.
    pub fn description(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "Your ride has been confirmed",
            BookingStatus::DriverOnWay => "Driver is heading to pickup location",
            BookingStatus::Waiting => "Driver has arrived and is waiting",
            BookingStatus::Picked => "All passengers have boarded",
            BookingStatus::EnRoute => "Journey in progress",
            BookingStatus::Completed => "You have arrived at your destination",
        }
    }
}

/// A ride request, from submission through completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub ticket_id: String,
    pub passenger_name: String,
    pub contact_phone: String,
    pub pickup_location: String,
    pub destination: String,
    /// Requested pickup time, RFC 3339 / ISO 8601 local string.
    pub pickup_date_time: String,
    pub passengers: u32,
    pub service_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub status: BookingStatus,
    /// Driver id from the roster. Set by dispatch; not validated against the
    /// roster (assignment to a since-removed driver must not be rejected).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_driver: Option<String>,
    pub created_at: String,
}

/// Request body for creating a new booking (public form).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub passenger_name: String,
    pub contact_phone: String,
    pub pickup_location: String,
    pub destination: String,
    pub pickup_date_time: String,
    pub passengers: u32,
    pub service_type: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request body for replacing a booking's status.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub status: BookingStatus,
}

/// Request body for assigning a driver to a booking.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignDriverRequest {
    pub driver_id: String,
}

/// One stage of the tracking timeline, projected against a booking's
/// current status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineStage {
    pub key: String,
    pub label: String,
    pub description: String,
    pub state: StageState,
}

/// Rendering state of a timeline stage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StageState {
    Completed,
    Current,
    Pending,
}

/// Project the six-stage timeline against a booking's current status.
/// Stages before the current one are completed, the matching one is
/// current, later ones are pending.
pub fn timeline_for(status: BookingStatus) -> Vec<TimelineStage> {
    let current = status.index();
    BookingStatus::ALL
        .iter()
        .enumerate()
        .map(|(i, stage)| TimelineStage {
            key: stage.as_str().to_string(),
            label: stage.label().to_string(),
            description: stage.description().to_string(),
            state: if i < current {
                StageState::Completed
            } else if i == current {
                StageState::Current
            } else {
                StageState::Pending
            },
        })
        .collect()
}
