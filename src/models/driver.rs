//! Driver roster model.

use serde::{Deserialize, Serialize};

/// Availability of a driver for new assignments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DriverStatus {
    Active,
    Off,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::Off => "off",
        }
    }
}

/// A driver on the fleet roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub id_number: String,
    pub car_model: String,
    pub vehicle_reg: String,
    pub enrollment_date: String,
    pub completed_trips: u32,
    pub status: DriverStatus,
}

/// Driver details exposed on public tracking responses. Omits roster
/// internals (national id, enrollment, trip counts).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverPublic {
    pub name: String,
    pub phone: String,
    pub car_model: String,
    pub vehicle_reg: String,
}

impl From<&Driver> for DriverPublic {
    fn from(driver: &Driver) -> Self {
        Self {
            name: driver.name.clone(),
            phone: driver.phone.clone(),
            car_model: driver.car_model.clone(),
            vehicle_reg: driver.vehicle_reg.clone(),
        }
    }
}

/// Request body for the driver availability toggle.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAvailabilityRequest {
    pub status: DriverStatus,
}
