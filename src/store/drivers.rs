//! Driver roster store.

use std::sync::RwLock;

use super::{read_lock, write_lock};
use crate::models::{Driver, DriverStatus};

/// Owner of the fleet roster.
pub struct DriverStore {
    drivers: RwLock<Vec<Driver>>,
}

impl DriverStore {
    pub fn new(seed: Vec<Driver>) -> Self {
        Self {
            drivers: RwLock::new(seed),
        }
    }

    pub fn list(&self) -> Vec<Driver> {
        read_lock(&self.drivers).clone()
    }

    pub fn get(&self, id: &str) -> Option<Driver> {
        read_lock(&self.drivers).iter().find(|d| d.id == id).cloned()
    }

    pub fn count_active(&self) -> usize {
        read_lock(&self.drivers)
            .iter()
            .filter(|d| d.status == DriverStatus::Active)
            .count()
    }

    /// Set a driver's availability. Returns None if the driver is unknown.
    pub fn set_status(&self, id: &str, status: DriverStatus) -> Option<Driver> {
        let mut drivers = write_lock(&self.drivers);
        let driver = drivers.iter_mut().find(|d| d.id == id)?;
        driver.status = status;
        Some(driver.clone())
    }
}
