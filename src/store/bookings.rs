//! Booking store: the single owner and mutation point of the booking
//! collection.

use std::collections::HashSet;
use std::sync::RwLock;

use chrono::Utc;

use super::{read_lock, ticket, write_lock};
use crate::errors::AppError;
use crate::models::{Booking, BookingStatus, CreateBookingRequest};

/// In-memory booking collection, most-recent-first.
pub struct BookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self {
            bookings: RwLock::new(seed),
        }
    }

    /// Snapshot of all bookings, optionally filtered by status.
    pub fn list(&self, status: Option<BookingStatus>) -> Vec<Booking> {
        let bookings = read_lock(&self.bookings);
        match status {
            Some(s) => bookings.iter().filter(|b| b.status == s).cloned().collect(),
            None => bookings.clone(),
        }
    }

    pub fn get(&self, id: &str) -> Option<Booking> {
        read_lock(&self.bookings).iter().find(|b| b.id == id).cloned()
    }

    /// Case-insensitive ticket lookup. First match wins.
    pub fn get_by_ticket(&self, ticket_id: &str) -> Option<Booking> {
        let needle = ticket_id.to_lowercase();
        read_lock(&self.bookings)
            .iter()
            .find(|b| b.ticket_id.to_lowercase() == needle)
            .cloned()
    }

    /// Bookings assigned to the given driver.
    pub fn for_driver(&self, driver_id: &str) -> Vec<Booking> {
        read_lock(&self.bookings)
            .iter()
            .filter(|b| b.assigned_driver.as_deref() == Some(driver_id))
            .cloned()
            .collect()
    }

    /// Create a booking from the public form. Generates a unique ticket id,
    /// fixes the status to `confirmed`, stamps creation time, and prepends
    /// the record.
    pub fn add(&self, request: &CreateBookingRequest) -> Result<Booking, AppError> {
        let mut bookings = write_lock(&self.bookings);

        let existing: HashSet<String> = bookings
            .iter()
            .map(|b| b.ticket_id.to_lowercase())
            .collect();
        let ticket_id = ticket::generate(&existing)?;

        let booking = Booking {
            id: uuid::Uuid::new_v4().to_string(),
            ticket_id,
            passenger_name: request.passenger_name.clone(),
            contact_phone: request.contact_phone.clone(),
            pickup_location: request.pickup_location.clone(),
            destination: request.destination.clone(),
            pickup_date_time: request.pickup_date_time.clone(),
            passengers: request.passengers,
            service_type: request.service_type.clone(),
            notes: request.notes.clone(),
            status: BookingStatus::Confirmed,
            assigned_driver: None,
            created_at: Utc::now().to_rfc3339(),
        };

        bookings.insert(0, booking.clone());
        Ok(booking)
    }

    /// Replace the status of a booking. Any status is accepted from any
    /// status; the six stages order a timeline, they do not gate each other.
    /// Returns None if the booking does not exist.
    pub fn update_status(&self, id: &str, status: BookingStatus) -> Option<Booking> {
        let mut bookings = write_lock(&self.bookings);
        let booking = bookings.iter_mut().find(|b| b.id == id)?;
        booking.status = status;
        Some(booking.clone())
    }

    /// Assign a driver to a booking. The driver id is stored as given; the
    /// roster is not consulted, so dispatch can point at a driver that has
    /// since left the roster. Returns None if the booking does not exist.
    pub fn assign_driver(&self, id: &str, driver_id: &str) -> Option<Booking> {
        let mut bookings = write_lock(&self.bookings);
        let booking = bookings.iter_mut().find(|b| b.id == id)?;
        booking.assigned_driver = Some(driver_id.to_string());
        Some(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed;

    fn request(name: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            passenger_name: name.to_string(),
            contact_phone: "0700000000".to_string(),
            pickup_location: "Westlands, Nairobi".to_string(),
            destination: "JKIA Terminal 1".to_string(),
            pickup_date_time: "2024-02-01T08:00:00".to_string(),
            passengers: 2,
            service_type: "Airport Transfers".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_add_prepends_and_confirms() {
        let store = BookingStore::new(seed::bookings());
        let before = store.list(None).len();

        let booking = store.add(&request("Test Passenger")).unwrap();

        let all = store.list(None);
        assert_eq!(all.len(), before + 1);
        assert_eq!(all[0].id, booking.id);
        assert_eq!(all[0].status, BookingStatus::Confirmed);
        assert!(all[0].assigned_driver.is_none());
    }

    #[test]
    fn test_ticket_lookup_is_case_insensitive() {
        let store = BookingStore::new(seed::bookings());
        let found = store.get_by_ticket("trl-2024-001").unwrap();
        assert_eq!(found.ticket_id, "TRL-2024-001");
        assert_eq!(found.passenger_name, "Sarah Njoki");
    }

    #[test]
    fn test_ticket_lookup_unknown() {
        let store = BookingStore::new(seed::bookings());
        assert!(store.get_by_ticket("TRL-2024-999").is_none());
    }

    #[test]
    fn test_update_status_accepts_any_transition() {
        let store = BookingStore::new(seed::bookings());
        // b5 is seeded as completed; a reversal must not be rejected.
        let updated = store.update_status("b5", BookingStatus::Confirmed).unwrap();
        assert_eq!(updated.status, BookingStatus::Confirmed);

        let updated = store.update_status("b5", BookingStatus::Completed).unwrap();
        assert_eq!(updated.status, BookingStatus::Completed);
    }

    #[test]
    fn test_update_status_unknown_is_noop() {
        let store = BookingStore::new(seed::bookings());
        assert!(store.update_status("nope", BookingStatus::Waiting).is_none());
        assert_eq!(store.list(None).len(), seed::bookings().len());
    }

    #[test]
    fn test_assign_driver_does_not_validate_roster() {
        let store = BookingStore::new(seed::bookings());
        let updated = store.assign_driver("b1", "d999").unwrap();
        assert_eq!(updated.assigned_driver.as_deref(), Some("d999"));
    }

    #[test]
    fn test_assign_driver_unknown_booking_is_noop() {
        let store = BookingStore::new(seed::bookings());
        assert!(store.assign_driver("nope", "d1").is_none());
    }

    #[test]
    fn test_for_driver_scopes_to_assignment() {
        let store = BookingStore::new(seed::bookings());
        let mine = store.for_driver("d1");
        assert!(!mine.is_empty());
        assert!(mine.iter().all(|b| b.assigned_driver.as_deref() == Some("d1")));
    }

    #[test]
    fn test_tickets_stay_unique() {
        let store = BookingStore::new(seed::bookings());
        for i in 0..200 {
            store.add(&request(&format!("P{}", i))).unwrap();
        }
        let all = store.list(None);
        let unique: HashSet<String> =
            all.iter().map(|b| b.ticket_id.to_lowercase()).collect();
        assert_eq!(unique.len(), all.len());
    }
}
