//! In-memory stores owning all application state.
//!
//! Each collection has exactly one owning store and is mutated only through
//! that store's methods. State is seeded at startup and lives for the
//! lifetime of the process.

mod bookings;
mod drivers;
mod identity;
pub mod seed;
mod ticket;

pub use bookings::BookingStore;
pub use drivers::DriverStore;
pub use identity::IdentityStore;

use std::sync::RwLock;

/// Read a lock, recovering the inner data if a writer panicked. The stores
/// never leave a collection half-mutated, so the data is still consistent.
fn read_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| e.into_inner())
}

/// Write counterpart of [`read_lock`].
fn write_lock<T>(lock: &RwLock<T>) -> std::sync::RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| e.into_inner())
}
