//! Data models for the TRL booking and dispatch application.

mod booking;
mod driver;
mod service;
mod user;

pub use booking::*;
pub use driver::*;
pub use service::*;
pub use user::*;
