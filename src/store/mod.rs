pub mod auth;
pub mod bookings;

pub use auth::{AuthStore, SignupForm, UserUpdate};
pub use bookings::BookingStore;
