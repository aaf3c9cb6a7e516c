pub mod error;
pub mod models;

pub use error::{CoreError, CoreResult};
pub use models::booking::Booking;
pub use models::booking_status::BookingStatus;
pub use models::doctor::Doctor;
pub use models::review::Review;
pub use models::role::Role;
pub use models::user::User;

#[cfg(test)]
mod tests;
