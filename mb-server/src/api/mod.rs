pub mod auth;
pub mod bookings;
pub mod delete_response;
pub mod doctors;
pub mod error;
pub mod extractors;
pub mod reviews;
pub mod users;
