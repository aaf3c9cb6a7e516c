pub mod booking;
pub mod booking_status;
pub mod doctor;
pub mod review;
pub mod role;
pub mod user;
