use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid role: {value} {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid booking status: {value} {location}")]
    InvalidBookingStatus {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid rating: {value} (expected 1-5) {location}")]
    InvalidRating { value: u8, location: ErrorLocation },
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
