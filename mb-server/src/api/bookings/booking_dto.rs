use mb_core::Booking;

use serde::Serialize;

/// Booking DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct BookingDto {
    pub id: String,
    pub doctor_id: String,
    pub user_id: String,
    pub ticket_price: u32,
    pub status: String,
    pub created_at: i64,
}

impl From<Booking> for BookingDto {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id.to_string(),
            doctor_id: b.doctor_id.to_string(),
            user_id: b.user_id.to_string(),
            ticket_price: b.ticket_price,
            status: b.status.to_string(),
            created_at: b.created_at.timestamp(),
        }
    }
}
