//! Appointment booking tying a patient to a doctor.

use crate::BookingStatus;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub user_id: Uuid,
    /// Price captured at booking time so later profile edits do not change it
    pub ticket_price: u32,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Create a new pending booking
    pub fn new(doctor_id: Uuid, user_id: Uuid, ticket_price: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            user_id,
            ticket_price,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}
