use mb_core::Doctor;

use serde::Serialize;

/// Doctor DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct DoctorDto {
    pub id: String,
    pub name: String,
    pub specialization: String,
    pub bio: Option<String>,
    pub ticket_price: u32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Doctor> for DoctorDto {
    fn from(d: Doctor) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name,
            specialization: d.specialization,
            bio: d.bio,
            ticket_price: d.ticket_price,
            created_at: d.created_at.timestamp(),
            updated_at: d.updated_at.timestamp(),
        }
    }
}
