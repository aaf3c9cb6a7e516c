//! Doctor profile listed publicly and bookable by patients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: Uuid,
    pub name: String,
    pub specialization: String,
    pub bio: Option<String>,
    /// Consultation price in the platform's smallest currency unit
    pub ticket_price: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Doctor {
    pub fn new(name: String, specialization: String, ticket_price: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            specialization,
            bio: None,
            ticket_price,
            created_at: now,
            updated_at: now,
        }
    }
}
