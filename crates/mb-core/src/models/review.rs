//! Patient review left on a doctor profile.

use crate::{CoreError, CoreResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: Uuid,
    pub doctor_id: Uuid,
    pub user_id: Uuid,
    /// Star rating, 1 through 5
    pub rating: u8,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(doctor_id: Uuid, user_id: Uuid, rating: u8, comment: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            doctor_id,
            user_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }

    /// Validate invariants before the review is stored
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        if !(1..=5).contains(&self.rating) {
            return Err(CoreError::InvalidRating {
                value: self.rating,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
