use mb_core::Review;

use serde::Serialize;

/// Review DTO for JSON serialization
#[derive(Debug, Serialize)]
pub struct ReviewDto {
    pub id: String,
    pub doctor_id: String,
    pub user_id: String,
    pub rating: u8,
    pub comment: String,
    pub created_at: i64,
}

impl From<Review> for ReviewDto {
    fn from(r: Review) -> Self {
        Self {
            id: r.id.to_string(),
            doctor_id: r.doctor_id.to_string(),
            user_id: r.user_id.to_string(),
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at.timestamp(),
        }
    }
}
