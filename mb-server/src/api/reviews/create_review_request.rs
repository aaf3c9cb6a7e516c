use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReviewRequest {
    /// Star rating, 1 through 5 (required)
    pub rating: u8,

    /// Feedback text (required)
    pub comment: String,
}
