use crate::ReviewDto;

use serde::Serialize;

/// List of reviews response
#[derive(Debug, Serialize)]
pub struct ReviewListResponse {
    pub reviews: Vec<ReviewDto>,
}
