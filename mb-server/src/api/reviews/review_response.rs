use crate::ReviewDto;

use serde::Serialize;

/// Single review response
#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub review: ReviewDto,
}
