//! Review REST API handlers
//!
//! Reviews hang off a doctor profile. Reading is public; creating is a
//! patient-only route (wired in `routes.rs`).

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateReviewRequest, CurrentUser, ReviewDto, ReviewListResponse,
    ReviewResponse,
};

use mb_core::Review;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/doctors/:id/reviews
///
/// List all reviews for a doctor
pub async fn list_reviews(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReviewListResponse>> {
    let doctor_id = Uuid::parse_str(&id)?;

    if state.store.find_doctor(doctor_id).is_none() {
        return Err(ApiError::not_found(format!("Doctor {} not found", id)));
    }

    let reviews = state.store.list_reviews_for_doctor(doctor_id);

    Ok(Json(ReviewListResponse {
        reviews: reviews.into_iter().map(ReviewDto::from).collect(),
    }))
}

/// POST /api/v1/doctors/:id/reviews
///
/// Create a review as the authenticated patient
pub async fn create_review(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(id): Path<String>,
    Json(req): Json<CreateReviewRequest>,
) -> ApiResult<Json<ReviewResponse>> {
    let doctor_id = Uuid::parse_str(&id)?;

    if state.store.find_doctor(doctor_id).is_none() {
        return Err(ApiError::not_found(format!("Doctor {} not found", id)));
    }
    if req.comment.trim().is_empty() {
        return Err(ApiError::validation(
            "comment is required",
            Some("comment"),
        ));
    }

    let review = Review::new(
        doctor_id,
        identity.subject,
        req.rating,
        req.comment.trim().to_string(),
    );
    review.validate()?;

    state.store.insert_review(review.clone());

    log::info!(
        "User {} reviewed doctor {} ({} stars)",
        identity.subject,
        doctor_id,
        review.rating
    );

    Ok(Json(ReviewResponse {
        review: review.into(),
    }))
}
