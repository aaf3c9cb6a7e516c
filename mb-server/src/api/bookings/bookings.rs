//! Booking REST API handlers

use crate::state::AppState;
use crate::{ApiError, ApiResult, CheckoutSessionResponse, CurrentUser};

use mb_core::Booking;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/bookings/checkout-session/:doctor_id
///
/// Record a pending booking for the authenticated user. The price is
/// captured from the doctor profile at booking time.
pub async fn create_checkout_session(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
    Path(doctor_id): Path<String>,
) -> ApiResult<Json<CheckoutSessionResponse>> {
    let doctor_id = Uuid::parse_str(&doctor_id)?;

    let doctor = state
        .store
        .find_doctor(doctor_id)
        .ok_or_else(|| ApiError::not_found(format!("Doctor {} not found", doctor_id)))?;

    let booking = Booking::new(doctor.id, identity.subject, doctor.ticket_price);
    state.store.insert_booking(booking.clone());

    log::info!(
        "User {} opened checkout session {} for doctor {}",
        identity.subject,
        booking.id,
        doctor.id
    );

    Ok(Json(CheckoutSessionResponse {
        session_id: booking.id.to_string(),
        booking: booking.into(),
    }))
}
