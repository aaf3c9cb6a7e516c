//! Doctor REST API handlers
//!
//! Listing and profile reads are public; mutations sit behind the
//! `authenticate` middleware (wired in `routes.rs`).

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, CreateDoctorRequest, DeleteResponse, DoctorDto, DoctorListResponse,
    DoctorResponse, UpdateDoctorRequest,
};

use mb_core::Doctor;

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/doctors
///
/// List all doctors
pub async fn list_doctors(State(state): State<AppState>) -> ApiResult<Json<DoctorListResponse>> {
    let doctors = state.store.list_doctors();

    Ok(Json(DoctorListResponse {
        doctors: doctors.into_iter().map(DoctorDto::from).collect(),
    }))
}

/// GET /api/v1/doctors/:id
///
/// Get a single doctor by ID
pub async fn get_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DoctorResponse>> {
    let doctor_id = Uuid::parse_str(&id)?;

    let doctor = state
        .store
        .find_doctor(doctor_id)
        .ok_or_else(|| ApiError::not_found(format!("Doctor {} not found", id)))?;

    Ok(Json(DoctorResponse {
        doctor: doctor.into(),
    }))
}

/// POST /api/v1/doctors
///
/// Create a doctor profile
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(req): Json<CreateDoctorRequest>,
) -> ApiResult<Json<DoctorResponse>> {
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name is required", Some("name")));
    }
    if req.specialization.trim().is_empty() {
        return Err(ApiError::validation(
            "specialization is required",
            Some("specialization"),
        ));
    }

    let mut doctor = Doctor::new(
        req.name.trim().to_string(),
        req.specialization.trim().to_string(),
        req.ticket_price,
    );
    doctor.bio = req.bio;

    state.store.insert_doctor(doctor.clone());

    log::info!("Created doctor {}", doctor.id);

    Ok(Json(DoctorResponse {
        doctor: doctor.into(),
    }))
}

/// PUT /api/v1/doctors/:id
///
/// Update a doctor profile; absent fields are left unchanged
pub async fn update_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateDoctorRequest>,
) -> ApiResult<Json<DoctorResponse>> {
    let doctor_id = Uuid::parse_str(&id)?;

    if let Some(ref name) = req.name {
        if name.trim().is_empty() {
            return Err(ApiError::validation("name cannot be empty", Some("name")));
        }
    }

    let doctor = state
        .store
        .update_doctor(
            doctor_id,
            req.name,
            req.specialization,
            req.bio,
            req.ticket_price,
        )
        .ok_or_else(|| ApiError::not_found(format!("Doctor {} not found", id)))?;

    Ok(Json(DoctorResponse {
        doctor: doctor.into(),
    }))
}

/// DELETE /api/v1/doctors/:id
///
/// Remove a doctor profile
pub async fn delete_doctor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let doctor_id = Uuid::parse_str(&id)?;

    if !state.store.delete_doctor(doctor_id) {
        return Err(ApiError::not_found(format!("Doctor {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}
