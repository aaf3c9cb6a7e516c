//! User REST API handlers
//!
//! All routes here sit behind the `authenticate` middleware; the role
//! restrictions are wired in `routes.rs` (list is admin-only, the rest are
//! patient routes).

use crate::state::AppState;
use crate::{
    ApiError, ApiResult, BookingDto, BookingListResponse, CurrentUser, DeleteResponse,
    UpdateUserRequest, UserDto, UserListResponse, UserResponse,
};

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/v1/users
///
/// List all users (admin only)
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<UserListResponse>> {
    let users = state.store.list_users();

    Ok(Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /api/v1/users/:id
///
/// Get a single user by ID
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    let user = state
        .store
        .find_user(user_id)
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /api/v1/users/:id
///
/// Update a user's display name
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name cannot be empty", Some("name")));
    }

    let user = state
        .store
        .update_user_name(user_id, req.name.trim().to_string())
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", id)))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// DELETE /api/v1/users/:id
///
/// Delete a user and their credentials
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let user_id = Uuid::parse_str(&id)?;

    if !state.store.delete_user(user_id) {
        return Err(ApiError::not_found(format!("User {} not found", id)));
    }

    Ok(Json(DeleteResponse { deleted: true }))
}

/// GET /api/v1/users/profile/me
///
/// Profile of the authenticated user
pub async fn get_profile(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> ApiResult<Json<UserResponse>> {
    let user = state
        .store
        .find_user(identity.subject)
        .ok_or_else(|| ApiError::not_found("Account no longer exists"))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// GET /api/v1/users/appointments/my-appointments
///
/// Bookings made by the authenticated user
pub async fn get_my_appointments(
    State(state): State<AppState>,
    CurrentUser(identity): CurrentUser,
) -> ApiResult<Json<BookingListResponse>> {
    let bookings = state.store.list_bookings_for_user(identity.subject);

    Ok(Json(BookingListResponse {
        bookings: bookings.into_iter().map(BookingDto::from).collect(),
    }))
}
