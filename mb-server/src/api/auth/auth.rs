//! Authentication REST API handlers
//!
//! Register creates an account; login verifies credentials and returns a
//! signed access token for the bearer-token middleware to accept.

use crate::state::AppState;
use crate::{ApiError, ApiResult, LoginRequest, RegisterRequest, TokenResponse, UserResponse};

use mb_core::{Role, User};

use std::str::FromStr;

use axum::{Json, extract::State};

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/auth/register
///
/// Create a new account. Admin accounts are provisioned out of band and can
/// never be self-registered.
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<Json<UserResponse>> {
    let email = req.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::validation("email is not valid", Some("email")));
    }
    if req.name.trim().is_empty() {
        return Err(ApiError::validation("name is required", Some("name")));
    }
    if req.password.len() < 8 {
        return Err(ApiError::validation(
            "password must be at least 8 characters",
            Some("password"),
        ));
    }

    let role = match req.role.as_deref() {
        None => Role::Patient,
        Some(value) => Role::from_str(value)?,
    };
    if role == Role::Admin {
        return Err(ApiError::validation(
            "role 'admin' cannot be self-assigned",
            Some("role"),
        ));
    }

    let user = User::new(email.to_string(), req.name.trim().to_string(), role);

    if !state.store.insert_user(user.clone(), &req.password) {
        return Err(ApiError::conflict(format!(
            "email {} is already registered",
            user.email
        )));
    }

    log::info!("Registered user {} with role '{}'", user.id, user.role);

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/v1/auth/login
///
/// Verify credentials and mint an access token. Unknown email and wrong
/// password produce the same 401.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<TokenResponse>> {
    let user = state
        .store
        .verify_credentials(req.email.trim(), &req.password)
        .ok_or_else(|| {
            log::warn!("Login failed for '{}'", req.email);
            ApiError::unauthenticated()
        })?;

    let token = state.issuer.issue(user.id, user.role)?;

    log::info!("Issued token for user {}", user.id);

    Ok(Json(TokenResponse {
        token,
        user: user.into(),
    }))
}
