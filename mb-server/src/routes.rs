//! Router assembly.
//!
//! Gate ordering per route: `authenticate` is attached as the outer route
//! layer of each protected router, so it always runs before any `restrict`
//! layer attached to an individual method router.

use crate::health;
use crate::middleware::{authenticate, restrict};
use crate::state::AppState;
use crate::{
    create_checkout_session, create_doctor, create_review, delete_doctor, delete_user, get_doctor,
    get_my_appointments, get_profile, get_user, list_doctors, list_reviews, list_users, login,
    register, update_doctor, update_user,
};

use mb_core::Role;

use axum::{
    Router,
    body::Body,
    http::Request,
    middleware::{self, Next},
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

const PATIENT_ONLY: &[Role] = &[Role::Patient];
const ADMIN_ONLY: &[Role] = &[Role::Admin];

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", api_router(state))
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // CORS middleware (allow all origins)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(auth_routes())
        .merge(doctor_routes(state.clone()))
        .merge(user_routes(state.clone()))
        .merge(booking_routes(state.clone()))
        .with_state(state)
}

/// Public registration and login
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Doctor profiles and their reviews.
///
/// Reads are public; mutations require authentication, and review creation
/// is additionally restricted to patients.
fn doctor_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/doctors", get(list_doctors))
        .route("/doctors/{id}", get(get_doctor))
        .route("/doctors/{id}/reviews", get(list_reviews));

    let protected = Router::new()
        .route("/doctors", post(create_doctor))
        .route("/doctors/{id}", put(update_doctor).delete(delete_doctor))
        .route(
            "/doctors/{id}/reviews",
            post(create_review).route_layer(middleware::from_fn(
                |req: Request<Body>, next: Next| restrict(PATIENT_ONLY, req, next),
            )),
        )
        .route_layer(middleware::from_fn_with_state(state, authenticate));

    public.merge(protected)
}

/// User management; list is admin-only, the rest are patient routes
fn user_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users).route_layer(middleware::from_fn(
                |req: Request<Body>, next: Next| restrict(ADMIN_ONLY, req, next),
            )),
        )
        .route(
            "/users/profile/me",
            get(get_profile).route_layer(middleware::from_fn(
                |req: Request<Body>, next: Next| restrict(PATIENT_ONLY, req, next),
            )),
        )
        .route(
            "/users/appointments/my-appointments",
            get(get_my_appointments).route_layer(middleware::from_fn(
                |req: Request<Body>, next: Next| restrict(PATIENT_ONLY, req, next),
            )),
        )
        .route(
            "/users/{id}",
            get(get_user)
                .put(update_user)
                .delete(delete_user)
                .route_layer(middleware::from_fn(|req: Request<Body>, next: Next| {
                    restrict(PATIENT_ONLY, req, next)
                })),
        )
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}

/// Checkout sessions; any authenticated role may book
fn booking_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/bookings/checkout-session/{doctor_id}",
            post(create_checkout_session),
        )
        .route_layer(middleware::from_fn_with_state(state, authenticate))
}
