//! Integration tests for user API handlers
mod common;

use crate::common::{create_test_app_state, create_test_user, token_for};

use mb_core::Role;
use mb_server::routes::build_router;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_list_users_as_admin() {
    let state = create_test_app_state();
    let admin = create_test_user(&state, "admin@test.local", Role::Admin);
    create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &admin);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["users"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_users_as_patient_is_403() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_get_user_requires_token() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/users/{}", patient.id))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_get_user_as_patient() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/v1/users/{}", patient.id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], patient.id.to_string());
    assert_eq!(json["user"]["email"], "jane@test.local");
}

#[tokio::test]
async fn test_update_user_name() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/v1/users/{}", patient.id))
        .header("Authorization", format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"name": "Jane Renamed"}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["name"], "Jane Renamed");
    // Email is immutable
    assert_eq!(json["user"]["email"], "jane@test.local");
}

#[tokio::test]
async fn test_update_user_empty_name_is_400() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("PUT")
        .uri(format!("/api/v1/users/{}", patient.id))
        .header("Authorization", format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({"name": "   "}).to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_user_frees_email_for_login_denial() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state.clone());

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/v1/users/{}", patient.id))
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Credentials are gone with the account
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/auth/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({"email": "jane@test.local", "password": "password123"}).to_string(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_me_returns_own_account() {
    let state = create_test_app_state();
    create_test_user(&state, "other@test.local", Role::Patient);
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users/profile/me")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["user"]["id"], patient.id.to_string());
}

#[tokio::test]
async fn test_profile_me_as_admin_is_403() {
    let state = create_test_app_state();
    let admin = create_test_user(&state, "admin@test.local", Role::Admin);
    let token = token_for(&state, &admin);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users/profile/me")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_my_appointments_empty() {
    let state = create_test_app_state();
    let patient = create_test_user(&state, "jane@test.local", Role::Patient);
    let token = token_for(&state, &patient);
    let app = build_router(state);

    let request = Request::builder()
        .method("GET")
        .uri("/api/v1/users/appointments/my-appointments")
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["bookings"].as_array().unwrap().len(), 0);
}
