#![allow(dead_code)]

//! Test infrastructure for mb-server API tests

use mb_core::{Doctor, Role, User};
use mb_server::state::AppState;

use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";
pub const COOKIE_NAME: &str = "token";

/// Create AppState for testing
pub fn create_test_app_state() -> AppState {
    AppState::with_secret(TEST_SECRET, 3600, COOKIE_NAME)
}

/// Create a test user in the store and return it
pub fn create_test_user(state: &AppState, email: &str, role: Role) -> User {
    let user = User::new(email.to_string(), "Test User".to_string(), role);
    assert!(
        state.store.insert_user(user.clone(), "password123"),
        "test user email already taken"
    );
    user
}

/// Create a test doctor profile in the store and return it
pub fn create_test_doctor(state: &AppState) -> Doctor {
    let doctor = Doctor::new("Dr. Test".to_string(), "cardiology".to_string(), 5000);
    state.store.insert_doctor(doctor.clone());
    doctor
}

/// Issue a token for an arbitrary subject and role
pub fn issue_token(state: &AppState, subject: Uuid, role: Role) -> String {
    state
        .issuer
        .issue(subject, role)
        .expect("failed to issue test token")
}

/// Issue a token for a stored user
pub fn token_for(state: &AppState, user: &User) -> String {
    issue_token(state, user.id, user.role)
}

/// Issue a token that expired one second ago
pub fn expired_token(subject: Uuid, role: Role) -> String {
    mb_auth::TokenIssuer::with_hs256(TEST_SECRET, -1)
        .issue(subject, role)
        .expect("failed to issue expired test token")
}
