use crate::CurrentUser;
use crate::state::AppState;

use mb_auth::Identity;
use mb_core::Role;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use uuid::Uuid;

fn create_test_state() -> AppState {
    AppState::with_secret(b"test-secret-key-at-least-32-bytes", 3600, "token")
}

fn test_identity(role: Role) -> Identity {
    let now = chrono::Utc::now().timestamp();
    Identity {
        subject: Uuid::new_v4(),
        role,
        issued_at: now,
        expires_at: now + 3600,
    }
}

#[tokio::test]
async fn test_extractor_returns_attached_identity() {
    let state = create_test_state();
    let identity = test_identity(Role::Patient);

    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(identity.clone());

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    let CurrentUser(extracted) = result.expect("extractor should succeed");
    assert_eq!(extracted, identity);
}

#[tokio::test]
async fn test_extractor_rejects_when_no_identity_attached() {
    let state = create_test_state();
    let request = Request::builder().body(Body::empty()).unwrap();

    let (mut parts, _body) = request.into_parts();
    let result = CurrentUser::from_request_parts(&mut parts, &state).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_extractor_preserves_role() {
    let state = create_test_state();

    let mut request = Request::builder().body(Body::empty()).unwrap();
    request.extensions_mut().insert(test_identity(Role::Admin));

    let (mut parts, _body) = request.into_parts();
    let CurrentUser(identity) = CurrentUser::from_request_parts(&mut parts, &state)
        .await
        .expect("extractor should succeed");

    assert_eq!(identity.role, Role::Admin);
}
