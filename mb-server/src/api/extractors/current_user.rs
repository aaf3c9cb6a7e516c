//! Axum extractors for REST API authentication

use crate::api::error::ApiError;
use crate::state::AppState;

use mb_auth::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Extracts the identity attached by the `authenticate` middleware.
///
/// Taking this as a handler argument makes the dependency on the
/// authenticator explicit: a route that skips the middleware rejects with
/// 401 here instead of reaching the handler with no acting user.
pub struct CurrentUser(pub Identity);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            match parts.extensions.get::<Identity>() {
                Some(identity) => Ok(CurrentUser(identity.clone())),
                None => {
                    log::error!("CurrentUser extractor used on a route without authenticate");
                    Err(ApiError::unauthenticated())
                }
            }
        }
    }
}
