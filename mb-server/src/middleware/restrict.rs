use crate::api::error::ApiError;

use mb_auth::Identity;
use mb_core::Role;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use log::{error, warn};

/// Allow the request through only when the authenticated role is in
/// `allowed`.
///
/// The role set is fixed at route-registration time. This gate must run
/// after `authenticate`; a request that reaches it without an identity means
/// the route is miswired, which is logged and fails closed as a 401.
pub async fn restrict(
    allowed: &'static [Role],
    req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(identity) = req.extensions().get::<Identity>() else {
        error!("restrict() reached without an identity; authenticate is missing on this route");
        return Err(ApiError::unauthenticated());
    };

    if !allowed.contains(&identity.role) {
        warn!(
            "Rejecting role '{}' for {} (allowed: {:?})",
            identity.role,
            req.uri().path(),
            allowed
        );
        return Err(ApiError::forbidden());
    }

    Ok(next.run(req).await)
}
