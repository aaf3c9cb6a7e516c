use crate::api::error::ApiError;
use crate::state::AppState;

use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::Response,
};
use log::warn;

/// Authenticate every request passing through this layer.
///
/// Looks for a token in the `Authorization: Bearer` header first, then in
/// the configured cookie. On success the resolved identity is attached to
/// the request extensions for the restrictor and handlers downstream. Every
/// failure is the same generic 401 so clients cannot probe which check
/// rejected them; the specific cause is only logged.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(token) = extract_token(req.headers(), &state.auth_cookie_name) else {
        warn!("Rejecting request without bearer token");
        return Err(ApiError::unauthenticated());
    };

    let identity = match state.verifier.verify(&token) {
        Ok(identity) => identity,
        Err(e) => {
            warn!("Token verification failed: {} [{}]", e, e.error_code());
            return Err(ApiError::unauthenticated());
        }
    };

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}

/// Locate the candidate token.
///
/// The Authorization header takes precedence over the cookie when both are
/// present; a header without the Bearer scheme is ignored rather than
/// shadowing a usable cookie.
pub(crate) fn extract_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    if let Some(value) = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
    {
        match value.strip_prefix("Bearer ") {
            Some(token) if !token.trim().is_empty() => return Some(token.trim().to_string()),
            _ => warn!("Ignoring authorization header without 'Bearer' scheme"),
        }
    }

    cookie_token(headers, cookie_name)
}

fn cookie_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;

    raw.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name && !value.is_empty()).then(|| value.to_string())
    })
}
