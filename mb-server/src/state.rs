use crate::config::Config;
use crate::store::Store;

use mb_auth::{TokenIssuer, TokenVerifier};

use std::sync::Arc;

/// Shared application state for REST handlers and middleware.
///
/// The verifier, issuer, and secret behind them are built once at startup
/// and read-only afterwards; per-request data never lands here.
#[derive(Clone)]
pub struct AppState {
    pub verifier: Arc<TokenVerifier>,
    pub issuer: Arc<TokenIssuer>,
    pub store: Store,
    /// Cookie consulted when no Authorization header is present
    pub auth_cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self::with_secret(
            config.jwt_secret.as_bytes(),
            config.token_ttl_secs,
            &config.auth_cookie_name,
        )
    }

    /// Build state from raw parts; lets tests inject synthetic secrets
    pub fn with_secret(secret: &[u8], token_ttl_secs: i64, auth_cookie_name: &str) -> Self {
        Self {
            verifier: Arc::new(TokenVerifier::with_hs256(secret)),
            issuer: Arc::new(TokenIssuer::with_hs256(secret, token_ttl_secs)),
            store: Store::new(),
            auth_cookie_name: Arc::from(auth_cookie_name),
        }
    }
}
