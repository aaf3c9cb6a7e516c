use crate::{AuthError, Claims, Result as AuthErrorResult};

use mb_core::Role;

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Authenticated identity resolved from a verified token.
///
/// Constructed per-request by the authenticator and attached to the request
/// extensions; never persisted or cached across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub subject: Uuid,
    pub role: Role,
    pub issued_at: i64,
    pub expires_at: i64,
}

impl TryFrom<Claims> for Identity {
    type Error = AuthError;

    #[track_caller]
    fn try_from(claims: Claims) -> AuthErrorResult<Self> {
        let subject = Uuid::parse_str(&claims.sub).map_err(|e| AuthError::InvalidClaim {
            claim: "sub".to_string(),
            message: format!("not a valid UUID: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(Self {
            subject,
            role: claims.role,
            issued_at: claims.iat,
            expires_at: claims.exp,
        })
    }
}
