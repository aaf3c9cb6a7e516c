use mb_core::Role;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Missing bearer token {location}")]
    MissingToken { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Token expired {location}")]
    TokenExpired { location: ErrorLocation },

    #[error("JWT decode failed: {source} {location}")]
    JwtDecode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("JWT encode failed: {source} {location}")]
    JwtEncode {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Invalid claim '{claim}': {message} {location}")]
    InvalidClaim {
        claim: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Role '{role}' is not permitted on this route {location}")]
    RoleNotAllowed { role: Role, location: ErrorLocation },

    #[error("No identity attached to the request {location}")]
    MissingIdentity { location: ErrorLocation },
}

impl AuthError {
    /// Machine-readable code used when logging rejections
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingToken { .. } => "MISSING_TOKEN",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::TokenExpired { .. } => "TOKEN_EXPIRED",
            Self::JwtDecode { .. } => "JWT_DECODE_FAILED",
            Self::JwtEncode { .. } => "JWT_ENCODE_FAILED",
            Self::InvalidClaim { .. } => "INVALID_CLAIM",
            Self::RoleNotAllowed { .. } => "ROLE_NOT_ALLOWED",
            Self::MissingIdentity { .. } => "MISSING_IDENTITY",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
