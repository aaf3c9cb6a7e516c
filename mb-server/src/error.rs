use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid BIND_ADDR: {source}")]
    InvalidBindAddr {
        #[source]
        source: AddrParseError,
    },

    #[error("JWT_SECRET is required")]
    MissingJwtSecret,

    #[error("JWT_SECRET too short: {length} bytes (need at least 32)")]
    WeakJwtSecret { length: usize },

    #[error("TOKEN_TTL_SECS must be positive, got {value}")]
    InvalidTokenTtl { value: i64 },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
