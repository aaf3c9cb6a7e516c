use crate::error::{Result as ServerErrorResult, ServerError};

use std::net::SocketAddr;

use log::LevelFilter;

/// Server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address (default: 0.0.0.0:3000)
    pub bind_addr: SocketAddr,

    /// JWT secret for HS256 signing and validation
    pub jwt_secret: String,

    /// Access token lifetime in seconds (default: 3600)
    pub token_ttl_secs: i64,

    /// Cookie consulted when no Authorization header is present (default: "token")
    pub auth_cookie_name: String,

    /// Log level (default: info)
    pub log_level: LevelFilter,

    /// Enable colored logs (default: true)
    pub log_colored: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> ServerErrorResult<Self> {
        // Load .env file if present (development)
        let _ = dotenvy::dotenv();

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()
            .map_err(|source| ServerError::InvalidBindAddr { source })?;

        let jwt_secret = std::env::var("JWT_SECRET").map_err(|_| ServerError::MissingJwtSecret)?;

        let config = Self {
            bind_addr,
            jwt_secret,

            token_ttl_secs: std::env::var("TOKEN_TTL_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600),

            auth_cookie_name: std::env::var("AUTH_COOKIE_NAME")
                .unwrap_or_else(|_| "token".to_string()),

            log_level: std::env::var("LOG_LEVEL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(LevelFilter::Info),

            log_colored: std::env::var("LOG_COLORED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        };

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> ServerErrorResult<()> {
        // A short secret makes brute-forcing the HS256 signature practical
        if self.jwt_secret.len() < 32 {
            return Err(ServerError::WeakJwtSecret {
                length: self.jwt_secret.len(),
            });
        }

        if self.token_ttl_secs <= 0 {
            return Err(ServerError::InvalidTokenTtl {
                value: self.token_ttl_secs,
            });
        }

        Ok(())
    }
}
