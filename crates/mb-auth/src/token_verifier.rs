use crate::{AuthError, Claims, Identity, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

/// Verifies bearer tokens against the server-held HS256 secret.
///
/// The secret is injected at construction; the verifier holds no mutable
/// state and reads nothing ambient, so tests can run it against synthetic
/// secrets in isolation.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier with an HS256 symmetric secret
    pub fn with_hs256(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0; // expiry is exact: a token one second past exp is rejected

        Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        }
    }

    /// Verify signature and expiry, returning the embedded identity.
    ///
    /// Pure function of (token, secret, current time): repeated calls with
    /// the same valid token yield equal identities.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Identity> {
        if token.is_empty() {
            return Err(AuthError::MissingToken {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation beyond the signature check
        token_data.claims.validate()?;

        Identity::try_from(token_data.claims)
    }
}
