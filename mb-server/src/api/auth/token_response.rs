use crate::UserDto;

use serde::Serialize;

/// Login response carrying the signed access token
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub user: UserDto,
}
