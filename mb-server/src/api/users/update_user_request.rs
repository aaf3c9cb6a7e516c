use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    /// New display name (required; email is immutable)
    pub name: String,
}
