use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Account email (required, unique)
    pub email: String,

    /// Display name (required)
    pub name: String,

    /// Plaintext password, hashed before storage (required)
    pub password: String,

    /// Requested role; defaults to patient
    #[serde(default)]
    pub role: Option<String>,
}
