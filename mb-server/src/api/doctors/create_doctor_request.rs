use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateDoctorRequest {
    /// Doctor display name (required)
    pub name: String,

    /// Medical specialization, e.g. "cardiology" (required)
    pub specialization: String,

    /// Consultation price in the smallest currency unit (required)
    pub ticket_price: u32,

    /// Optional profile text
    #[serde(default)]
    pub bio: Option<String>,
}
