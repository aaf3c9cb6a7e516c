use serde::Deserialize;

/// Partial update; absent fields are left unchanged
#[derive(Debug, Deserialize)]
pub struct UpdateDoctorRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub specialization: Option<String>,

    #[serde(default)]
    pub bio: Option<String>,

    #[serde(default)]
    pub ticket_price: Option<u32>,
}
