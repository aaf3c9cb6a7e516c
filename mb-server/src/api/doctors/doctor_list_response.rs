use crate::DoctorDto;

use serde::Serialize;

/// List of doctors response
#[derive(Debug, Serialize)]
pub struct DoctorListResponse {
    pub doctors: Vec<DoctorDto>,
}
