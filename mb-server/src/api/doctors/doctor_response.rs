use crate::DoctorDto;

use serde::Serialize;

/// Single doctor response
#[derive(Debug, Serialize)]
pub struct DoctorResponse {
    pub doctor: DoctorDto,
}
