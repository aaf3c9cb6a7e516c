pub mod create_doctor_request;
pub mod doctor_dto;
pub mod doctor_list_response;
pub mod doctor_response;
pub mod doctors;
pub mod update_doctor_request;
