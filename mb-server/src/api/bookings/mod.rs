pub mod booking_dto;
pub mod booking_list_response;
pub mod bookings;
pub mod checkout_session_response;
