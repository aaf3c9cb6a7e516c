pub mod api;
pub mod config;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod store;

pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    bookings::{
        booking_dto::BookingDto,
        booking_list_response::BookingListResponse,
        bookings::create_checkout_session,
        checkout_session_response::CheckoutSessionResponse,
    },
    delete_response::DeleteResponse,
    doctors::{
        create_doctor_request::CreateDoctorRequest,
        doctor_dto::DoctorDto,
        doctor_list_response::DoctorListResponse,
        doctor_response::DoctorResponse,
        doctors::{create_doctor, delete_doctor, get_doctor, list_doctors, update_doctor},
        update_doctor_request::UpdateDoctorRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    reviews::{
        create_review_request::CreateReviewRequest,
        review_dto::ReviewDto,
        review_list_response::ReviewListResponse,
        review_response::ReviewResponse,
        reviews::{create_review, list_reviews},
    },
    users::{
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_list_response::UserListResponse,
        user_response::UserResponse,
        users::{delete_user, get_my_appointments, get_profile, get_user, list_users, update_user},
    },
};

pub use crate::routes::build_router;

#[cfg(test)]
mod tests;
