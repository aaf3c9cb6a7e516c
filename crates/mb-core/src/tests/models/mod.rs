mod booking_status;
mod review;
mod role;
