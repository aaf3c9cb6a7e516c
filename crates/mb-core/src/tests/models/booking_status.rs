use crate::BookingStatus;

use std::str::FromStr;

#[test]
fn test_booking_status_as_str() {
    assert_eq!(BookingStatus::Pending.as_str(), "pending");
    assert_eq!(BookingStatus::Approved.as_str(), "approved");
    assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
}

#[test]
fn test_booking_status_from_str() {
    assert_eq!(
        BookingStatus::from_str("pending").unwrap(),
        BookingStatus::Pending
    );
    assert!(BookingStatus::from_str("paid").is_err());
}

#[test]
fn test_booking_status_default() {
    assert_eq!(BookingStatus::default(), BookingStatus::Pending);
}
