use crate::{CoreError, Review};

use uuid::Uuid;

#[test]
fn test_review_valid_rating() {
    for rating in 1..=5 {
        let review = Review::new(Uuid::new_v4(), Uuid::new_v4(), rating, "fine".to_string());
        assert!(review.validate().is_ok());
    }
}

#[test]
fn test_review_rejects_out_of_range_rating() {
    for rating in [0u8, 6, 200] {
        let review = Review::new(Uuid::new_v4(), Uuid::new_v4(), rating, "nope".to_string());
        assert!(matches!(
            review.validate(),
            Err(CoreError::InvalidRating { value, .. }) if value == rating
        ));
    }
}
