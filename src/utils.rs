//! Utility functions for the rating engines

/// Round a rating to the nearest integer, halves away from zero
pub fn round_rating(rating: f64) -> i64 {
    rating.round() as i64
}

/// Calculate the absolute difference between two ratings
pub fn rating_difference(rating1: f64, rating2: f64) -> f64 {
    (rating1 - rating2).abs()
}
