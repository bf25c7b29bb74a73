//! Error types for the rating calculator
//!
//! The rating and performance engines never fail. These errors cover the
//! edges of the crate: parsing user input, custom K-factors and configuration.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("Invalid score: {value} (expected 1, 0.5 or 0)")]
    InvalidScore { value: String },

    #[error("Invalid time class: {value} (expected classical, rapid or blitz)")]
    InvalidTimeClass { value: String },

    #[error("Invalid game '{input}': {reason}")]
    InvalidGame { input: String, reason: String },

    #[error("Invalid K-factor: {value} (must be a positive number)")]
    InvalidKFactor { value: f64 },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}
