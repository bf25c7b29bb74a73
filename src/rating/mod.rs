//! Elo rating updates
//!
//! This module provides the single-game rating update, including the
//! development coefficient policy used by chess federations.

pub mod calculator;
pub mod coefficient;

// Re-export commonly used types
pub use calculator::{
    calculate_rating, evaluate_rating, expected_score, quick_elo, RatingBreakdown,
};
pub use coefficient::development_coefficient;
