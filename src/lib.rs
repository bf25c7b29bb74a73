//! Elo Calculator - chess rating updates and performance ratings
//!
//! This crate provides the single-game Elo update with federation-style
//! development coefficients, and the tournament performance rating over a
//! set of games. Both are pure functions over plain values.

pub mod config;
pub mod error;
pub mod performance;
pub mod rating;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use error::{RatingError, Result};
pub use types::*;

// Re-export the engines
pub use performance::{calculate_performance, evaluate_performance, PerformanceSummary};
pub use rating::{calculate_rating, evaluate_rating, quick_elo, RatingBreakdown};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
