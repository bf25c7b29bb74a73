//! Tournament performance ratings

pub mod calculator;

pub use calculator::{
    average_opponent_rating, calculate_performance, evaluate_performance,
    performance_differential, score_percentage, PerformanceSummary, SCORE_PERCENTAGE_EPSILON,
};
