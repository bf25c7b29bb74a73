//! Tournament performance rating
//!
//! Performance is the average opponent rating shifted by the logistic
//! differential for the fraction of points scored: `Rp = Ravg + D` with
//! `D = 400 * log10(p / (1 - p))`.

use crate::types::{Game, PerformanceInput};
use crate::utils::round_rating;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Substitute for a score fraction of exactly 0 or 1, which would make the
/// differential infinite
pub const SCORE_PERCENTAGE_EPSILON: f64 = 0.0001;

/// Detailed result of a performance calculation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Number of games played
    pub games: usize,
    /// Total points scored
    pub total_score: f64,
    /// Mean rating of the opponents faced
    pub average_opponent: f64,
    /// Fraction of available points scored (0.0 to 1.0)
    pub score_percentage: f64,
    /// Logistic rating differential for the score percentage
    pub differential: f64,
    /// Rounded performance rating
    pub performance: i64,
}

/// Mean rating of the opponents, 0 when there are no games
pub fn average_opponent_rating(games: &[Game]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }

    let total: f64 = games.iter().map(|g| g.rating_opponent).sum();
    total / games.len() as f64
}

/// Fraction of the available points scored, 0 when there are no games
pub fn score_percentage(games: &[Game]) -> f64 {
    if games.is_empty() {
        return 0.0;
    }

    let total: f64 = games.iter().map(|g| g.score.value()).sum();
    total / games.len() as f64
}

/// Rating differential for a score fraction.
///
/// Fractions at or beyond 0 and 1 are clamped by [`SCORE_PERCENTAGE_EPSILON`]
/// so the result stays finite.
pub fn performance_differential(percentage: f64) -> f64 {
    let mut p = percentage;
    if p <= 0.0 {
        p = SCORE_PERCENTAGE_EPSILON;
    }
    if p >= 1.0 {
        p = 1.0 - SCORE_PERCENTAGE_EPSILON;
    }

    400.0 * (p / (1.0 - p)).log10()
}

/// Compute the performance rating with all intermediate values
pub fn evaluate_performance(input: &PerformanceInput) -> PerformanceSummary {
    let games = &input.games;
    if games.is_empty() {
        return PerformanceSummary::default();
    }

    let average_opponent = average_opponent_rating(games);
    let percentage = score_percentage(games);
    let differential = performance_differential(percentage);
    let performance = round_rating(average_opponent + differential);

    debug!(
        "Performance over {} games: average opponent {:.1}, scored {:.1}%, D={:.1} -> {}",
        games.len(),
        average_opponent,
        percentage * 100.0,
        differential,
        performance
    );

    PerformanceSummary {
        games: games.len(),
        total_score: games.iter().map(|g| g.score.value()).sum(),
        average_opponent,
        score_percentage: percentage,
        differential,
        performance,
    }
}

/// Compute the performance rating over a set of games, rounded to an integer
pub fn calculate_performance(input: &PerformanceInput) -> i64 {
    evaluate_performance(input).performance
}
