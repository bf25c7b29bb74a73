//! Elo rating update for a single game
//!
//! The expectancy and the update itself come from the Elo implementation in
//! the skillratings crate; this module adds the coefficient policy, the
//! handling of out-of-range scores and integer rounding.

use crate::error::RatingError;
use crate::rating::coefficient::development_coefficient;
use crate::types::{RatingUpdateInput, Score};
use crate::utils::round_rating;
use serde::{Deserialize, Serialize};
use skillratings::elo::{elo, EloConfig, EloRating};
use tracing::{debug, warn};

/// Detailed result of a rating update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingBreakdown {
    /// Rating before the game
    pub old_rating: f64,
    /// Rating after the game, rounded
    pub new_rating: i64,
    /// Unrounded rating change (0 when the score was not recognized)
    pub change: f64,
    /// Development coefficient used
    pub k_factor: f64,
    /// Win expectancy against the opponent (0.0 to 1.0)
    pub expected_score: f64,
    /// Recognized game outcome, `None` for an out-of-range score
    pub score: Option<Score>,
}

/// Win expectancy of a player against an opponent
pub fn expected_score(rating_player: f64, rating_opponent: f64) -> f64 {
    let (player, _opponent) = skillratings::elo::expected_score(
        &EloRating {
            rating: rating_player,
        },
        &EloRating {
            rating: rating_opponent,
        },
    );
    player
}

/// Unrounded rating after one game with a fixed coefficient
fn updated_rating(rating_player: f64, rating_opponent: f64, score: Score, k_factor: f64) -> f64 {
    let (player, _opponent) = elo(
        &EloRating {
            rating: rating_player,
        },
        &EloRating {
            rating: rating_opponent,
        },
        &score.into(),
        &EloConfig { k: k_factor },
    );
    player.rating
}

/// Compute the updated rating with all intermediate values.
///
/// A score outside {0, 0.5, 1} leaves the rating unchanged.
pub fn evaluate_rating(input: &RatingUpdateInput) -> RatingBreakdown {
    let k_factor = development_coefficient(input);
    let expected = expected_score(input.rating_player, input.rating_opponent);

    let score = match Score::try_from(input.score) {
        Ok(score) => score,
        Err(e) => {
            warn!("{}, leaving rating {} unchanged", e, input.rating_player);
            return RatingBreakdown {
                old_rating: input.rating_player,
                new_rating: round_rating(input.rating_player),
                change: 0.0,
                k_factor,
                expected_score: expected,
                score: None,
            };
        }
    };

    let new_rating = updated_rating(input.rating_player, input.rating_opponent, score, k_factor);

    debug!(
        "Rating {} vs {}: expected {:.4}, scored {}, K={} -> {:.2}",
        input.rating_player,
        input.rating_opponent,
        expected,
        score.value(),
        k_factor,
        new_rating
    );

    RatingBreakdown {
        old_rating: input.rating_player,
        new_rating: round_rating(new_rating),
        change: new_rating - input.rating_player,
        k_factor,
        expected_score: expected,
        score: Some(score),
    }
}

/// Compute the player's rating after one game, rounded to an integer
pub fn calculate_rating(input: &RatingUpdateInput) -> i64 {
    evaluate_rating(input).new_rating
}

/// Rating update with an explicit K-factor instead of the category policy
pub fn quick_elo(
    rating_player: f64,
    rating_opponent: f64,
    score: Score,
    k_factor: f64,
) -> crate::error::Result<i64> {
    if !k_factor.is_finite() || k_factor <= 0.0 {
        return Err(RatingError::InvalidKFactor { value: k_factor }.into());
    }

    let new_rating = updated_rating(rating_player, rating_opponent, score, k_factor);
    Ok(round_rating(new_rating))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TimeClass;

    #[test]
    fn test_expected_score() {
        assert_eq!(expected_score(1500.0, 1500.0), 0.5);
        assert!(expected_score(1700.0, 1300.0) > 0.9);
        assert!(expected_score(1300.0, 1700.0) < 0.1);

        let sum = expected_score(1620.0, 1480.0) + expected_score(1480.0, 1620.0);
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_breakdown_for_win() {
        let input = RatingUpdateInput::new(1500.0, 1500.0, Score::Win);
        let breakdown = evaluate_rating(&input);

        assert_eq!(breakdown.old_rating, 1500.0);
        assert_eq!(breakdown.new_rating, 1510);
        assert_eq!(breakdown.change, 10.0);
        assert_eq!(breakdown.k_factor, 20.0);
        assert_eq!(breakdown.expected_score, 0.5);
        assert_eq!(breakdown.score, Some(Score::Win));
    }

    #[test]
    fn test_breakdown_for_invalid_score() {
        let input = RatingUpdateInput::new(1500.0, 1600.0, Score::Win).with_raw_score(999.0);
        let breakdown = evaluate_rating(&input);

        assert_eq!(breakdown.new_rating, 1500);
        assert_eq!(breakdown.change, 0.0);
        assert_eq!(breakdown.score, None);
        assert_eq!(breakdown.k_factor, 20.0);
    }

    #[test]
    fn test_negative_and_nan_scores_are_ignored() {
        for raw in [-1.0, 0.3, f64::NAN] {
            let input = RatingUpdateInput::new(1432.0, 1500.0, Score::Win).with_raw_score(raw);
            assert_eq!(calculate_rating(&input), 1432);
        }
    }

    #[test]
    fn test_rounding_of_fractional_change() {
        // E = 1 / (1 + 10^(10/400)) ~ 0.4856, so a win gives ~ +10.29
        let input = RatingUpdateInput::new(1500.0, 1510.0, Score::Win);
        let breakdown = evaluate_rating(&input);

        assert!(breakdown.change > 10.0 && breakdown.change < 10.5);
        assert_eq!(breakdown.new_rating, 1510);
    }

    #[test]
    fn test_draw_against_stronger_opponent_gains() {
        let input = RatingUpdateInput::new(1500.0, 1700.0, Score::Draw);
        assert!(calculate_rating(&input) > 1500);
    }

    #[test]
    fn test_time_class_applies_to_update() {
        let classical = RatingUpdateInput::new(1500.0, 1500.0, Score::Loss)
            .with_less_than_30_games(true);
        let blitz = classical.clone().with_time_class(TimeClass::Blitz);

        assert_eq!(calculate_rating(&classical), 1480);
        assert_eq!(calculate_rating(&blitz), 1490);
    }

    #[test]
    fn test_quick_elo() {
        assert_eq!(quick_elo(1500.0, 1500.0, Score::Win, 20.0).unwrap(), 1510);
        assert_eq!(quick_elo(1500.0, 1500.0, Score::Loss, 32.0).unwrap(), 1484);
        assert_eq!(quick_elo(1500.0, 1500.0, Score::Draw, 40.0).unwrap(), 1500);
    }

    #[test]
    fn test_quick_elo_rejects_bad_k() {
        assert!(quick_elo(1500.0, 1500.0, Score::Win, 0.0).is_err());
        assert!(quick_elo(1500.0, 1500.0, Score::Win, -10.0).is_err());
        assert!(quick_elo(1500.0, 1500.0, Score::Win, f64::INFINITY).is_err());
    }
}
