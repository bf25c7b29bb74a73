//! Development coefficient (K-factor) selection
//!
//! The rules are checked in order and the first one that applies wins, so a
//! player matching several categories gets the coefficient of the earliest.

use crate::types::{RatingUpdateInput, TimeClass};
use tracing::debug;

/// K for rapid and blitz games, regardless of player category
pub const K_FAST_TIME_CONTROL: f64 = 20.0;
/// K for provisional players (fewer than 30 games, or young and below 2300)
pub const K_PROVISIONAL: f64 = 40.0;
/// K for players who have reached 2400
pub const K_ELITE: f64 = 10.0;
/// K for established players in classical games
pub const K_STANDARD: f64 = 20.0;

/// Juniors below this rating keep the provisional coefficient
pub const JUNIOR_RATING_THRESHOLD: f64 = 2300.0;

/// Select the development coefficient for a rating update
pub fn development_coefficient(input: &RatingUpdateInput) -> f64 {
    let k = if matches!(input.time_class, TimeClass::Rapid | TimeClass::Blitz) {
        K_FAST_TIME_CONTROL
    } else if input.less_than_30_games
        || (!input.over_age_18 && input.rating_player < JUNIOR_RATING_THRESHOLD)
    {
        K_PROVISIONAL
    } else if input.over_rating_2400 {
        K_ELITE
    } else {
        K_STANDARD
    };

    debug!(
        "Selected K={} for rating {} ({}, <30 games: {}, 2400+: {}, 18+: {})",
        k,
        input.rating_player,
        input.time_class,
        input.less_than_30_games,
        input.over_rating_2400,
        input.over_age_18
    );

    k
}
