//! Test fixtures for building rating inputs

#![allow(dead_code)]

use elo_calculator::types::{Game, PerformanceInput, RatingUpdateInput, Score, TimeClass};

/// Player category flags, defaulting to an established adult
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub less_than_30_games: bool,
    pub over_rating_2400: bool,
    pub over_age_18: bool,
}

impl Default for Category {
    fn default() -> Self {
        Self {
            less_than_30_games: false,
            over_rating_2400: false,
            over_age_18: true,
        }
    }
}

impl Category {
    pub fn provisional() -> Self {
        Self {
            less_than_30_games: true,
            ..Self::default()
        }
    }

    pub fn junior() -> Self {
        Self {
            over_age_18: false,
            ..Self::default()
        }
    }

    pub fn elite() -> Self {
        Self {
            over_rating_2400: true,
            ..Self::default()
        }
    }
}

/// Build a rating input for one game
pub fn game_input(
    rating_player: f64,
    rating_opponent: f64,
    score: Score,
    time_class: TimeClass,
    category: Category,
) -> RatingUpdateInput {
    RatingUpdateInput::new(rating_player, rating_opponent, score)
        .with_time_class(time_class)
        .with_less_than_30_games(category.less_than_30_games)
        .with_over_rating_2400(category.over_rating_2400)
        .with_over_age_18(category.over_age_18)
}

/// Classical game for an established adult
pub fn classical(rating_player: f64, rating_opponent: f64, score: Score) -> RatingUpdateInput {
    game_input(
        rating_player,
        rating_opponent,
        score,
        TimeClass::Classical,
        Category::default(),
    )
}

/// Build a performance input from (opponent rating, score) pairs
pub fn tournament(results: &[(f64, Score)]) -> PerformanceInput {
    results
        .iter()
        .map(|&(rating, score)| Game::new(rating, score))
        .collect()
}
