//! Common types shared by the rating and performance engines

use crate::error::RatingError;
use serde::{Deserialize, Serialize};
use skillratings::Outcomes;
use std::fmt;
use std::str::FromStr;

/// Outcome of a single game from the player's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "ScoreRepr")]
pub enum Score {
    Win,
    Draw,
    Loss,
}

impl Score {
    /// Numeric value of the outcome (1, 0.5 or 0)
    pub fn value(self) -> f64 {
        match self {
            Score::Win => 1.0,
            Score::Draw => 0.5,
            Score::Loss => 0.0,
        }
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.value()
    }
}

impl From<Score> for Outcomes {
    fn from(score: Score) -> Self {
        match score {
            Score::Win => Outcomes::WIN,
            Score::Draw => Outcomes::DRAW,
            Score::Loss => Outcomes::LOSS,
        }
    }
}

impl TryFrom<f64> for Score {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value == 1.0 {
            Ok(Score::Win)
        } else if value == 0.5 {
            Ok(Score::Draw)
        } else if value == 0.0 {
            Ok(Score::Loss)
        } else {
            Err(RatingError::InvalidScore {
                value: value.to_string(),
            })
        }
    }
}

impl FromStr for Score {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "win" | "w" => Ok(Score::Win),
            "draw" | "d" | "1/2" | "½" => Ok(Score::Draw),
            "loss" | "l" => Ok(Score::Loss),
            other => other
                .parse::<f64>()
                .map_err(|_| RatingError::InvalidScore {
                    value: s.to_string(),
                })
                .and_then(Score::try_from),
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Win => write!(f, "win"),
            Score::Draw => write!(f, "draw"),
            Score::Loss => write!(f, "loss"),
        }
    }
}

/// Serialized scores may be numbers (`1`, `0.5`, `0`) or names (`"win"`)
#[derive(Deserialize)]
#[serde(untagged)]
enum ScoreRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<ScoreRepr> for Score {
    type Error = RatingError;

    fn try_from(repr: ScoreRepr) -> Result<Self, Self::Error> {
        match repr {
            ScoreRepr::Number(value) => Score::try_from(value),
            ScoreRepr::Text(text) => text.parse(),
        }
    }
}

/// Time control the game was played at
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeClass {
    #[default]
    Classical,
    Rapid,
    Blitz,
}

impl fmt::Display for TimeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeClass::Classical => write!(f, "classical"),
            TimeClass::Rapid => write!(f, "rapid"),
            TimeClass::Blitz => write!(f, "blitz"),
        }
    }
}

impl FromStr for TimeClass {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classical" | "standard" => Ok(TimeClass::Classical),
            "rapid" => Ok(TimeClass::Rapid),
            "blitz" => Ok(TimeClass::Blitz),
            _ => Err(RatingError::InvalidTimeClass {
                value: s.to_string(),
            }),
        }
    }
}

/// Everything needed to update one player's rating after one game.
///
/// `score` is kept as a raw number so that values outside {0, 0.5, 1}
/// reach the engine, which leaves the rating untouched for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdateInput {
    pub rating_player: f64,
    pub rating_opponent: f64,
    pub score: f64,
    #[serde(default)]
    pub time_class: TimeClass,
    #[serde(default)]
    pub less_than_30_games: bool,
    #[serde(default)]
    pub over_rating_2400: bool,
    #[serde(default = "default_over_age_18")]
    pub over_age_18: bool,
}

fn default_over_age_18() -> bool {
    true
}

impl RatingUpdateInput {
    /// Input for an established adult player in a classical game
    pub fn new(rating_player: f64, rating_opponent: f64, score: Score) -> Self {
        Self {
            rating_player,
            rating_opponent,
            score: score.value(),
            time_class: TimeClass::Classical,
            less_than_30_games: false,
            over_rating_2400: false,
            over_age_18: true,
        }
    }

    /// Replace the score with a raw numeric value
    pub fn with_raw_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }

    pub fn with_time_class(mut self, time_class: TimeClass) -> Self {
        self.time_class = time_class;
        self
    }

    pub fn with_less_than_30_games(mut self, less_than_30_games: bool) -> Self {
        self.less_than_30_games = less_than_30_games;
        self
    }

    pub fn with_over_rating_2400(mut self, over_rating_2400: bool) -> Self {
        self.over_rating_2400 = over_rating_2400;
        self
    }

    pub fn with_over_age_18(mut self, over_age_18: bool) -> Self {
        self.over_age_18 = over_age_18;
        self
    }
}

/// One historical result against one opponent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub rating_opponent: f64,
    pub score: Score,
}

impl Game {
    pub fn new(rating_opponent: f64, score: Score) -> Self {
        Self {
            rating_opponent,
            score,
        }
    }
}

impl FromStr for Game {
    type Err = RatingError;

    /// Parse `"<rating>:<score>"`, e.g. `1800:1` or `1650:draw`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rating, score) = s.split_once(':').ok_or_else(|| RatingError::InvalidGame {
            input: s.to_string(),
            reason: "expected <rating>:<score>".to_string(),
        })?;

        let rating_opponent = rating.trim().parse::<f64>().map_err(|e| RatingError::InvalidGame {
            input: s.to_string(),
            reason: format!("bad opponent rating: {}", e),
        })?;

        let score = score.parse::<Score>().map_err(|e| RatingError::InvalidGame {
            input: s.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::new(rating_opponent, score))
    }
}

/// A set of games to compute a performance rating over
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceInput {
    pub games: Vec<Game>,
}

impl PerformanceInput {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }
}

impl FromIterator<Game> for PerformanceInput {
    fn from_iter<I: IntoIterator<Item = Game>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
