//! Rating calculation defaults

use crate::types::TimeClass;
use serde::{Deserialize, Serialize};

/// Defaults applied when the caller does not specify them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// K-factor for the quick fixed-K calculation
    pub default_k_factor: f64,
    /// Time class assumed for rating updates
    pub default_time_class: TimeClass,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            default_k_factor: 20.0,
            default_time_class: TimeClass::Classical,
        }
    }
}
