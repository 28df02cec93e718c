use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_RATING: f64 = 1500.0;
pub const DEFAULT_K_FACTOR: f64 = 20.0;
pub const DEFAULT_SCHEDULE_ROUNDS: u32 = 32;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueSettings {
    pub rating: RatingSettings,
    pub schedule_rounds: u32,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        LeagueSettings {
            rating: RatingSettings::default(),
            schedule_rounds: DEFAULT_SCHEDULE_ROUNDS,
        }
    }
}

/// Elo tunables
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingSettings {
    /// Starting rating of every team
    pub base_rating: f64,
    /// Share of the gap between actual and expected score applied per game
    pub k_factor: f64,
}

impl RatingSettings {
    pub fn new(base_rating: f64, k_factor: f64) -> Self {
        RatingSettings { base_rating, k_factor }
    }
}

impl Default for RatingSettings {
    fn default() -> Self {
        RatingSettings::new(DEFAULT_BASE_RATING, DEFAULT_K_FACTOR)
    }
}
