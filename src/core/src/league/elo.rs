use crate::league::{LeagueMatch, RatingSettings, Scope, Side, chronological};
use crate::utils::FloatUtils;
use log::{debug, warn};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EloRating {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Games")]
    pub games: u32,
}

#[derive(Debug, Clone, Copy)]
struct RatingState {
    rating: f64,
    games: u32,
}

pub struct EloRatingEngine;

impl EloRatingEngine {
    /// Replays every decided match in (round, id) order and returns one
    /// rating per team in roster order, rounded to one decimal.
    ///
    /// Ratings stay at full precision during the replay.
    pub fn compute(matches: &[LeagueMatch], settings: &RatingSettings) -> Vec<EloRating> {
        let teams = Scope::All.teams();

        let mut states: HashMap<&str, RatingState> = teams
            .iter()
            .map(|&team| {
                (
                    team,
                    RatingState {
                        rating: settings.base_rating,
                        games: 0,
                    },
                )
            })
            .collect();

        let mut replayed = 0;

        for m in chronological(matches.iter().filter(|m| m.is_decided())) {
            let (Some(&home), Some(&away)) = (states.get(m.home_team.as_str()), states.get(m.away_team.as_str()))
            else {
                warn!("match {} references an unknown team, skipping it in ratings", m.id);
                continue;
            };

            // both sides use the ratings from before this match
            let expected_home = Self::expected_score(home.rating, away.rating);
            let expected_away = 1.0 - expected_home;

            let (actual_home, actual_away) = if m.home_goals > m.away_goals { (1.0, 0.0) } else { (0.0, 1.0) };

            if let Some(state) = states.get_mut(m.home_team.as_str()) {
                state.rating = home.rating + settings.k_factor * (actual_home - expected_home);
                state.games += 1;
            }
            if let Some(state) = states.get_mut(m.away_team.as_str()) {
                state.rating = away.rating + settings.k_factor * (actual_away - expected_away);
                state.games += 1;
            }

            replayed += 1;
        }

        debug!("elo replay: {} of {} matches rated", replayed, matches.len());

        teams
            .iter()
            .filter_map(|&team| {
                let state = states.get(team)?;
                let side = Side::of(team)?;

                Some(EloRating {
                    team: team.to_string(),
                    side,
                    rating: FloatUtils::round_to(state.rating, 1),
                    games: state.games,
                })
            })
            .collect()
    }

    /// Logistic expectation of the first side beating the second.
    pub fn expected_score(rating: f64, opponent_rating: f64) -> f64 {
        1.0 / (1.0 + 10f64.powf((opponent_rating - rating) / 400.0))
    }
}
