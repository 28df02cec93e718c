use crate::league::table::{BasicStats, StandingsAggregator};
use crate::league::{EloRatingEngine, LeagueMatch, RatingSettings, Scope, Side};
use serde::Serialize;
use std::cmp::Ordering;

/// Standings row merged with the team's Elo rating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PowerRankingRow {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(flatten)]
    pub stats: BasicStats,
    #[serde(rename = "Rating")]
    pub rating: f64,
    #[serde(rename = "Games")]
    pub games: u32,
}

pub struct PowerRanking;

impl PowerRanking {
    /// Sorted by Rating, then PTS, GD and GF, all descending.
    pub fn compute(matches: &[LeagueMatch], scope: Scope, settings: &RatingSettings) -> Vec<PowerRankingRow> {
        let standings = StandingsAggregator::compute(matches, Scope::All, false);
        let ratings = EloRatingEngine::compute(matches, settings);

        let mut rows: Vec<PowerRankingRow> = standings
            .entries()
            .into_iter()
            .filter(|(_, side, _)| scope.contains(*side))
            .map(|(team, side, stats)| {
                let elo = ratings.iter().find(|r| r.team == team);

                PowerRankingRow {
                    team: team.to_string(),
                    side,
                    stats: stats.clone(),
                    rating: elo.map(|r| r.rating).unwrap_or(settings.base_rating),
                    games: elo.map(|r| r.games).unwrap_or(0),
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            b.rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal)
                .then(b.stats.points.cmp(&a.stats.points))
                .then(b.stats.goal_difference.cmp(&a.stats.goal_difference))
                .then(b.stats.goals_for.cmp(&a.stats.goals_for))
        });

        rows
    }
}
