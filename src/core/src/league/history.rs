use crate::league::table::{BasicStats, StandingsAggregator, TeamRecord};
use crate::league::{Scope, SeasonMatches, Side};
use crate::utils::FloatUtils;
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;

/// One team's line for one season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeasonRow {
    #[serde(rename = "Season")]
    pub season: String,
    #[serde(rename = "GP")]
    pub played: u32,
    #[serde(rename = "PTS")]
    pub points: u32,
    #[serde(rename = "P/GP")]
    pub points_per_game: f64,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AllTimeRow {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(rename = "GP")]
    pub played: u32,
    #[serde(rename = "PTS")]
    pub points: u32,
    #[serde(rename = "P/GP")]
    pub points_per_game: f64,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
}

pub struct LeagueHistory;

impl LeagueHistory {
    /// Seasons in id order; a season without results gives a zero row.
    pub fn team_history(seasons: &[SeasonMatches], team: &str) -> Vec<TeamSeasonRow> {
        let mut ordered: Vec<&SeasonMatches> = seasons.iter().collect();
        ordered.sort_by_key(|s| s.season.id);

        ordered
            .into_iter()
            .map(|s| {
                let standings = StandingsAggregator::compute(&s.matches, Scope::All, false);
                let zero = BasicStats::from_record(&TeamRecord::default());
                let stats = standings.stats_of(team).unwrap_or(&zero);

                TeamSeasonRow {
                    season: s.season.label.clone(),
                    played: stats.played,
                    points: stats.points,
                    points_per_game: stats.points_per_game,
                    goals_for: stats.goals_for,
                    goals_against: stats.goals_against,
                    goal_difference: stats.goal_difference,
                }
            })
            .collect()
    }

    /// Totals across all seasons, sorted by PTS, P/GP, GD, GF descending.
    pub fn all_time_table(seasons: &[SeasonMatches]) -> Vec<AllTimeRow> {
        let mut ordered: Vec<&SeasonMatches> = seasons.iter().collect();
        ordered.sort_by_key(|s| s.season.id);

        let per_season: Vec<Vec<(&'static str, Side, TeamRecord)>> = ordered
            .par_iter()
            .map(|s| {
                StandingsAggregator::collect(&s.matches, Scope::All)
                    .into_iter()
                    .map(|e| (e.team, e.side, e.record))
                    .collect()
            })
            .collect();

        debug!("all-time table over {} seasons", per_season.len());

        let mut totals: Vec<(&'static str, Side, TeamRecord)> = Scope::All
            .teams()
            .into_iter()
            .filter_map(|team| Side::of(team).map(|side| (team, side, TeamRecord::default())))
            .collect();

        for season in &per_season {
            for (team, _, record) in season {
                if let Some((_, _, total)) = totals.iter_mut().find(|(t, _, _)| t == team) {
                    *total += record;
                }
            }
        }

        let mut rows: Vec<AllTimeRow> = totals
            .into_iter()
            .map(|(team, side, record)| AllTimeRow {
                team: team.to_string(),
                side,
                played: record.played,
                points: record.points,
                points_per_game: FloatUtils::round_to(
                    FloatUtils::safe_ratio(record.points as f64, record.played as f64),
                    3,
                ),
                goals_for: record.goals_for,
                goals_against: record.goals_against,
                goal_difference: record.goal_difference(),
            })
            .collect();

        rows.sort_by(|a, b| {
            b.points
                .cmp(&a.points)
                .then(b.points_per_game.partial_cmp(&a.points_per_game).unwrap_or(Ordering::Equal))
                .then(b.goal_difference.cmp(&a.goal_difference))
                .then(b.goals_for.cmp(&a.goals_for))
        });

        rows
    }
}
