use crate::league::{LeagueMatch, PointsRule, ResultCode, chronological};
use crate::utils::FloatUtils;
use log::debug;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Venue {
    #[serde(rename = "H")]
    Home,
    #[serde(rename = "V")]
    Away,
}

/// One game of a team's season with its running totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionRow {
    #[serde(rename = "Round")]
    pub round: u32,
    #[serde(rename = "Opponent")]
    pub opponent: String,
    #[serde(rename = "H/V")]
    pub venue: Venue,
    #[serde(rename = "GF")]
    pub goals_for: u16,
    #[serde(rename = "GA")]
    pub goals_against: u16,
    #[serde(rename = "Result")]
    pub result: ResultCode,
    #[serde(rename = "Points")]
    pub points: u32,
    #[serde(rename = "GP")]
    pub played: u32,
    #[serde(rename = "PTS_total")]
    pub points_total: u32,
    #[serde(rename = "PTS_per_game")]
    pub points_per_game: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressionPoint {
    #[serde(rename = "Round")]
    pub round: u32,
    #[serde(rename = "PTS_total")]
    pub points_total: u32,
    #[serde(rename = "PTS_per_game")]
    pub points_per_game: f64,
}

/// A team's cumulative points by round, one point per round.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressionSeries {
    pub team: String,
    pub points: Vec<ProgressionPoint>,
}

pub struct PointsProgression;

impl PointsProgression {
    /// Replays `team`'s decided matches in (round, id) order.
    pub fn for_team(matches: &[LeagueMatch], team: &str) -> Vec<ProgressionRow> {
        let games = matches.iter().filter(|m| m.is_decided() && m.involves(team));

        let mut points_total = 0;
        let mut played = 0;

        chronological(games)
            .into_iter()
            .map(|m| {
                let (result, opponent, venue) = if m.home_team == team {
                    (m.home_result(), &m.away_team, Venue::Home)
                } else {
                    (m.away_result(), &m.home_team, Venue::Away)
                };

                let points = PointsRule::team_points(result.goals_for, result.goals_against, result.overtime);

                played += 1;
                points_total += points;

                ProgressionRow {
                    round: m.round,
                    opponent: opponent.clone(),
                    venue,
                    goals_for: result.goals_for,
                    goals_against: result.goals_against,
                    result: result.code(),
                    points,
                    played,
                    points_total,
                    points_per_game: FloatUtils::round_to(
                        FloatUtils::safe_ratio(points_total as f64, played as f64),
                        3,
                    ),
                }
            })
            .collect()
    }

    /// Series for each requested team, in request order. Teams without a
    /// decided game are left out. When a team has two games in one round
    /// the round keeps the state after the first.
    pub fn compare(matches: &[LeagueMatch], teams: &[&str]) -> Vec<ProgressionSeries> {
        let series: Vec<ProgressionSeries> = teams
            .iter()
            .filter_map(|&team| {
                let mut points: Vec<ProgressionPoint> = Vec::new();

                for row in Self::for_team(matches, team) {
                    if points.last().is_some_and(|p| p.round == row.round) {
                        continue;
                    }
                    points.push(ProgressionPoint {
                        round: row.round,
                        points_total: row.points_total,
                        points_per_game: row.points_per_game,
                    });
                }

                if points.is_empty() {
                    None
                } else {
                    Some(ProgressionSeries {
                        team: team.to_string(),
                        points,
                    })
                }
            })
            .collect();

        debug!("points progression: {} of {} teams have games", series.len(), teams.len());

        series
    }
}
