use crate::league::Side;
use crate::league::table::{FormGuide, TeamRecord};
use crate::utils::FloatUtils;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicStats {
    #[serde(rename = "GP")]
    pub played: u32,
    #[serde(rename = "W")]
    pub wins: u32,
    #[serde(rename = "W-OT")]
    pub overtime_wins: u32,
    #[serde(rename = "L-OT")]
    pub overtime_losses: u32,
    #[serde(rename = "L")]
    pub losses: u32,
    #[serde(rename = "GF")]
    pub goals_for: u32,
    #[serde(rename = "GA")]
    pub goals_against: u32,
    #[serde(rename = "GD")]
    pub goal_difference: i64,
    #[serde(rename = "PTS")]
    pub points: u32,
    #[serde(rename = "P/GP")]
    pub points_per_game: f64,
}

impl BasicStats {
    pub fn from_record(record: &TeamRecord) -> Self {
        BasicStats {
            played: record.played,
            wins: record.wins,
            overtime_wins: record.overtime_wins,
            overtime_losses: record.overtime_losses,
            losses: record.losses,
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            goal_difference: record.goal_difference(),
            points: record.points,
            points_per_game: FloatUtils::round_to(
                FloatUtils::safe_ratio(record.points as f64, record.played as f64),
                3,
            ),
        }
    }

    /// League table order: PTS, W, W-OT, GD, GF, all descending.
    pub fn table_order(a: &BasicStats, b: &BasicStats) -> Ordering {
        b.points
            .cmp(&a.points)
            .then(b.wins.cmp(&a.wins))
            .then(b.overtime_wins.cmp(&a.overtime_wins))
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedStats {
    #[serde(rename = "PTS%")]
    pub points_pct: f64,
    #[serde(rename = "GF/GP")]
    pub goals_for_per_game: f64,
    #[serde(rename = "GA/GP")]
    pub goals_against_per_game: f64,
    #[serde(rename = "AVG GD")]
    pub average_goal_difference: f64,
    #[serde(rename = "OT%")]
    pub overtime_pct: f64,
    #[serde(rename = "OT body")]
    pub overtime_points: u32,
    #[serde(rename = "1G W")]
    pub one_goal_wins: u32,
    #[serde(rename = "1G L")]
    pub one_goal_losses: u32,
    #[serde(rename = "Blowout W")]
    pub blowout_wins: u32,
    #[serde(rename = "Blowout L")]
    pub blowout_losses: u32,
    #[serde(rename = "SO For")]
    pub shutouts_for: u32,
    #[serde(rename = "SO Against")]
    pub shutouts_against: u32,
    #[serde(rename = "10+ For")]
    pub ten_plus_for: u32,
    #[serde(rename = "10+ Against")]
    pub ten_plus_against: u32,
}

impl ExtendedStats {
    pub fn from_record(record: &TeamRecord) -> Self {
        let played = record.played as f64;

        ExtendedStats {
            points_pct: FloatUtils::round_to(
                FloatUtils::safe_percentage(record.points as f64, played * 3.0),
                1,
            ),
            goals_for_per_game: FloatUtils::round_to(FloatUtils::safe_ratio(record.goals_for as f64, played), 3),
            goals_against_per_game: FloatUtils::round_to(
                FloatUtils::safe_ratio(record.goals_against as f64, played),
                3,
            ),
            average_goal_difference: FloatUtils::round_to(
                FloatUtils::safe_ratio(record.goal_difference() as f64, played),
                3,
            ),
            overtime_pct: FloatUtils::round_to(FloatUtils::safe_percentage(record.overtime_games as f64, played), 1),
            overtime_points: 2 * record.overtime_wins + record.overtime_losses,
            one_goal_wins: record.one_goal_wins,
            one_goal_losses: record.one_goal_losses,
            blowout_wins: record.blowout_wins,
            blowout_losses: record.blowout_losses,
            shutouts_for: record.shutouts_for,
            shutouts_against: record.shutouts_against,
            ten_plus_for: record.ten_plus_for,
            ten_plus_against: record.ten_plus_against,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandingsRow {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(flatten)]
    pub stats: BasicStats,
}

impl StandingsRow {
    pub fn new(team: &str, side: Side, record: &TeamRecord) -> Self {
        StandingsRow {
            team: team.to_string(),
            side,
            stats: BasicStats::from_record(record),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedStandingsRow {
    #[serde(rename = "Team")]
    pub team: String,
    #[serde(rename = "Side")]
    pub side: Side,
    #[serde(flatten)]
    pub stats: BasicStats,
    #[serde(flatten)]
    pub extended: ExtendedStats,
    #[serde(rename = "Last5")]
    pub last5: String,
    #[serde(rename = "Streak")]
    pub streak: String,
}

impl DetailedStandingsRow {
    pub fn new(team: &str, side: Side, record: &TeamRecord, form: &FormGuide) -> Self {
        DetailedStandingsRow {
            team: team.to_string(),
            side,
            stats: BasicStats::from_record(record),
            extended: ExtendedStats::from_record(record),
            last5: form.last_five(),
            streak: form.streak_label(),
        }
    }
}

/// A ranked league table. The detailed shape only exists for the full roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Standings {
    Basic(Vec<StandingsRow>),
    Detailed(Vec<DetailedStandingsRow>),
}

impl Standings {
    pub fn len(&self) -> usize {
        match self {
            Standings::Basic(rows) => rows.len(),
            Standings::Detailed(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self, Standings::Detailed(_))
    }

    /// `(team, side, stats)` in rank order, whatever the shape.
    pub fn entries(&self) -> Vec<(&str, Side, &BasicStats)> {
        match self {
            Standings::Basic(rows) => rows.iter().map(|r| (r.team.as_str(), r.side, &r.stats)).collect(),
            Standings::Detailed(rows) => rows.iter().map(|r| (r.team.as_str(), r.side, &r.stats)).collect(),
        }
    }

    pub fn stats_of(&self, team: &str) -> Option<&BasicStats> {
        self.entries().into_iter().find(|(t, _, _)| *t == team).map(|(_, _, stats)| stats)
    }

    /// 1-based table position.
    pub fn position_of(&self, team: &str) -> Option<usize> {
        self.entries().iter().position(|(t, _, _)| *t == team).map(|idx| idx + 1)
    }
}
