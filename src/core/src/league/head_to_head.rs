use crate::league::{FixtureRef, LeagueMatch, M_TEAMS, PointsRule, ResultCode, Side, TEAMS_PER_SIDE, V_TEAMS, chronological};
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHeadSummary {
    pub wins: u32,
    pub overtime_wins: u32,
    pub overtime_losses: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

/// Meetings of two teams, summarised from the first team's view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub team: String,
    pub opponent: String,
    pub fixtures: Vec<FixtureRef>,
    pub summary: HeadToHeadSummary,
}

impl HeadToHead {
    pub fn between(matches: &[LeagueMatch], team: &str, opponent: &str) -> HeadToHead {
        let mut fixtures = Vec::new();
        let mut summary = HeadToHeadSummary::default();

        let meetings = matches
            .iter()
            .filter(|m| m.is_decided())
            .filter(|m| m.involves(team) && m.involves(opponent) && team != opponent);

        for m in chronological(meetings) {
            let Some(result) = m.for_team(team) else {
                continue;
            };

            summary.goals_for += result.goals_for as u32;
            summary.goals_against += result.goals_against as u32;

            match result.code() {
                ResultCode::Win => summary.wins += 1,
                ResultCode::OvertimeWin => summary.overtime_wins += 1,
                ResultCode::OvertimeLoss => summary.overtime_losses += 1,
                ResultCode::Loss => summary.losses += 1,
            }

            fixtures.push(m.fixture());
        }

        HeadToHead {
            team: team.to_string(),
            opponent: opponent.to_string(),
            fixtures,
            summary,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatrixCell {
    pub games: u32,
    pub points_m: u32,
    pub points_v: u32,
    pub goals_m: u32,
    pub goals_v: u32,
}

impl MatrixCell {
    /// `pm:pv`, empty when the pair has not played.
    pub fn points_label(&self) -> String {
        if self.games == 0 {
            return String::new();
        }
        format!("{}:{}", self.points_m, self.points_v)
    }

    /// `gm:gv`, empty when the pair has not played.
    pub fn goals_label(&self) -> String {
        if self.games == 0 {
            return String::new();
        }
        format!("{}:{}", self.goals_m, self.goals_v)
    }
}

/// M teams as rows, V teams as columns, both in roster order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeasonMatrix {
    pub cells: [[MatrixCell; TEAMS_PER_SIDE]; TEAMS_PER_SIDE],
}

impl SeasonMatrix {
    pub fn build(matches: &[LeagueMatch]) -> SeasonMatrix {
        let mut matrix = SeasonMatrix::default();

        for m in matches.iter().filter(|m| m.is_decided()) {
            let (home_points, away_points) = PointsRule::result_points(m.home_goals, m.away_goals, m.overtime);

            // either side may host
            let (m_team, v_team, points_m, points_v, goals_m, goals_v) =
                match (Side::of(&m.home_team), Side::of(&m.away_team)) {
                    (Some(Side::M), Some(Side::V)) => {
                        (&m.home_team, &m.away_team, home_points, away_points, m.home_goals, m.away_goals)
                    }
                    (Some(Side::V), Some(Side::M)) => {
                        (&m.away_team, &m.home_team, away_points, home_points, m.away_goals, m.home_goals)
                    }
                    _ => continue,
                };

            let (Some(row), Some(col)) = (Self::index_of(&M_TEAMS, m_team), Self::index_of(&V_TEAMS, v_team)) else {
                continue;
            };

            let cell = &mut matrix.cells[row][col];
            cell.games += 1;
            cell.points_m += points_m;
            cell.points_v += points_v;
            cell.goals_m += goals_m as u32;
            cell.goals_v += goals_v as u32;
        }

        matrix
    }

    pub fn cell(&self, m_team: &str, v_team: &str) -> Option<&MatrixCell> {
        let row = Self::index_of(&M_TEAMS, m_team)?;
        let col = Self::index_of(&V_TEAMS, v_team)?;

        Some(&self.cells[row][col])
    }

    pub fn points_grid(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(MatrixCell::points_label).collect())
            .collect()
    }

    pub fn goals_grid(&self) -> Vec<Vec<String>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(MatrixCell::goals_label).collect())
            .collect()
    }

    fn index_of(teams: &[&str], team: &str) -> Option<usize> {
        teams.iter().position(|t| *t == team)
    }
}
