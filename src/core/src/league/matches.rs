use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: u32,
    pub label: String,
}

impl Season {
    pub fn new(id: u32, label: impl Into<String>) -> Self {
        Season {
            id,
            label: label.into(),
        }
    }
}

/// One season together with its match rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonMatches {
    pub season: Season,
    pub matches: Vec<LeagueMatch>,
}

impl SeasonMatches {
    /// Groups a store-wide snapshot by season, ordered by season id.
    /// Seasons without rows still get an empty entry.
    pub fn split(seasons: &[Season], matches: &[LeagueMatch]) -> Vec<SeasonMatches> {
        seasons
            .iter()
            .sorted_by_key(|s| s.id)
            .map(|season| SeasonMatches {
                season: season.clone(),
                matches: matches.iter().filter(|m| m.season == season.id).cloned().collect(),
            })
            .collect()
    }
}

/// A stored match row. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueMatch {
    pub id: u32,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u16,
    pub away_goals: u16,
    #[serde(default)]
    pub overtime: bool,
    pub round: u32,
    pub season: u32,
    #[serde(default)]
    pub is_playoff: bool,
}

impl LeagueMatch {
    /// Scheduled fixture without a result yet (0:0).
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.home_goals == 0 && self.away_goals == 0
    }

    #[inline]
    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    /// A real result. Placeholders are 0:0, so they never count as decided.
    #[inline]
    pub fn is_decided(&self) -> bool {
        !self.is_draw()
    }

    pub fn involves(&self, team: &str) -> bool {
        self.home_team == team || self.away_team == team
    }

    pub fn goal_margin(&self) -> u16 {
        self.home_goals.abs_diff(self.away_goals)
    }

    pub fn total_goals(&self) -> u32 {
        self.home_goals as u32 + self.away_goals as u32
    }

    /// The match seen from one of its participants.
    pub fn for_team(&self, team: &str) -> Option<TeamResult> {
        if self.home_team == team {
            Some(self.home_result())
        } else if self.away_team == team {
            Some(self.away_result())
        } else {
            None
        }
    }

    pub fn home_result(&self) -> TeamResult {
        TeamResult {
            goals_for: self.home_goals,
            goals_against: self.away_goals,
            overtime: self.overtime,
            is_home: true,
        }
    }

    pub fn away_result(&self) -> TeamResult {
        TeamResult {
            goals_for: self.away_goals,
            goals_against: self.home_goals,
            overtime: self.overtime,
            is_home: false,
        }
    }

    pub fn fixture(&self) -> FixtureRef {
        FixtureRef {
            match_id: self.id,
            round: self.round,
            home_team: self.home_team.clone(),
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            away_team: self.away_team.clone(),
        }
    }
}

/// Matches in stable chronological order: by round, then by id.
pub fn chronological<'a>(matches: impl IntoIterator<Item = &'a LeagueMatch>) -> Vec<&'a LeagueMatch> {
    matches.into_iter().sorted_by_key(|m| (m.round, m.id)).collect()
}

/// A match row that has not been stored yet, or the edited form of a stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewMatch {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u16,
    pub away_goals: u16,
    #[serde(default)]
    pub overtime: bool,
    pub round: u32,
    pub season: u32,
    #[serde(default)]
    pub is_playoff: bool,
}

impl NewMatch {
    pub fn placeholder(season: u32, round: u32, home_team: &str, away_team: &str) -> Self {
        NewMatch {
            home_team: home_team.to_string(),
            away_team: away_team.to_string(),
            home_goals: 0,
            away_goals: 0,
            overtime: false,
            round,
            season,
            is_playoff: false,
        }
    }

    pub fn with_result(mut self, home_goals: u16, away_goals: u16, overtime: bool) -> Self {
        self.home_goals = home_goals;
        self.away_goals = away_goals;
        self.overtime = overtime;
        self
    }

    pub fn stored(self, id: u32) -> LeagueMatch {
        LeagueMatch {
            id,
            home_team: self.home_team,
            away_team: self.away_team,
            home_goals: self.home_goals,
            away_goals: self.away_goals,
            overtime: self.overtime,
            round: self.round,
            season: self.season,
            is_playoff: self.is_playoff,
        }
    }
}

impl From<&LeagueMatch> for NewMatch {
    fn from(m: &LeagueMatch) -> Self {
        NewMatch {
            home_team: m.home_team.clone(),
            away_team: m.away_team.clone(),
            home_goals: m.home_goals,
            away_goals: m.away_goals,
            overtime: m.overtime,
            round: m.round,
            season: m.season,
            is_playoff: m.is_playoff,
        }
    }
}

/// Short reference to a stored fixture, rendered as `FIN 3 : 2 SLO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureRef {
    pub match_id: u32,
    pub round: u32,
    pub home_team: String,
    pub home_goals: u16,
    pub away_goals: u16,
    pub away_team: String,
}

impl Display for FixtureRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} : {} {}",
            self.home_team, self.home_goals, self.away_goals, self.away_team
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamResult {
    pub goals_for: u16,
    pub goals_against: u16,
    pub overtime: bool,
    pub is_home: bool,
}

impl TeamResult {
    #[inline]
    pub fn won(&self) -> bool {
        self.goals_for > self.goals_against
    }

    pub fn code(&self) -> ResultCode {
        match (self.won(), self.overtime) {
            (true, false) => ResultCode::Win,
            (true, true) => ResultCode::OvertimeWin,
            (false, true) => ResultCode::OvertimeLoss,
            (false, false) => ResultCode::Loss,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResultCode {
    #[serde(rename = "W")]
    Win,
    #[serde(rename = "W-OT")]
    OvertimeWin,
    #[serde(rename = "L-OT")]
    OvertimeLoss,
    #[serde(rename = "L")]
    Loss,
}

impl ResultCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultCode::Win => "W",
            ResultCode::OvertimeWin => "W-OT",
            ResultCode::OvertimeLoss => "L-OT",
            ResultCode::Loss => "L",
        }
    }
}

impl Display for ResultCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
