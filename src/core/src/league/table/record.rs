use crate::league::{PointsRule, TeamResult};
use std::iter::Sum;
use std::ops::AddAssign;

const ONE_GOAL_MARGIN: u16 = 1;
const BLOWOUT_MARGIN: u16 = 3;
const TEN_PLUS_GOALS: u16 = 10;

/// Raw per-team counters accumulated over decided matches.
///
/// Everything shown in a standings row is derived from these.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRecord {
    pub played: u32,
    pub wins: u32,
    pub overtime_wins: u32,
    pub overtime_losses: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub points: u32,

    pub overtime_games: u32,
    pub one_goal_wins: u32,
    pub one_goal_losses: u32,
    pub blowout_wins: u32,
    pub blowout_losses: u32,
    pub shutouts_for: u32,
    pub shutouts_against: u32,
    pub ten_plus_for: u32,
    pub ten_plus_against: u32,
}

impl TeamRecord {
    pub fn add_result(&mut self, result: &TeamResult) {
        let won = result.won();

        self.played += 1;
        self.goals_for += result.goals_for as u32;
        self.goals_against += result.goals_against as u32;
        self.points += PointsRule::team_points(result.goals_for, result.goals_against, result.overtime);

        match (won, result.overtime) {
            (true, false) => self.wins += 1,
            (true, true) => self.overtime_wins += 1,
            (false, true) => self.overtime_losses += 1,
            (false, false) => self.losses += 1,
        }

        if result.overtime {
            self.overtime_games += 1;
        }

        if result.goals_against == 0 {
            self.shutouts_for += 1;
        }
        if result.goals_for == 0 {
            self.shutouts_against += 1;
        }

        let margin = result.goals_for.abs_diff(result.goals_against);
        if margin == ONE_GOAL_MARGIN {
            if won {
                self.one_goal_wins += 1;
            } else {
                self.one_goal_losses += 1;
            }
        } else if margin >= BLOWOUT_MARGIN {
            if won {
                self.blowout_wins += 1;
            } else {
                self.blowout_losses += 1;
            }
        }

        if result.goals_for >= TEN_PLUS_GOALS {
            self.ten_plus_for += 1;
        }
        if result.goals_against >= TEN_PLUS_GOALS {
            self.ten_plus_against += 1;
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }
}

impl AddAssign<&TeamRecord> for TeamRecord {
    fn add_assign(&mut self, other: &TeamRecord) {
        self.played += other.played;
        self.wins += other.wins;
        self.overtime_wins += other.overtime_wins;
        self.overtime_losses += other.overtime_losses;
        self.losses += other.losses;
        self.goals_for += other.goals_for;
        self.goals_against += other.goals_against;
        self.points += other.points;
        self.overtime_games += other.overtime_games;
        self.one_goal_wins += other.one_goal_wins;
        self.one_goal_losses += other.one_goal_losses;
        self.blowout_wins += other.blowout_wins;
        self.blowout_losses += other.blowout_losses;
        self.shutouts_for += other.shutouts_for;
        self.shutouts_against += other.shutouts_against;
        self.ten_plus_for += other.ten_plus_for;
        self.ten_plus_against += other.ten_plus_against;
    }
}

impl<'a> Sum<&'a TeamRecord> for TeamRecord {
    fn sum<I: Iterator<Item = &'a TeamRecord>>(iter: I) -> Self {
        iter.fold(TeamRecord::default(), |mut acc, record| {
            acc += record;
            acc
        })
    }
}
