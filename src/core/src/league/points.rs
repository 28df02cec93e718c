use log::warn;

pub const REGULATION_WIN_POINTS: u32 = 3;
pub const OVERTIME_WIN_POINTS: u32 = 2;
pub const OVERTIME_LOSS_POINTS: u32 = 1;
pub const REGULATION_LOSS_POINTS: u32 = 0;

pub struct PointsRule;

impl PointsRule {
    /// Points for `(home, away)`: 3/0 in regulation, 2/1 after overtime.
    ///
    /// A draw yields `(0, 0)`. Validation rejects draws before they are
    /// stored, so reaching that branch means the snapshot is inconsistent.
    pub fn result_points(home_goals: u16, away_goals: u16, overtime: bool) -> (u32, u32) {
        if home_goals > away_goals {
            (Self::winner_points(overtime), Self::loser_points(overtime))
        } else if away_goals > home_goals {
            (Self::loser_points(overtime), Self::winner_points(overtime))
        } else {
            warn!("draw {}:{} reached the points rule, awarding no points", home_goals, away_goals);
            (0, 0)
        }
    }

    /// Points for a single team given its own score line.
    pub fn team_points(goals_for: u16, goals_against: u16, overtime: bool) -> u32 {
        if goals_for > goals_against {
            Self::winner_points(overtime)
        } else if goals_for < goals_against {
            Self::loser_points(overtime)
        } else {
            warn!("draw {}:{} reached the points rule, awarding no points", goals_for, goals_against);
            0
        }
    }

    #[inline]
    fn winner_points(overtime: bool) -> u32 {
        if overtime { OVERTIME_WIN_POINTS } else { REGULATION_WIN_POINTS }
    }

    #[inline]
    fn loser_points(overtime: bool) -> u32 {
        if overtime { OVERTIME_LOSS_POINTS } else { REGULATION_LOSS_POINTS }
    }
}
