use crate::league::table::{BasicStats, StandingsAggregator};
use crate::league::{FixtureRef, LeagueMatch, Scope, Side, chronological};
use crate::utils::FloatUtils;
use serde::Serialize;
use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleTeamRecord {
    pub team: String,
    pub goals: u16,
    pub fixture: FixtureRef,
}

/// Standout matches of a season.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonRecords {
    pub biggest_win: FixtureRef,
    pub most_goals: FixtureRef,
    pub most_goals_by_team: SingleTeamRecord,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GameCount {
    pub count: u32,
    pub pct: f64,
}

impl GameCount {
    fn of(count: u32, played: u32) -> Self {
        GameCount {
            count,
            pct: FloatUtils::round_to(FloatUtils::safe_percentage(count as f64, played as f64), 1),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamHighlight {
    pub team: String,
    pub side: Side,
    pub points: u32,
    pub points_per_game: f64,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
}

impl TeamHighlight {
    fn new(team: &str, side: Side, stats: &BasicStats) -> Self {
        TeamHighlight {
            team: team.to_string(),
            side,
            points: stats.points,
            points_per_game: stats.points_per_game,
            goals_for: stats.goals_for,
            goals_against: stats.goals_against,
            goal_difference: stats.goal_difference,
        }
    }
}

/// Season summary: how games were decided and which teams stood out.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonOverview {
    pub played: u32,
    pub overtime: GameCount,
    pub one_goal: GameCount,
    pub blowouts: GameCount,
    pub ten_plus: GameCount,
    pub best_m: Option<TeamHighlight>,
    pub best_v: Option<TeamHighlight>,
    pub best_offense: Option<TeamHighlight>,
    pub best_defense: Option<TeamHighlight>,
}

pub struct SeasonSummary;

impl SeasonSummary {
    /// `None` until at least one result is in. Ties go to the earliest
    /// match in (round, id) order.
    pub fn records(matches: &[LeagueMatch]) -> Option<SeasonRecords> {
        let played = chronological(matches.iter().filter(|m| m.is_decided()));

        // max_by_key keeps the last maximum, so scan newest first
        let biggest_win = played.iter().rev().max_by_key(|m| m.goal_margin())?;
        let most_goals = played.iter().rev().max_by_key(|m| m.total_goals())?;
        let most_single = played
            .iter()
            .rev()
            .max_by_key(|m| m.home_goals.max(m.away_goals))?;

        let (team, goals) = if most_single.home_goals >= most_single.away_goals {
            (most_single.home_team.clone(), most_single.home_goals)
        } else {
            (most_single.away_team.clone(), most_single.away_goals)
        };

        Some(SeasonRecords {
            biggest_win: biggest_win.fixture(),
            most_goals: most_goals.fixture(),
            most_goals_by_team: SingleTeamRecord {
                team,
                goals,
                fixture: most_single.fixture(),
            },
        })
    }

    pub fn overview(matches: &[LeagueMatch]) -> Option<SeasonOverview> {
        let played: Vec<&LeagueMatch> = matches.iter().filter(|m| !m.is_placeholder()).collect();
        if played.is_empty() {
            return None;
        }

        let total = played.len() as u32;
        let count = |predicate: fn(&LeagueMatch) -> bool| played.iter().filter(|m| predicate(m)).count() as u32;

        let standings = StandingsAggregator::compute(matches, Scope::All, false);
        let entries = standings.entries();

        let best_of_side = |side: Side| {
            let mut candidates: Vec<_> = entries.iter().filter(|(_, s, _)| *s == side).collect();
            candidates.sort_by(|(_, _, a), (_, _, b)| {
                b.points
                    .cmp(&a.points)
                    .then(b.points_per_game.partial_cmp(&a.points_per_game).unwrap_or(Ordering::Equal))
                    .then(b.goal_difference.cmp(&a.goal_difference))
                    .then(b.goals_for.cmp(&a.goals_for))
            });
            candidates.first().map(|(team, side, stats)| TeamHighlight::new(team, *side, stats))
        };

        let mut by_offense: Vec<_> = entries.iter().collect();
        by_offense.sort_by(|(_, _, a), (_, _, b)| {
            b.goals_for
                .cmp(&a.goals_for)
                .then(b.points.cmp(&a.points))
                .then(b.goal_difference.cmp(&a.goal_difference))
        });

        let mut by_defense: Vec<_> = entries.iter().collect();
        by_defense.sort_by(|(_, _, a), (_, _, b)| {
            a.goals_against
                .cmp(&b.goals_against)
                .then(b.points.cmp(&a.points))
                .then(b.goal_difference.cmp(&a.goal_difference))
        });

        Some(SeasonOverview {
            played: total,
            overtime: GameCount::of(count(|m| m.overtime), total),
            one_goal: GameCount::of(count(|m| m.goal_margin() == 1), total),
            blowouts: GameCount::of(count(|m| m.goal_margin() >= 3), total),
            ten_plus: GameCount::of(count(|m| m.home_goals >= 10 || m.away_goals >= 10), total),
            best_m: best_of_side(Side::M),
            best_v: best_of_side(Side::V),
            best_offense: by_offense.first().map(|(team, side, stats)| TeamHighlight::new(team, *side, stats)),
            best_defense: by_defense.first().map(|(team, side, stats)| TeamHighlight::new(team, *side, stats)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::matches::tests::played;

    fn sample_matches() -> Vec<LeagueMatch> {
        vec![
            played(1, 1, "FIN", "SLO", 6, 2, false),
            played(2, 1, "SWE", "KAZ", 3, 4, true),
            played(3, 1, "USA", "NOR", 0, 0, false),
            played(4, 2, "FIN", "KAZ", 1, 5, false),
            played(5, 2, "SWE", "SLO", 10, 9, false),
        ]
    }

    #[test]
    fn test_records() {
        let records = SeasonSummary::records(&sample_matches()).unwrap();

        // 6:2 and 1:5 share the biggest margin, the earlier one wins
        assert_eq!(records.biggest_win.match_id, 1);
        assert_eq!(records.most_goals.match_id, 5);
        assert_eq!(records.most_goals_by_team.team, "SWE");
        assert_eq!(records.most_goals_by_team.goals, 10);
        assert_eq!(records.most_goals_by_team.fixture.to_string(), "SWE 10 : 9 SLO");
    }

    #[test]
    fn test_records_with_huge_scores() {
        let matches = vec![
            played(1, 1, "FIN", "SLO", 40000, 30000, false),
            played(2, 2, "SWE", "KAZ", 65535, 1, false),
        ];

        let records = SeasonSummary::records(&matches).unwrap();

        assert_eq!(records.most_goals.match_id, 1);
        assert_eq!(records.biggest_win.match_id, 2);
        assert_eq!(records.most_goals_by_team.goals, 65535);
    }

    #[test]
    fn test_no_records_without_results() {
        let placeholders = vec![played(1, 1, "FIN", "SLO", 0, 0, false)];

        assert!(SeasonSummary::records(&placeholders).is_none());
        assert!(SeasonSummary::records(&[]).is_none());
        assert!(SeasonSummary::overview(&placeholders).is_none());
    }

    #[test]
    fn test_overview_counts() {
        let overview = SeasonSummary::overview(&sample_matches()).unwrap();

        assert_eq!(overview.played, 4);
        assert_eq!(overview.overtime, GameCount { count: 1, pct: 25.0 });
        assert_eq!(overview.one_goal.count, 2);
        assert_eq!(overview.one_goal.pct, 50.0);
        assert_eq!(overview.blowouts.count, 2);
        assert_eq!(overview.ten_plus.count, 1);
    }

    #[test]
    fn test_overview_highlights() {
        let overview = SeasonSummary::overview(&sample_matches()).unwrap();

        let best_m = overview.best_m.unwrap();
        assert_eq!(best_m.team, "SWE");
        assert_eq!(best_m.side, Side::M);
        assert_eq!(best_m.points, 4);
        assert_eq!(best_m.points_per_game, 2.0);

        let best_v = overview.best_v.unwrap();
        assert_eq!(best_v.team, "KAZ");
        assert_eq!(best_v.points, 5);

        let offense = overview.best_offense.unwrap();
        assert_eq!(offense.team, "SWE");
        assert_eq!(offense.goals_for, 13);

        // teams without games concede nothing
        let defense = overview.best_defense.unwrap();
        assert_eq!(defense.goals_against, 0);
        assert_eq!(defense.team, "USA");
    }
}
