use crate::league::table::{BasicStats, DetailedStandingsRow, FormGuide, Standings, StandingsRow, TeamRecord};
use crate::league::{LeagueMatch, Scope, Side, chronological};
use log::{debug, warn};
use std::collections::HashMap;

/// Aggregate of one team after scanning a match snapshot.
#[derive(Debug, Clone)]
pub struct TeamEntry {
    pub team: &'static str,
    pub side: Side,
    pub record: TeamRecord,
    pub form: FormGuide,
}

impl TeamEntry {
    fn new(team: &'static str, side: Side) -> Self {
        TeamEntry {
            team,
            side,
            record: TeamRecord::default(),
            form: FormGuide::new(),
        }
    }
}

pub struct StandingsAggregator;

impl StandingsAggregator {
    /// Ranked table for `scope`.
    ///
    /// `detailed` only applies to [`Scope::All`]; other scopes always get
    /// the basic shape. Every team in scope gets a row, played or not.
    pub fn compute(matches: &[LeagueMatch], scope: Scope, detailed: bool) -> Standings {
        let entries = Self::collect(matches, scope);

        if detailed && scope != Scope::All {
            debug!("detailed metrics requested for {:?}, returning basic table", scope);
        }

        if detailed && scope == Scope::All {
            let mut rows: Vec<DetailedStandingsRow> = entries
                .iter()
                .map(|e| DetailedStandingsRow::new(e.team, e.side, &e.record, &e.form))
                .collect();

            rows.sort_by(|a, b| BasicStats::table_order(&a.stats, &b.stats));

            Standings::Detailed(rows)
        } else {
            let mut rows: Vec<StandingsRow> = entries
                .iter()
                .map(|e| StandingsRow::new(e.team, e.side, &e.record))
                .collect();

            rows.sort_by(|a, b| BasicStats::table_order(&a.stats, &b.stats));

            Standings::Basic(rows)
        }
    }

    /// One pass over the snapshot in (round, id) order. Draws, and with
    /// them 0:0 placeholders, are skipped. Entries come back in roster
    /// order, unsorted.
    pub fn collect(matches: &[LeagueMatch], scope: Scope) -> Vec<TeamEntry> {
        let teams = scope.teams();

        let mut entries: HashMap<&str, TeamEntry> = teams
            .iter()
            .filter_map(|&team| Side::of(team).map(|side| (team, TeamEntry::new(team, side))))
            .collect();

        let mut skipped = 0;

        for m in chronological(matches) {
            if m.is_draw() {
                skipped += 1;
                continue;
            }

            for (team, result) in [
                (m.home_team.as_str(), m.home_result()),
                (m.away_team.as_str(), m.away_result()),
            ] {
                if let Some(entry) = entries.get_mut(team) {
                    entry.record.add_result(&result);
                    entry.form.push(result.code());
                } else if Side::of(team).is_none() {
                    warn!("match {} references unknown team {}, ignoring it", m.id, team);
                }
            }
        }

        debug!(
            "standings for {:?}: {} matches, {} placeholders or draws skipped",
            scope,
            matches.len(),
            skipped
        );

        teams.iter().filter_map(|team| entries.remove(team)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::matches::tests::played;
    use crate::league::{M_TEAMS, ScheduleGenerator, V_TEAMS};

    fn sample_matches() -> Vec<LeagueMatch> {
        vec![
            played(1, 1, "FIN", "SLO", 4, 1, false),
            played(2, 1, "SWE", "KAZ", 2, 3, true),
            played(3, 1, "USA", "NOR", 0, 0, false),
            played(4, 2, "FIN", "KAZ", 5, 4, true),
            played(5, 2, "SWE", "SLO", 0, 2, false),
            played(6, 3, "FIN", "NOR", 11, 0, false),
        ]
    }

    #[test]
    fn test_empty_snapshot_gives_zero_rows() {
        let standings = StandingsAggregator::compute(&[], Scope::All, false);

        assert_eq!(standings.len(), 16);
        for (_, _, stats) in standings.entries() {
            assert_eq!(stats.played, 0);
            assert_eq!(stats.points, 0);
            assert_eq!(stats.points_per_game, 0.0);
        }
    }

    #[test]
    fn test_empty_snapshot_keeps_roster_order() {
        let standings = StandingsAggregator::compute(&[], Scope::All, false);

        let teams: Vec<&str> = standings.entries().iter().map(|(t, _, _)| *t).collect();
        let roster: Vec<&str> = M_TEAMS.iter().chain(V_TEAMS.iter()).copied().collect();

        assert_eq!(teams, roster);
    }

    #[test]
    fn test_scope_selects_teams() {
        let m = StandingsAggregator::compute(&sample_matches(), Scope::M, false);
        let v = StandingsAggregator::compute(&sample_matches(), Scope::V, true);

        assert_eq!(m.len(), 8);
        assert!(m.entries().iter().all(|(_, side, _)| *side == Side::M));
        assert_eq!(v.len(), 8);
        assert!(!v.is_detailed());
        assert!(v.entries().iter().all(|(_, side, _)| *side == Side::V));
    }

    #[test]
    fn test_basic_table_values() {
        let standings = StandingsAggregator::compute(&sample_matches(), Scope::All, false);

        let fin = standings.stats_of("FIN").unwrap();
        assert_eq!(fin.played, 3);
        assert_eq!((fin.wins, fin.overtime_wins, fin.overtime_losses, fin.losses), (2, 1, 0, 0));
        assert_eq!(fin.points, 8);
        assert_eq!((fin.goals_for, fin.goals_against, fin.goal_difference), (20, 5, 15));
        assert_eq!(fin.points_per_game, 2.667);

        let kaz = standings.stats_of("KAZ").unwrap();
        assert_eq!((kaz.overtime_wins, kaz.overtime_losses), (1, 1));
        assert_eq!(kaz.points, 3);

        // the 0:0 row is a placeholder
        let usa = standings.stats_of("USA").unwrap();
        assert_eq!(usa.played, 0);

        assert_eq!(standings.position_of("FIN"), Some(1));
    }

    #[test]
    fn test_ordering_prefers_regulation_wins() {
        let matches = vec![
            played(1, 1, "FIN", "SLO", 3, 2, true),
            played(2, 1, "SWE", "KAZ", 1, 0, false),
            played(3, 2, "FIN", "KAZ", 3, 2, true),
            played(4, 2, "SWE", "SLO", 2, 3, true),
        ];

        // FIN: 2 + 2 = 4 points, SWE: 3 + 1 = 4 points, SWE has the regulation win
        let standings = StandingsAggregator::compute(&matches, Scope::M, false);

        assert_eq!(standings.position_of("SWE"), Some(1));
        assert_eq!(standings.position_of("FIN"), Some(2));
    }

    #[test]
    fn test_full_ties_keep_roster_order() {
        let matches = vec![
            played(1, 1, "SWE", "SLO", 2, 1, false),
            played(2, 1, "FIN", "KAZ", 2, 1, false),
        ];

        let standings = StandingsAggregator::compute(&matches, Scope::M, false);

        assert_eq!(standings.position_of("FIN"), Some(1));
        assert_eq!(standings.position_of("SWE"), Some(2));
        assert_eq!(standings.position_of("USA"), Some(3));
    }

    #[test]
    fn test_detailed_table() {
        let standings = StandingsAggregator::compute(&sample_matches(), Scope::All, true);

        let rows = match standings {
            Standings::Detailed(rows) => rows,
            _ => panic!("expected detailed table"),
        };

        let fin = rows.iter().find(|r| r.team == "FIN").unwrap();
        assert_eq!(fin.last5, "W, W-OT, W");
        assert_eq!(fin.streak, "W1");
        assert_eq!(fin.extended.points_pct, 88.9);
        assert_eq!(fin.extended.overtime_points, 2);
        assert_eq!(fin.extended.one_goal_wins, 1);
        assert_eq!(fin.extended.blowout_wins, 2);
        assert_eq!(fin.extended.shutouts_for, 1);
        assert_eq!(fin.extended.ten_plus_for, 1);
        assert_eq!(fin.extended.overtime_pct, 33.3);

        let slo = rows.iter().find(|r| r.team == "SLO").unwrap();
        assert_eq!(slo.last5, "L, W");
        assert_eq!(slo.extended.blowout_losses, 1);

        let nor = rows.iter().find(|r| r.team == "NOR").unwrap();
        assert_eq!(nor.extended.ten_plus_against, 1);
        assert_eq!(nor.extended.shutouts_against, 1);

        let usa = rows.iter().find(|r| r.team == "USA").unwrap();
        assert_eq!(usa.last5, "");
        assert_eq!(usa.streak, "");
    }

    #[test]
    fn test_form_follows_round_order_not_input_order() {
        let matches = vec![
            played(9, 2, "FIN", "KAZ", 1, 2, false),
            played(3, 1, "FIN", "SLO", 2, 1, false),
        ];

        let standings = StandingsAggregator::compute(&matches, Scope::All, true);
        let Standings::Detailed(rows) = standings else {
            panic!("expected detailed table");
        };

        let fin = rows.iter().find(|r| r.team == "FIN").unwrap();
        assert_eq!(fin.last5, "W, L");
        assert_eq!(fin.streak, "L1");
    }

    #[test]
    fn test_goals_are_conserved() {
        let mut matches: Vec<LeagueMatch> = ScheduleGenerator::generate(16)
            .to_placeholders(1)
            .into_iter()
            .enumerate()
            .map(|(idx, m)| {
                let idx = idx as u16;
                let (hg, ag) = if idx % 3 == 0 { (idx % 7 + 1, idx % 5) } else { (idx % 4, idx % 4 + 2) };
                m.with_result(hg, ag, idx % 4 == 1).stored(idx as u32 + 1)
            })
            .collect();
        matches.push(played(999, 3, "FIN", "XYZ", 5, 1, false));

        let standings = StandingsAggregator::compute(&matches, Scope::All, false);

        let gf: u32 = standings.entries().iter().map(|(_, _, s)| s.goals_for).sum();
        let ga: u32 = standings.entries().iter().map(|(_, _, s)| s.goals_against).sum();

        assert!(gf > 0);
        assert_eq!(gf - 5, ga - 1);
    }

    #[test]
    fn test_same_team_row_credits_each_side_once() {
        let matches = vec![played(1, 1, "FIN", "FIN", 3, 1, false)];

        let standings = StandingsAggregator::compute(&matches, Scope::All, false);
        let fin = standings.stats_of("FIN").unwrap();

        assert_eq!((fin.played, fin.wins, fin.losses), (2, 1, 1));
        assert_eq!((fin.goals_for, fin.goals_against), (4, 4));
        assert_eq!(fin.points, 3);
    }

    #[test]
    fn test_unknown_team_is_ignored() {
        let matches = vec![played(1, 1, "ABC", "XYZ", 3, 1, false)];

        let standings = StandingsAggregator::compute(&matches, Scope::All, false);

        assert_eq!(standings.len(), 16);
        assert!(standings.entries().iter().all(|(_, _, s)| s.played == 0));
    }

    #[test]
    fn test_idempotent() {
        let matches = sample_matches();

        assert_eq!(
            StandingsAggregator::compute(&matches, Scope::All, true),
            StandingsAggregator::compute(&matches, Scope::All, true)
        );
    }
}
