use crate::league::table::{BasicStats, ExtendedStats, StandingsAggregator, TeamEntry, TeamRecord};
use crate::league::{LeagueMatch, Scope, Side};
use serde::Serialize;

const NOT_APPLICABLE: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotalsRow {
    #[serde(rename = "Team")]
    pub label: String,
    #[serde(rename = "Side")]
    pub side: Option<Side>,
    #[serde(flatten)]
    pub stats: BasicStats,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedTotalsRow {
    #[serde(rename = "Team")]
    pub label: String,
    #[serde(rename = "Side")]
    pub side: Option<Side>,
    #[serde(flatten)]
    pub stats: BasicStats,
    #[serde(flatten)]
    pub extended: ExtendedStats,
    #[serde(rename = "Last5")]
    pub last5: String,
    #[serde(rename = "Streak")]
    pub streak: String,
}

/// Summary rows for the M side, the V side and the whole league, in that order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StandingsTotals {
    Basic(Vec<TotalsRow>),
    Detailed(Vec<DetailedTotalsRow>),
}

impl StandingsTotals {
    pub fn stats(&self) -> Vec<&BasicStats> {
        match self {
            StandingsTotals::Basic(rows) => rows.iter().map(|r| &r.stats).collect(),
            StandingsTotals::Detailed(rows) => rows.iter().map(|r| &r.stats).collect(),
        }
    }
}

impl StandingsAggregator {
    /// Totals are summed from raw counters; GD and every ratio are
    /// recomputed from the sums rather than averaged.
    pub fn totals(matches: &[LeagueMatch], detailed: bool) -> StandingsTotals {
        let entries = Self::collect(matches, Scope::All);

        let groups = [
            ("Total M".to_string(), Some(Side::M), Self::sum_side(&entries, Some(Side::M))),
            ("Total V".to_string(), Some(Side::V), Self::sum_side(&entries, Some(Side::V))),
            ("Total ALL".to_string(), None, Self::sum_side(&entries, None)),
        ];

        if detailed {
            StandingsTotals::Detailed(
                groups
                    .into_iter()
                    .map(|(label, side, record)| DetailedTotalsRow {
                        label,
                        side,
                        stats: BasicStats::from_record(&record),
                        extended: ExtendedStats::from_record(&record),
                        last5: NOT_APPLICABLE.to_string(),
                        streak: NOT_APPLICABLE.to_string(),
                    })
                    .collect(),
            )
        } else {
            StandingsTotals::Basic(
                groups
                    .into_iter()
                    .map(|(label, side, record)| TotalsRow {
                        label,
                        side,
                        stats: BasicStats::from_record(&record),
                    })
                    .collect(),
            )
        }
    }

    fn sum_side(entries: &[TeamEntry], side: Option<Side>) -> TeamRecord {
        entries
            .iter()
            .filter(|e| side.is_none_or(|s| e.side == s))
            .map(|e| &e.record)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::matches::tests::played;

    fn sample_matches() -> Vec<LeagueMatch> {
        vec![
            played(1, 1, "FIN", "SLO", 4, 1, false),
            played(2, 1, "SWE", "KAZ", 2, 3, true),
            played(3, 2, "FIN", "KAZ", 10, 4, false),
        ]
    }

    #[test]
    fn test_basic_totals() {
        let totals = StandingsAggregator::totals(&sample_matches(), false);

        let StandingsTotals::Basic(rows) = totals else {
            panic!("expected basic totals");
        };

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "Total M");
        assert_eq!(rows[0].side, Some(Side::M));
        assert_eq!(rows[2].side, None);

        let m = &rows[0].stats;
        assert_eq!(m.played, 3);
        assert_eq!(m.points, 3 + 1 + 3);
        assert_eq!((m.goals_for, m.goals_against), (16, 8));
        assert_eq!(m.points_per_game, 2.333);

        let v = &rows[1].stats;
        assert_eq!(v.played, 3);
        assert_eq!(v.points, 2);
        assert_eq!(v.goal_difference, -8);

        let all = &rows[2].stats;
        assert_eq!(all.played, 6);
        assert_eq!(all.points, 9);
        assert_eq!(all.goal_difference, 0);
        assert_eq!(all.points_per_game, 1.5);
    }

    #[test]
    fn test_detailed_totals() {
        let StandingsTotals::Detailed(rows) = StandingsAggregator::totals(&sample_matches(), true) else {
            panic!("expected detailed totals");
        };

        let m = &rows[0];
        assert_eq!(m.last5, "-");
        assert_eq!(m.streak, "-");
        assert_eq!(m.extended.overtime_points, 1);
        assert_eq!(m.extended.blowout_wins, 2);
        assert_eq!(m.extended.ten_plus_for, 1);
        assert_eq!(m.extended.overtime_pct, 33.3);

        let all = &rows[2];
        assert_eq!(all.extended.points_pct, 50.0);
        assert_eq!(all.extended.ten_plus_for, 1);
        assert_eq!(all.extended.ten_plus_against, 1);
    }

    #[test]
    fn test_empty_totals() {
        let totals = StandingsAggregator::totals(&[], true);

        assert_eq!(totals.stats().len(), 3);
        assert!(totals.stats().iter().all(|s| s.played == 0 && s.points_per_game == 0.0));
    }
}
