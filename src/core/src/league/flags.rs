use crate::league::{LeagueMatch, chronological};
use serde::Serialize;
use std::fmt::{Display, Formatter};

const BLOWOUT_MARGIN: u16 = 3;
const TEN_PLUS_GOALS: u16 = 10;

/// Kind of game a match counts as in season filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MatchKind {
    #[serde(rename = "OT")]
    Overtime,
    #[serde(rename = "1G")]
    OneGoal,
    #[serde(rename = "BLOW")]
    Blowout,
    #[serde(rename = "10+")]
    TenPlus,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchKind::Overtime => "OT",
            MatchKind::OneGoal => "1G",
            MatchKind::Blowout => "BLOW",
            MatchKind::TenPlus => "10+",
        }
    }
}

impl Display for MatchKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MatchFlags {
    pub overtime: bool,
    pub one_goal: bool,
    pub blowout: bool,
    pub ten_plus: bool,
}

impl MatchFlags {
    pub fn of(m: &LeagueMatch) -> Self {
        let margin = m.goal_margin();

        MatchFlags {
            overtime: m.overtime,
            one_goal: margin == 1,
            blowout: margin >= BLOWOUT_MARGIN,
            ten_plus: m.home_goals >= TEN_PLUS_GOALS || m.away_goals >= TEN_PLUS_GOALS,
        }
    }

    pub fn has(&self, kind: MatchKind) -> bool {
        match kind {
            MatchKind::Overtime => self.overtime,
            MatchKind::OneGoal => self.one_goal,
            MatchKind::Blowout => self.blowout,
            MatchKind::TenPlus => self.ten_plus,
        }
    }

    /// Short tags in display order; `BLOW` is only shown without `1G`.
    pub fn kinds(&self) -> Vec<MatchKind> {
        let mut kinds = Vec::new();

        if self.overtime {
            kinds.push(MatchKind::Overtime);
        }
        if self.one_goal {
            kinds.push(MatchKind::OneGoal);
        } else if self.blowout {
            kinds.push(MatchKind::Blowout);
        }
        if self.ten_plus {
            kinds.push(MatchKind::TenPlus);
        }

        kinds
    }

    /// The `Info` column, e.g. `OT, 1G`.
    pub fn label(&self) -> String {
        self.kinds().iter().map(MatchKind::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl LeagueMatch {
    pub fn flags(&self) -> MatchFlags {
        MatchFlags::of(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedMatch {
    #[serde(flatten)]
    pub game: LeagueMatch,
    #[serde(rename = "Info")]
    pub info: String,
}

impl FlaggedMatch {
    fn new(game: &LeagueMatch) -> Self {
        FlaggedMatch {
            game: game.clone(),
            info: game.flags().label(),
        }
    }
}

/// Season match list filter. No team means every team, no kinds means every kind;
/// several kinds match a game having any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchFilter {
    pub team: Option<String>,
    pub kinds: Vec<MatchKind>,
}

impl MatchFilter {
    pub fn new() -> Self {
        MatchFilter::default()
    }

    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_kind(mut self, kind: MatchKind) -> Self {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
        self
    }

    pub fn accepts(&self, m: &LeagueMatch) -> bool {
        if let Some(team) = &self.team {
            if !m.involves(team) {
                return false;
            }
        }

        if self.kinds.is_empty() {
            return true;
        }

        let flags = m.flags();
        self.kinds.iter().any(|&kind| flags.has(kind))
    }

    /// Accepted matches in (round, id) order.
    pub fn apply(&self, matches: &[LeagueMatch]) -> Vec<FlaggedMatch> {
        chronological(matches.iter().filter(|m| self.accepts(m)))
            .into_iter()
            .map(FlaggedMatch::new)
            .collect()
    }

    /// One team's matches with their tags, in (round, id) order.
    pub fn team_matches(matches: &[LeagueMatch], team: &str) -> Vec<FlaggedMatch> {
        MatchFilter::new().with_team(team).apply(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::matches::tests::played;

    fn season() -> Vec<LeagueMatch> {
        vec![
            played(4, 2, "FIN", "KAZ", 3, 2, true),
            played(1, 1, "FIN", "SLO", 6, 1, false),
            played(2, 1, "SWE", "KAZ", 11, 9, false),
            played(3, 1, "USA", "NOR", 2, 4, false),
            played(5, 2, "SWE", "SLO", 0, 0, false),
        ]
    }

    #[test]
    fn test_flags_and_label() {
        let matches = season();

        assert_eq!(matches[0].flags().label(), "OT, 1G");
        assert_eq!(matches[1].flags().label(), "BLOW");
        assert_eq!(matches[2].flags().label(), "10+");
        assert_eq!(matches[3].flags().label(), "");
        assert_eq!(matches[4].flags(), MatchFlags::default());
    }

    #[test]
    fn test_blowout_not_shown_with_one_goal() {
        let flags = MatchFlags {
            one_goal: true,
            blowout: true,
            ..MatchFlags::default()
        };

        assert_eq!(flags.kinds(), vec![MatchKind::OneGoal]);
        assert!(flags.has(MatchKind::Blowout));
    }

    #[test]
    fn test_empty_filter_keeps_everything_in_order() {
        let ids: Vec<u32> = MatchFilter::new().apply(&season()).iter().map(|m| m.game.id).collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_kinds_combine_with_or() {
        let filter = MatchFilter::new()
            .with_kind(MatchKind::Overtime)
            .with_kind(MatchKind::TenPlus);

        let ids: Vec<u32> = filter.apply(&season()).iter().map(|m| m.game.id).collect();

        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_team_and_kind_combine_with_and() {
        let filter = MatchFilter::new().with_team("FIN").with_kind(MatchKind::Blowout);

        let result = filter.apply(&season());

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].game.id, 1);
        assert_eq!(result[0].info, "BLOW");
    }

    #[test]
    fn test_team_matches() {
        let result = MatchFilter::team_matches(&season(), "KAZ");

        let ids: Vec<u32> = result.iter().map(|m| m.game.id).collect();
        assert_eq!(ids, vec![2, 4]);
        assert_eq!(result[1].info, "OT, 1G");

        assert!(MatchFilter::team_matches(&season(), "MAD").is_empty());
    }
}
