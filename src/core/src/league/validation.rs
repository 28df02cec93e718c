use crate::league::{FixtureRef, LeagueMatch, NewMatch, Side};
use log::{debug, warn};
use thiserror::Error;

/// Why a candidate match cannot be stored.
///
/// These are advisory: the caller shows the message and lets the user
/// correct the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchRejection {
    #[error("home and away cannot be the same team ({team})")]
    SameTeam { team: String },

    #[error("home team {team} must belong to the M group")]
    WrongGroupHome { team: String },

    #[error("away team {team} must belong to the V group")]
    WrongGroupAway { team: String },

    #[error("draws are not allowed ({home_goals}:{away_goals})")]
    DrawNotAllowed { home_goals: u16, away_goals: u16 },

    #[error("team {team} already plays in round {round} ({existing})")]
    RoundConflictHome {
        team: String,
        round: u32,
        existing: FixtureRef,
    },

    #[error("team {team} already plays in round {round} ({existing})")]
    RoundConflictAway {
        team: String,
        round: u32,
        existing: FixtureRef,
    },
}

impl MatchRejection {
    /// The conflicting stored fixture, for round conflicts.
    pub fn conflicting_fixture(&self) -> Option<&FixtureRef> {
        match self {
            MatchRejection::RoundConflictHome { existing, .. }
            | MatchRejection::RoundConflictAway { existing, .. } => Some(existing),
            _ => None,
        }
    }
}

pub struct MatchValidator;

impl MatchValidator {
    pub fn validate_insert(candidate: &NewMatch, existing: &[LeagueMatch]) -> Result<(), MatchRejection> {
        Self::validate(candidate, None, existing)
    }

    /// Validates an edit of the stored match `match_id`; that row is ignored
    /// by the round conflict checks.
    pub fn validate_update(
        match_id: u32,
        candidate: &NewMatch,
        existing: &[LeagueMatch],
    ) -> Result<(), MatchRejection> {
        Self::validate(candidate, Some(match_id), existing)
    }

    /// Rules are checked in a fixed order and the first failure is returned.
    /// `existing` may hold any part of the store; only rows of the
    /// candidate's season and round are considered.
    pub fn validate(
        candidate: &NewMatch,
        excluded_id: Option<u32>,
        existing: &[LeagueMatch],
    ) -> Result<(), MatchRejection> {
        if candidate.home_team == candidate.away_team {
            return Err(MatchRejection::SameTeam {
                team: candidate.home_team.clone(),
            });
        }

        if Side::of(&candidate.home_team) != Some(Side::M) {
            return Err(MatchRejection::WrongGroupHome {
                team: candidate.home_team.clone(),
            });
        }

        if Side::of(&candidate.away_team) != Some(Side::V) {
            return Err(MatchRejection::WrongGroupAway {
                team: candidate.away_team.clone(),
            });
        }

        if candidate.home_goals == candidate.away_goals {
            return Err(MatchRejection::DrawNotAllowed {
                home_goals: candidate.home_goals,
                away_goals: candidate.away_goals,
            });
        }

        if candidate.round == 0 {
            warn!("match {} vs {} has round 0", candidate.home_team, candidate.away_team);
        }

        let same_round: Vec<&LeagueMatch> = existing
            .iter()
            .filter(|m| m.season == candidate.season && m.round == candidate.round)
            .filter(|m| excluded_id != Some(m.id))
            .collect();

        debug!(
            "validating {} vs {} against {} matches of round {}",
            candidate.home_team,
            candidate.away_team,
            same_round.len(),
            candidate.round
        );

        if let Some(conflict) = same_round.iter().find(|m| m.involves(&candidate.home_team)) {
            return Err(MatchRejection::RoundConflictHome {
                team: candidate.home_team.clone(),
                round: candidate.round,
                existing: conflict.fixture(),
            });
        }

        if let Some(conflict) = same_round.iter().find(|m| m.involves(&candidate.away_team)) {
            return Err(MatchRejection::RoundConflictAway {
                team: candidate.away_team.clone(),
                round: candidate.round,
                existing: conflict.fixture(),
            });
        }

        Ok(())
    }
}
