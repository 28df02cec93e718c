use crate::league::{M_TEAMS, NewMatch, TEAMS_PER_SIDE};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// V order in the first round. Each following round rotates it left by one.
pub const V_START_ORDER: [&str; 8] = ["SLO", "KAZ", "NOR", "LOT", "SVK", "SUI", "CES", "KAN"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Fixture {
    pub round: u32,
    pub home_team: &'static str,
    pub away_team: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRound {
    pub round: u32,
    pub fixtures: Vec<Fixture>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schedule {
    pub rounds: Vec<ScheduleRound>,
}

impl Schedule {
    pub fn fixtures(&self) -> impl Iterator<Item = &Fixture> {
        self.rounds.iter().flat_map(|r| r.fixtures.iter())
    }

    pub fn len(&self) -> usize {
        self.fixtures().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// How many times each (M, V) pair meets across the whole schedule.
    pub fn meetings(&self) -> HashMap<(&'static str, &'static str), usize> {
        let mut meetings = HashMap::new();

        for fixture in self.fixtures() {
            *meetings.entry((fixture.home_team, fixture.away_team)).or_insert(0) += 1;
        }

        meetings
    }

    /// Zero-score rows ready to be stored for `season_id`.
    pub fn to_placeholders(&self, season_id: u32) -> Vec<NewMatch> {
        self.fixtures()
            .map(|f| NewMatch::placeholder(season_id, f.round, f.home_team, f.away_team))
            .collect()
    }
}

pub struct ScheduleGenerator;

impl ScheduleGenerator {
    /// Builds `round_count` rounds of eight pairings each.
    ///
    /// `M_TEAMS[i]` hosts the i-th V team of the current order. The V order
    /// has period 8, so for a multiple of 8 rounds every pair meets
    /// `round_count / 8` times. Other counts are not evened out: the first
    /// `round_count % 8` rotations simply occur once more.
    pub fn generate(round_count: u32) -> Schedule {
        let mut v_order = V_START_ORDER;
        let mut rounds = Vec::with_capacity(round_count as usize);

        for round in 1..=round_count {
            let fixtures = (0..TEAMS_PER_SIDE)
                .map(|i| Fixture {
                    round,
                    home_team: M_TEAMS[i],
                    away_team: v_order[i],
                })
                .collect();

            rounds.push(ScheduleRound { round, fixtures });

            v_order.rotate_left(1);
        }

        debug!("generated schedule: {} rounds", round_count);

        Schedule { rounds }
    }
}
