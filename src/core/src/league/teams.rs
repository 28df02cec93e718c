use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Home conference. These teams always host.
pub const M_TEAMS: [&str; 8] = ["FIN", "SWE", "USA", "NEM", "DAN", "FRA", "RAK", "MAD"];

/// Away conference, in roster order.
pub const V_TEAMS: [&str; 8] = ["KAN", "CES", "SVK", "SUI", "LOT", "NOR", "KAZ", "SLO"];

pub const TEAMS_PER_SIDE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    M,
    V,
}

impl Side {
    pub fn of(team: &str) -> Option<Side> {
        if M_TEAMS.contains(&team) {
            Some(Side::M)
        } else if V_TEAMS.contains(&team) {
            Some(Side::V)
        } else {
            None
        }
    }

    pub fn teams(&self) -> &'static [&'static str] {
        match self {
            Side::M => &M_TEAMS,
            Side::V => &V_TEAMS,
        }
    }
}

impl Display for Side {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::M => write!(f, "M"),
            Side::V => write!(f, "V"),
        }
    }
}

/// Which part of the roster a table covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    M,
    V,
    All,
}

impl Scope {
    /// Teams in scope, in canonical enumeration order (M before V).
    pub fn teams(&self) -> Vec<&'static str> {
        match self {
            Scope::M => M_TEAMS.to_vec(),
            Scope::V => V_TEAMS.to_vec(),
            Scope::All => M_TEAMS.iter().chain(V_TEAMS.iter()).copied().collect(),
        }
    }

    pub fn contains(&self, side: Side) -> bool {
        match self {
            Scope::M => side == Side::M,
            Scope::V => side == Side::V,
            Scope::All => true,
        }
    }
}
