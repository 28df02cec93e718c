use crate::league::ResultCode;
use itertools::Itertools;
use serde::Serialize;
use std::fmt::{Display, Formatter};

const FORM_LENGTH: usize = 5;

/// A team's result codes in chronological order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormGuide {
    codes: Vec<ResultCode>,
}

impl FormGuide {
    pub fn new() -> Self {
        FormGuide::default()
    }

    pub fn push(&mut self, code: ResultCode) {
        self.codes.push(code);
    }

    pub fn codes(&self) -> &[ResultCode] {
        &self.codes
    }

    /// Up to the last five codes, oldest first, e.g. `W, L-OT, W`.
    pub fn last_five(&self) -> String {
        let start = self.codes.len().saturating_sub(FORM_LENGTH);
        self.codes[start..].iter().join(", ")
    }

    /// Current run of identical codes counted back from the latest game.
    pub fn streak(&self) -> Option<Streak> {
        let last = *self.codes.last()?;
        let length = self.codes.iter().rev().take_while(|&&code| code == last).count();

        Some(Streak { code: last, length })
    }

    pub fn streak_label(&self) -> String {
        self.streak().map(|s| s.to_string()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Streak {
    pub code: ResultCode,
    pub length: usize,
}

impl Display for Streak {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.code, self.length)
    }
}
