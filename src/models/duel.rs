//! DuelPair and DuelOutcome.

use crate::models::person::{DistrictId, Parity, Person};
use serde::{Deserialize, Serialize};

/// Two duelers: one from an odd partition, one from an even partition (either may be missing).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct DuelPair {
    pub odd: Option<Person>,
    pub even: Option<Person>,
}

impl DuelPair {
    pub fn new(odd: Option<Person>, even: Option<Person>) -> Self {
        Self { odd, even }
    }

    /// Both sides filled, so a duel can be fought.
    pub fn is_complete(&self) -> bool {
        self.odd.is_some() && self.even.is_some()
    }

    pub fn get(&self, parity: Parity) -> Option<&Person> {
        match parity {
            Parity::Odd => self.odd.as_ref(),
            Parity::Even => self.even.as_ref(),
        }
    }
}

/// What happened to a pair after [`crate::eliminate_dueler`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuelOutcome {
    /// Incomplete pair: the lone dueler (if any) went back to this district; nobody fought.
    Walkover { district_id: Option<DistrictId> },
    /// A duel was fought. `eliminated` lists districts removed from the game by the cascade.
    Decided {
        winner: Person,
        winning_side: Parity,
        loser: Person,
        eliminated: Vec<DistrictId>,
    },
}

impl DuelOutcome {
    pub fn eliminated(&self) -> &[DistrictId] {
        match self {
            DuelOutcome::Walkover { .. } => &[],
            DuelOutcome::Decided { eliminated, .. } => eliminated.as_slice(),
        }
    }
}
