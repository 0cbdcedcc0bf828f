//! Person and Parity data structures.

use crate::models::game::GameError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Identifier of a district (unique across the game).
pub type DistrictId = u32;

/// Ages that hold a tessera and get priority in duel selection.
pub const TESSERA_AGES: Range<u32> = 12..18;

/// Which partition of a district a person belongs to (by birth month).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn of_month(birth_month: u8) -> Self {
        if birth_month % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Parity::Odd => Parity::Even,
            Parity::Even => Parity::Odd,
        }
    }
}

/// A person living in a district.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// 1 (January) to 12 (December).
    pub birth_month: u8,
    pub age: u32,
    pub district_id: DistrictId,
    pub effectiveness: i32,
    /// Priority eligibility, derived from age at construction.
    tessera: bool,
}

impl Person {
    /// Create a person; fails if `birth_month` is not in 1..=12.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_month: u8,
        age: u32,
        district_id: DistrictId,
        effectiveness: i32,
    ) -> Result<Self, GameError> {
        if !(1..=12).contains(&birth_month) {
            return Err(GameError::InvalidBirthMonth(birth_month));
        }
        Ok(Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_month,
            age,
            district_id,
            effectiveness,
            tessera: TESSERA_AGES.contains(&age),
        })
    }

    /// Holds a tessera (age within [`TESSERA_AGES`]), giving priority in duel selection.
    pub fn tessera(&self) -> bool {
        self.tessera
    }

    pub fn parity(&self) -> Parity {
        Parity::of_month(self.birth_month)
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
