//! Data structures for the games: people, districts, the district tree, game state.

mod district;
mod duel;
mod game;
mod person;
mod tree;

pub use district::District;
pub use duel::{DuelOutcome, DuelPair};
pub use game::{Game, GameError};
pub use person::{DistrictId, Parity, Person, TESSERA_AGES};
pub use tree::{DistrictTree, Preorder, TreeNode};
