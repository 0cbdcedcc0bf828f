//! District elimination engine: districts indexed in a binary search tree, duel selection
//! with tessera priority, and cascading elimination of exhausted districts.

pub mod combat;
pub mod config;
pub mod logic;
pub mod models;

pub use combat::Combat;
pub use config::GameConfig;
pub use logic::{eliminate_dueler, enter_all_districts, play_round, select_duelers};
pub use models::{
    District, DistrictId, DistrictTree, DuelOutcome, DuelPair, Game, GameError, Parity, Person,
    Preorder, TreeNode, TESSERA_AGES,
};
