//! Game logic: setup, duel selection, duel resolution and elimination.

mod elimination;
mod selection;
mod setup;

pub use elimination::{eliminate_dueler, play_round};
pub use selection::select_duelers;
pub use setup::enter_all_districts;
