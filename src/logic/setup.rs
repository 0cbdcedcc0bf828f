//! Setup phase: move the roster into the game.

use crate::models::Game;

/// Enter every roster district into the game, in roster order. Returns how many were inserted.
///
/// The first roster district becomes the tree root, so roster order decides the tree shape
/// (and with it the order duel selection visits districts).
pub fn enter_all_districts(game: &mut Game) -> usize {
    let roster = std::mem::take(&mut game.districts);
    let mut entered = 0;
    for district in roster {
        if game.tree.insert(district) {
            entered += 1;
        }
    }
    log::info!(
        "{} district(s) entered the game ({} people)",
        entered,
        game.population()
    );
    entered
}
