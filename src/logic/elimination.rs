//! Duel resolution and cascading district elimination.

use crate::combat::Combat;
use crate::logic::selection::select_duelers;
use crate::models::{DistrictId, DuelOutcome, DuelPair, Game, Parity, Person};

/// Fight the duel for `pair` and apply the result.
///
/// - Incomplete pair: the lone dueler goes back to their district; no duel, no elimination.
/// - Complete pair: `combat` picks the winner, who goes back to their district. The loser is gone
///   for good. Then the winner's and the loser's districts are each removed from the game if either
///   of their partitions is empty (a district can fall on a duel it won).
pub fn eliminate_dueler<C>(game: &mut Game, pair: DuelPair, combat: &mut C) -> DuelOutcome
where
    C: Combat + ?Sized,
{
    let (odd, even) = match (pair.odd, pair.even) {
        (Some(odd), Some(even)) => (odd, even),
        (Some(lone), None) => return walkover(game, Some((lone, Parity::Odd))),
        (None, Some(lone)) => return walkover(game, Some((lone, Parity::Even))),
        (None, None) => return walkover(game, None),
    };

    let winning_side = combat.duel(&odd, &even, &mut game.rng);
    let (winner, loser) = match winning_side {
        Parity::Odd => (odd, even),
        Parity::Even => (even, odd),
    };
    log::debug!(
        "{} (district {}) defeated {} (district {})",
        winner.full_name(),
        winner.district_id,
        loser.full_name(),
        loser.district_id
    );
    send_home(game, winner.clone(), winning_side);

    let mut eliminated = Vec::new();
    if eliminate_if_defeated(game, winner.district_id) {
        eliminated.push(winner.district_id);
    }
    if loser.district_id != winner.district_id && eliminate_if_defeated(game, loser.district_id) {
        eliminated.push(loser.district_id);
    }
    if let Some(last) = game.winner() {
        log::info!("District {} is the last one standing", last.id());
    }

    DuelOutcome::Decided {
        winner,
        winning_side,
        loser,
        eliminated,
    }
}

/// Select two duelers and resolve their duel.
pub fn play_round<C>(game: &mut Game, combat: &mut C) -> DuelOutcome
where
    C: Combat + ?Sized,
{
    let pair = select_duelers(game);
    eliminate_dueler(game, pair, combat)
}

fn walkover(game: &mut Game, lone: Option<(Person, Parity)>) -> DuelOutcome {
    let district_id = lone.map(|(person, parity)| {
        let id = person.district_id;
        send_home(game, person, parity);
        id
    });
    log::debug!("Walkover, no duel fought (district {:?})", district_id);
    DuelOutcome::Walkover { district_id }
}

fn send_home(game: &mut Game, person: Person, parity: Parity) {
    match game.find_district_mut(person.district_id) {
        Some(district) => district.population_of_mut(parity).push(person),
        None => log::warn!(
            "District {} is no longer in the game; {} cannot return",
            person.district_id,
            person.full_name()
        ),
    }
}

fn eliminate_if_defeated(game: &mut Game, id: DistrictId) -> bool {
    let defeated = game.find_district(id).is_some_and(|d| d.is_defeated());
    if defeated {
        game.eliminate_district(id);
    }
    defeated
}
