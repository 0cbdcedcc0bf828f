//! Roster builders and stub combat rules shared across integration tests.

#![allow(dead_code)]

use hunger_games::{enter_all_districts, Combat, District, DistrictId, Game, Parity, Person};
use rand::rngs::StdRng;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An adult (no tessera) born in `birth_month`.
pub fn adult(name: &str, birth_month: u8, district_id: DistrictId) -> Person {
    Person::new(name, "Adult", birth_month, 30, district_id, 10).unwrap()
}

/// A 15-year-old tessera holder born in `birth_month`.
pub fn tribute(name: &str, birth_month: u8, district_id: DistrictId) -> Person {
    Person::new(name, "Tribute", birth_month, 15, district_id, 10).unwrap()
}

/// A district holding the given people (routed to odd/even by birth month).
pub fn district(id: DistrictId, people: Vec<Person>) -> District {
    let mut d = District::new(id);
    for p in people {
        d.add_person(p);
    }
    d
}

/// A game whose tree is built by entering `ids` in order; every district gets
/// `odd` odd-month adults and `even` even-month adults.
pub fn game_with_districts(seed: u64, ids: &[DistrictId], odd: usize, even: usize) -> Game {
    let mut game = Game::with_seed(seed);
    for &id in ids {
        game.add_district(id).unwrap();
        for i in 0..odd {
            game.add_person(adult(&format!("O{id}_{i}"), 1, id)).unwrap();
        }
        for i in 0..even {
            game.add_person(adult(&format!("E{id}_{i}"), 2, id)).unwrap();
        }
    }
    enter_all_districts(&mut game);
    game
}

/// Combat rule where the given side always wins.
pub fn always(side: Parity) -> impl FnMut(&Person, &Person, &mut StdRng) -> Parity {
    move |_, _, _| side
}

/// Higher effectiveness wins; ties go to the odd side. Never touches the generator.
pub struct Stronger;

impl Combat for Stronger {
    fn duel(&mut self, odd: &Person, even: &Person, _rng: &mut StdRng) -> Parity {
        if even.effectiveness > odd.effectiveness {
            Parity::Even
        } else {
            Parity::Odd
        }
    }
}

/// Ids of all districts in the game, in ascending order.
pub fn ids(game: &Game) -> Vec<DistrictId> {
    game.tree().ids()
}
