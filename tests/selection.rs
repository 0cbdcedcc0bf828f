//! Integration tests for duel selection: tessera priority, district exclusivity, determinism.

mod common;

use common::{adult, district, game_with_districts, tribute};
use hunger_games::{eliminate_dueler, select_duelers, Game, Parity, Person};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn tessera_holders_are_picked_first_without_random_draws() {
    common::init_logging();
    let mut game = Game::with_seed(11);
    game.add_district_to_game(district(1, vec![tribute("p1", 1, 1), adult("p2", 2, 1)]));
    game.add_district_to_game(district(2, vec![adult("p3", 3, 2), tribute("p4", 4, 2)]));

    let pair = select_duelers(&mut game);
    let odd = pair.odd.clone().unwrap();
    let even = pair.even.clone().unwrap();
    assert_eq!((odd.first_name.as_str(), odd.district_id), ("p1", 1));
    assert_eq!((even.first_name.as_str(), even.district_id), ("p4", 2));

    // Chosen duelers leave their partitions.
    assert!(game.find_district(1).unwrap().odd_population().is_empty());
    assert!(game.find_district(2).unwrap().even_population().is_empty());

    // The fallback pass never ran, so the generator is still at its first draw.
    let mut first_draw = None;
    eliminate_dueler(&mut game, pair, &mut |_: &Person, _: &Person, rng: &mut StdRng| {
        first_draw = Some(rng.gen::<u64>());
        Parity::Odd
    });
    assert_eq!(first_draw, Some(StdRng::seed_from_u64(11).gen::<u64>()));
}

#[test]
fn district_cannot_supply_both_duelers() {
    let mut game = Game::with_seed(3);
    // District 1 has tessera holders on both sides; it is visited first.
    game.add_district_to_game(district(1, vec![tribute("a", 1, 1), tribute("b", 2, 1)]));
    game.add_district_to_game(district(2, vec![adult("c", 5, 2), adult("d", 6, 2)]));

    let pair = select_duelers(&mut game);
    assert_eq!(pair.odd.as_ref().unwrap().first_name, "a");
    let even = pair.even.unwrap();
    assert_eq!(even.district_id, 2);
    assert_eq!(even.first_name, "d");
    // "b" stays home.
    assert_eq!(game.find_district(1).unwrap().even_population()[0].first_name, "b");
}

#[test]
fn priority_reaches_deep_districts() {
    let mut game = Game::with_seed(5);
    for id in [50, 30, 70, 20, 40, 60, 80] {
        let mut people = vec![adult("odd", 1, id), adult("even", 2, id)];
        if id == 80 {
            people.push(tribute("deep_odd", 7, id));
        }
        if id == 40 {
            people.push(tribute("deep_even", 8, id));
        }
        game.add_district_to_game(district(id, people));
    }

    let pair = select_duelers(&mut game);
    let odd = pair.odd.unwrap();
    let even = pair.even.unwrap();
    assert!(odd.tessera());
    assert_eq!(odd.first_name, "deep_odd");
    assert!(even.tessera());
    assert_eq!(even.first_name, "deep_even");
}

#[test]
fn first_tessera_in_stored_order_wins() {
    let mut game = Game::with_seed(5);
    game.add_district_to_game(district(
        1,
        vec![
            adult("old", 1, 1),
            tribute("first", 3, 1),
            tribute("second", 5, 1),
            adult("e", 2, 1),
        ],
    ));
    game.add_district_to_game(district(2, vec![adult("x", 1, 2), adult("y", 2, 2)]));

    let pair = select_duelers(&mut game);
    assert_eq!(pair.odd.unwrap().first_name, "first");
    let left: Vec<_> = game
        .find_district(1)
        .unwrap()
        .odd_population()
        .iter()
        .map(|p| p.first_name.clone())
        .collect();
    assert_eq!(left, vec!["old", "second"]);
}

#[test]
fn fallback_picks_come_from_different_districts() {
    for seed in 0..50 {
        let mut game = game_with_districts(seed, &[8, 4, 12, 2, 6, 10, 14], 3, 3);
        let before = game.population();

        let pair = select_duelers(&mut game);
        let odd = pair.odd.unwrap();
        let even = pair.even.unwrap();
        assert_ne!(odd.district_id, even.district_id, "seed {seed}");
        assert_eq!(odd.parity(), Parity::Odd);
        assert_eq!(even.parity(), Parity::Even);
        assert_eq!(game.population(), before - 2);
        // Without tessera holders the first two districts in pre-order are used.
        assert_eq!((odd.district_id, even.district_id), (8, 4));
    }
}

#[test]
fn same_tree_and_seed_give_same_selection() {
    let build = || game_with_districts(99, &[5, 2, 8, 1, 9], 4, 4);
    let mut first = build();
    let mut second = build();
    let mut cloned = first.clone();

    for _ in 0..5 {
        let a = select_duelers(&mut first);
        let b = select_duelers(&mut second);
        let c = select_duelers(&mut cloned);
        assert_eq!(a, b);
        assert_eq!(a, c);
    }
}

#[test]
fn missing_side_yields_partial_pair() {
    let mut game = Game::with_seed(1);
    game.add_district_to_game(district(1, vec![adult("odd", 1, 1), adult("even", 2, 1)]));

    // A single district cannot field both sides.
    let pair = select_duelers(&mut game);
    assert!(!pair.is_complete());
    assert!(pair.odd.is_some());
    assert!(pair.even.is_none());

    let mut empty = Game::with_seed(1);
    let pair = select_duelers(&mut empty);
    assert!(pair.odd.is_none() && pair.even.is_none());
}

#[test]
fn district_giving_the_even_priority_pick_is_skipped_for_the_odd_one() {
    let mut game = Game::with_seed(21);
    // Root district: only the even side holds a tessera.
    game.add_district_to_game(district(
        1,
        vec![adult("a_odd1", 1, 1), adult("a_odd2", 3, 1), tribute("a_even", 2, 1)],
    ));
    game.add_district_to_game(district(2, vec![adult("b_odd", 5, 2), adult("b_even", 4, 2)]));

    let pair = select_duelers(&mut game);
    let even = pair.even.unwrap();
    assert_eq!((even.first_name.as_str(), even.district_id), ("a_even", 1));
    let odd = pair.odd.unwrap();
    assert_eq!((odd.first_name.as_str(), odd.district_id), ("b_odd", 2));

    let root = game.find_district(1).unwrap();
    assert_eq!(root.odd_population().len(), 2);
    assert!(root.even_population().is_empty());
}

#[test]
fn empty_partition_costs_no_random_draw() {
    for seed in 0..20 {
        let mut game = Game::with_seed(seed);
        // Root district has no odd members; district 2 follows it in pre-order.
        game.add_district_to_game(district(
            1,
            vec![adult("e0", 2, 1), adult("e1", 4, 1), adult("e2", 6, 1)],
        ));
        game.add_district_to_game(district(
            2,
            vec![adult("o0", 1, 2), adult("o1", 3, 2), adult("o2", 5, 2), adult("x", 8, 2)],
        ));

        let pair = select_duelers(&mut game);

        // First draw: even side of district 1. Second draw: odd side of district 2.
        let mut rng = StdRng::seed_from_u64(seed);
        let even_index = rng.gen_range(0..3usize);
        let odd_index = rng.gen_range(0..3usize);
        assert_eq!(pair.even.unwrap().first_name, format!("e{even_index}"), "seed {seed}");
        assert_eq!(pair.odd.unwrap().first_name, format!("o{odd_index}"), "seed {seed}");
    }
}
