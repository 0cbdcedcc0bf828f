//! Duel selection: pick one odd and one even dueler from two different districts.

use crate::models::{DistrictId, DuelPair, Game, Parity, Person};
use rand::Rng;

/// A chosen dueler, located by district and position in the partition list.
#[derive(Clone, Copy, Debug)]
struct Pick {
    district_id: DistrictId,
    index: usize,
}

/// Select the next two duelers and remove them from their districts.
///
/// 1. Walk the tree in pre-order and take the first tessera holder of each partition.
///    A district that gives one dueler cannot give the other.
/// 2. If a side is still open, walk again (same order, skipping districts already used)
///    and take a uniformly random member of the first district that can supply it.
///
/// Random draws only happen in step 2, so the same tree and seed always give the same pair.
/// If no district can supply a side, that side of the pair is `None`.
pub fn select_duelers(game: &mut Game) -> DuelPair {
    let mut odd: Option<Pick> = None;
    let mut even: Option<Pick> = None;
    let mut used: Vec<DistrictId> = Vec::new();

    for node in game.tree.preorder() {
        if odd.is_some() && even.is_some() {
            break;
        }
        let district = node.district();
        if odd.is_none() {
            if let Some(index) = first_tessera(district.odd_population()) {
                odd = Some(Pick {
                    district_id: district.id(),
                    index,
                });
                used.push(district.id());
                continue;
            }
        }
        if even.is_none() {
            if let Some(index) = first_tessera(district.even_population()) {
                even = Some(Pick {
                    district_id: district.id(),
                    index,
                });
                used.push(district.id());
            }
        }
    }

    if odd.is_none() || even.is_none() {
        for node in game.tree.preorder() {
            if odd.is_some() && even.is_some() {
                break;
            }
            let district = node.district();
            if used.contains(&district.id()) {
                continue;
            }
            if odd.is_none() {
                let size = district.odd_population().len();
                if size > 0 {
                    odd = Some(Pick {
                        district_id: district.id(),
                        index: game.rng.gen_range(0..size),
                    });
                    continue;
                }
            }
            if even.is_none() {
                let size = district.even_population().len();
                if size > 0 {
                    even = Some(Pick {
                        district_id: district.id(),
                        index: game.rng.gen_range(0..size),
                    });
                }
            }
        }
    }

    let odd = take_pick(game, odd, Parity::Odd);
    let even = take_pick(game, even, Parity::Even);
    match (&odd, &even) {
        (Some(o), Some(e)) => log::debug!(
            "Selected {} (district {}) vs {} (district {})",
            o.full_name(),
            o.district_id,
            e.full_name(),
            e.district_id
        ),
        _ => log::warn!(
            "Could not fill both sides of the duel (odd: {}, even: {})",
            odd.is_some(),
            even.is_some()
        ),
    }
    DuelPair::new(odd, even)
}

fn first_tessera(population: &[Person]) -> Option<usize> {
    population.iter().position(Person::tessera)
}

fn take_pick(game: &mut Game, pick: Option<Pick>, parity: Parity) -> Option<Person> {
    let pick = pick?;
    game.find_district_mut(pick.district_id)?.take_person(parity, pick.index)
}
